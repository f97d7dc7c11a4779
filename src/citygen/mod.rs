//! The staged city generation pipeline.
//!
//! [`CityGenerator`] runs a fixed sequence of stages against one mutable
//! [`CityLayout`]: size resolution, district growth, tag-driven features,
//! roads, furnishing, and a late tag pass. Every stage draws from a single
//! seeded stream, so equal inputs produce equal cities.

pub mod blocks;
pub mod config;
pub mod furnish;
pub mod roads;
pub mod tags;
pub mod walls;
pub mod water;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::model::{CityData, CityLayout, CityMeta, CityStats, Point};
use crate::rng::SeededRandom;

pub use config::SizeSpec;

/// Canvas-space anchor every city grows around.
pub const CITY_CENTER: Point = Point { x: 400.0, y: 300.0 };

/// Seeded generator for one city configuration. Holds the resolved seed,
/// the requested size, and the feature tags; [`CityGenerator::generate`]
/// can be called any number of times and always rebuilds the same city.
#[derive(Debug, Clone)]
pub struct CityGenerator {
    seed: u32,
    size: SizeSpec,
    tags: Vec<String>,
}

impl CityGenerator {
    /// A `None` or zero seed gets replaced by a fresh random one, so two
    /// unseeded generators produce different cities while each remains
    /// individually reproducible.
    pub fn new(seed: Option<u32>, size: SizeSpec, tags: Vec<String>) -> Self {
        let seed = match seed {
            Some(s) if s != 0 => s,
            _ => SeededRandom::fresh_seed(),
        };
        Self { seed, size, tags }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Run the full pipeline and return the finished city.
    pub fn generate(&self) -> CityData {
        let mut rng = SeededRandom::new(self.seed);

        let dims = self.size.resolve(&mut rng);
        debug!(seed = self.seed, blocks = dims.blocks, radius = dims.radius, "resolved city size");

        let mut city = CityLayout::new(CITY_CENTER, dims, self.tags.clone());

        blocks::generate_central_block(&mut city, &mut rng);
        blocks::grow_branches(&mut city, 0, dims.blocks, 0, &mut rng);
        debug!(blocks = city.blocks.len(), "district growth complete");

        tags::apply_tag_stages(&mut city, &mut rng);

        roads::generate_road_network(&mut city, &mut rng);
        furnish::place_buildings(&mut city, &mut rng);
        furnish::scatter_props(&mut city, &mut rng);

        let poi_count = 5 + rng.random_int(0, 10);
        furnish::generate_pois(&mut city, poi_count, &mut rng);

        tags::apply_late_tag_stages(&mut city, &mut rng);
        debug!(
            roads = city.roads.len(),
            pois = city.pois.len(),
            buildings = city.buildings.len(),
            "city pipeline finished"
        );

        let stats = CityStats {
            total_blocks: city.blocks.len(),
            total_roads: city.roads.len(),
            total_pois: city.pois.len(),
            total_buildings: city.buildings.len(),
        };
        CityData {
            meta: CityMeta {
                seed: self.seed,
                generated_at: unix_now(),
                generator: format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            },
            city,
            stats,
        }
    }
}

/// One-call convenience wrapper around [`CityGenerator`].
pub fn generate_city(seed: Option<u32>, size: SizeSpec, tags: Vec<String>) -> CityData {
    CityGenerator::new(seed, size, tags).generate()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
