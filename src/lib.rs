//! Deterministic procedural generator for fantasy city layouts.
//!
//! A city is grown from a single `u32` seed: districts branch out from a
//! central block, tag strings switch optional features on (walls, water,
//! a citadel, and so on), and the result serializes to JSON.
//!
//! ```
//! use city_gen::{CityGenerator, SizeSpec};
//!
//! let generator = CityGenerator::new(Some(42), SizeSpec::Small, vec!["city-walls".into()]);
//! let city = generator.generate();
//! assert_eq!(city.meta.seed, 42);
//! assert_eq!(city.city, generator.generate().city);
//! ```

pub mod citygen;
pub mod geometry;
pub mod model;
pub mod rng;

pub use citygen::{CityGenerator, SizeSpec, generate_city};
pub use model::{
    Block, BlockKind, Building, BuildingKind, CityData, CityDims, CityLayout, CityMeta, CityStats,
    Label, Point, Poi, Prop, Road, RoadKind, Tree, TreeSpecies, WaterArea,
};
pub use rng::SeededRandom;
