use serde::{Deserialize, Serialize};

use super::block::Block;
use super::building::Building;
use super::label::Label;
use super::point::Point;
use super::poi::Poi;
use super::prop::Prop;
use super::road::Road;
use super::tree::Tree;
use super::water::WaterArea;

/// Resolved size specification: the growth budget and the nominal city
/// radius in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityDims {
    pub blocks: u32,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMeta {
    pub seed: u32,
    /// Unix timestamp (seconds) of the generation run.
    pub generated_at: u64,
    pub generator: String,
}

/// The city proper: every collection the generation stages fill in. Stages
/// mutate one `CityLayout` in sequence; afterwards it is frozen inside
/// [`CityData`] except for the caller-side append operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLayout {
    pub size: CityDims,
    pub tags: Vec<String>,
    pub center: Point,
    pub blocks: Vec<Block>,
    pub roads: Vec<Road>,
    pub water_areas: Vec<WaterArea>,
    pub pois: Vec<Poi>,
    /// Wall ring (scaled convex hull); empty when no wall was built.
    pub walls: Vec<Point>,
    pub props: Vec<Prop>,
    pub trees: Vec<Tree>,
    pub buildings: Vec<Building>,
    pub labels: Vec<Label>,
}

impl CityLayout {
    pub fn new(center: Point, size: CityDims, tags: Vec<String>) -> Self {
        Self {
            size,
            tags,
            center,
            blocks: Vec::new(),
            roads: Vec::new(),
            water_areas: Vec::new(),
            pois: Vec::new(),
            walls: Vec::new(),
            props: Vec::new(),
            trees: Vec::new(),
            buildings: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityStats {
    pub total_blocks: usize,
    pub total_roads: usize,
    pub total_pois: usize,
    pub total_buildings: usize,
}

/// The single artifact handed to rendering, export, and persistence
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityData {
    pub meta: CityMeta,
    pub city: CityLayout,
    pub stats: CityStats,
}

impl CityData {
    /// Append a caller-supplied point of interest. The generator never reads
    /// appended entries back.
    pub fn add_poi(&mut self, poi: Poi) {
        self.city.pois.push(poi);
        self.stats.total_pois = self.city.pois.len();
    }

    /// Append a caller-supplied map label.
    pub fn add_label(&mut self, label: Label) {
        self.city.labels.push(label);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
