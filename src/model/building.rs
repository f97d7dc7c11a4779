use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    Residential,
    Commercial,
    Religious,
    Military,
    Governmental,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::Residential,
        BuildingKind::Commercial,
        BuildingKind::Religious,
        BuildingKind::Military,
        BuildingKind::Governmental,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildingKind::Residential => "residential",
            BuildingKind::Commercial => "commercial",
            BuildingKind::Religious => "religious",
            BuildingKind::Military => "military",
            BuildingKind::Governmental => "governmental",
        }
    }
}

/// A placed structure. Buildings are positioned relative to a block centroid
/// at generation time but keep no reference to the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub kind: BuildingKind,
    pub floors: u32,
}
