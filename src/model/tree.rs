use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeSpecies {
    Oak,
    Pine,
    Maple,
}

impl TreeSpecies {
    pub const ALL: [TreeSpecies; 3] = [TreeSpecies::Oak, TreeSpecies::Pine, TreeSpecies::Maple];

    pub fn as_str(self) -> &'static str {
        match self {
            TreeSpecies::Oak => "oak",
            TreeSpecies::Pine => "pine",
            TreeSpecies::Maple => "maple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub x: f64,
    pub y: f64,
    /// Relative scale factor, roughly 0.8–1.5.
    pub size: f64,
    pub species: TreeSpecies,
}
