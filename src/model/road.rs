use serde::{Deserialize, Serialize};

use super::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadKind {
    Main,
    Secondary,
    Alley,
}

/// A straight road segment between two block centroids. Endpoints are
/// captured by value at generation time and never follow a block afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: Point,
    pub to: Point,
    pub width: u32,
    pub kind: RoadKind,
}
