use serde::{Deserialize, Serialize};

use super::point::Point;

/// A water feature: a closed ring of points for lakes, an open arc for
/// coastlines and waterfront ribbons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterArea {
    pub points: Vec<Point>,
}
