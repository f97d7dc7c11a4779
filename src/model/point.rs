use serde::{Deserialize, Serialize};

/// Plain 2D coordinate in world units. Points carry no identity; two points
/// at the same position are the same point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
