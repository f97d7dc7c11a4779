use serde::{Deserialize, Serialize};

/// Decorative, non-interactive scenery: wells, carts, docks, rubble and the
/// like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub x: f64,
    pub y: f64,
    pub kind: String,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}
