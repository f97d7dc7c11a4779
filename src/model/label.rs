use serde::{Deserialize, Serialize};

/// Free-floating text annotation on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: u32,
}
