use serde::{Deserialize, Serialize};

/// A named, typed landmark. Gates and secret entrances are emitted as POIs
/// rather than as separate entity kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub x: f64,
    pub y: f64,
    pub kind: String,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub secret: bool,
}
