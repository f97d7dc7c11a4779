use serde::{Deserialize, Serialize};

use super::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Central,
    District,
    Neighborhood,
    Citadel,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Central => "central",
            BlockKind::District => "district",
            BlockKind::Neighborhood => "neighborhood",
            BlockKind::Citadel => "citadel",
        }
    }
}

/// A polygonal district. Blocks form a rooted tree through `parent_id` and
/// `children`; block 0 is always the central block at depth 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique id, assigned in creation order starting at 0.
    pub id: usize,
    /// Ordered polygon vertices, at least 3.
    pub vertices: Vec<Point>,
    pub kind: BlockKind,
    /// Distance from the root in the growth tree.
    pub depth: u32,
    /// Ids of child blocks, in creation order.
    pub children: Vec<usize>,
    /// Absent only for the root and for citadel blocks.
    pub parent_id: Option<usize>,
    /// Set only when the multi-level tag is active.
    pub elevation: Option<u8>,
}
