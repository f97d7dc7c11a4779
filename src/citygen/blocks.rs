use std::f64::consts::TAU;

use crate::geometry::centroid;
use crate::model::{Block, BlockKind, CityLayout, Point};
use crate::rng::SeededRandom;

use super::tags;

/// Depth at which recursion stops unconditionally.
const MAX_DEPTH: u32 = 8;

/// Create block 0: an irregular 4–7 sided polygon around the city center.
pub fn generate_central_block(city: &mut CityLayout, rng: &mut SeededRandom) {
    let sides = 4 + rng.random_int(0, 3);
    let radius = (40 + rng.random_int(0, 20)) as f64;

    let mut vertices = Vec::with_capacity(sides as usize);
    for i in 0..sides {
        let angle = i as f64 * TAU / sides as f64 + rng.random_float(-0.1, 0.1);
        let variance = rng.random_float(0.8, 1.2);
        vertices.push(Point::new(
            city.center.x + radius * variance * angle.cos(),
            city.center.y + radius * variance * angle.sin(),
        ));
    }

    city.blocks.push(Block {
        id: 0,
        vertices,
        kind: BlockKind::Central,
        depth: 0,
        children: Vec::new(),
        parent_id: None,
        elevation: None,
    });
}

/// Recursively grow child blocks around `parent_id`, spending from a block
/// budget that is threaded through the recursion: each call returns the
/// budget left after its whole subtree, and the caller keeps spending from
/// that remainder for later siblings.
pub fn grow_branches(
    city: &mut CityLayout,
    parent_id: usize,
    mut remaining: u32,
    depth: u32,
    rng: &mut SeededRandom,
) -> u32 {
    if remaining == 0 || depth > MAX_DEPTH {
        return remaining;
    }

    let chaotic = city.has_tag(tags::CHAOTIC);
    let compact = city.has_tag(tags::COMPACT);
    let large = city.has_tag(tags::LARGE);

    let max_children = if depth < 2 { 3 } else { 2 };
    let child_count = 1 + rng.random_int(0, max_children - 1);

    for i in 0..child_count {
        if remaining == 0 {
            break;
        }

        // Always branch in the inner rings; beyond depth 4 it is a 60% roll.
        let should_branch = depth < 4 || rng.next() > 0.4;
        if !should_branch {
            continue;
        }

        let parent_center = centroid(&city.blocks[parent_id].vertices);
        let mut angle = i as f64 * (TAU / child_count as f64) + rng.random_float(-0.3, 0.3);
        if chaotic {
            angle += rng.random_float(-0.5, 0.5);
        }

        let mut distance_scale = 1.0;
        if compact {
            distance_scale *= 0.7;
        }
        if large {
            distance_scale *= 1.3;
        }
        let distance = 50.0 + rng.random_int(20, 60) as f64 * distance_scale;

        let child_center = Point::new(
            parent_center.x + distance * angle.cos(),
            parent_center.y + distance * angle.sin(),
        );

        let sides = 4 + rng.random_int(0, 2);
        let radius = (30 + rng.random_int(0, 25)) as f64;
        let mut vertices = Vec::with_capacity(sides as usize);
        for j in 0..sides {
            let vertex_angle = j as f64 * TAU / sides as f64 + rng.random_float(-0.2, 0.2);
            vertices.push(Point::new(
                child_center.x + radius * vertex_angle.cos(),
                child_center.y + radius * vertex_angle.sin(),
            ));
        }

        let child_id = city.blocks.len();
        city.blocks.push(Block {
            id: child_id,
            vertices,
            kind: if depth == 0 {
                BlockKind::District
            } else {
                BlockKind::Neighborhood
            },
            depth: depth + 1,
            children: Vec::new(),
            parent_id: Some(parent_id),
            elevation: None,
        });
        city.blocks[parent_id].children.push(child_id);
        remaining -= 1;

        // Willingness to grow deeper districts falls off with depth.
        let growth_probability = (0.7 - depth as f64 * 0.1).max(0.0);
        if rng.next() < growth_probability {
            remaining = grow_branches(city, child_id, remaining, depth + 1, rng);
        }
    }

    remaining
}
