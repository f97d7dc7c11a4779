use crate::geometry::{centroid, distance};
use crate::model::{CityLayout, Point, Road, RoadKind};
use crate::rng::SeededRandom;

/// MST edges shorter than this are main roads, longer ones secondary.
const MAIN_ROAD_CUTOFF: f64 = 80.0;
/// Extra connections only join blocks closer than this.
const ALLEY_CUTOFF: f64 = 150.0;
/// Extra connections attempted, as a fraction of the block count.
const EXTRA_CONNECTION_RATIO: f64 = 0.3;

/// Connect every block centroid with a minimum spanning tree (Prim's
/// algorithm from block 0), then sprinkle in a few alleys for organic
/// connectivity.
pub fn generate_road_network(city: &mut CityLayout, rng: &mut SeededRandom) {
    let centers: Vec<Point> = city.blocks.iter().map(|b| centroid(&b.vertices)).collect();

    let mut visited: Vec<usize> = vec![0];
    let mut in_tree = vec![false; centers.len()];
    in_tree[0] = true;

    while visited.len() < centers.len() {
        let mut min_edge: Option<(usize, usize)> = None;
        let mut min_dist = f64::INFINITY;

        for &from in &visited {
            for (to, center) in centers.iter().enumerate() {
                if in_tree[to] {
                    continue;
                }
                let dist = distance(centers[from], *center);
                if dist < min_dist {
                    min_dist = dist;
                    min_edge = Some((from, to));
                }
            }
        }

        let Some((from, to)) = min_edge else { break };
        visited.push(to);
        in_tree[to] = true;

        city.roads.push(Road {
            from: centers[from],
            to: centers[to],
            width: (4 + rng.random_int(0, 3)) as u32,
            kind: if min_dist < MAIN_ROAD_CUTOFF {
                RoadKind::Main
            } else {
                RoadKind::Secondary
            },
        });
    }

    add_extra_connections(city, &centers, rng);
}

/// Random close-by block pairs become alleys. Pairs are drawn independently,
/// so self-pairs are skipped and duplicates of existing edges can occur;
/// both are harmless.
fn add_extra_connections(city: &mut CityLayout, centers: &[Point], rng: &mut SeededRandom) {
    let attempts = (centers.len() as f64 * EXTRA_CONNECTION_RATIO).floor() as usize;

    for _ in 0..attempts {
        let from = rng.random_int(0, centers.len() as i64 - 1) as usize;
        let to = rng.random_int(0, centers.len() as i64 - 1) as usize;
        if from == to {
            continue;
        }
        if distance(centers[from], centers[to]) < ALLEY_CUTOFF {
            city.roads.push(Road {
                from: centers[from],
                to: centers[to],
                width: (3 + rng.random_int(0, 2)) as u32,
                kind: RoadKind::Alley,
            });
        }
    }
}
