use crate::geometry::{centroid, convex_hull};
use crate::model::{CityLayout, Point, Poi};
use crate::rng::SeededRandom;

/// Outward scale factor from the hull centroid, so the wall clears every
/// block vertex.
const WALL_EXPANSION: f64 = 1.15;

/// Derive the city wall from the convex hull of all block vertices, then
/// place the gates.
pub fn generate_walls(city: &mut CityLayout, rng: &mut SeededRandom) {
    let all_points: Vec<Point> = city
        .blocks
        .iter()
        .flat_map(|b| b.vertices.iter().copied())
        .collect();
    let hull = convex_hull(&all_points);
    let center = centroid(&hull);

    city.walls = hull
        .iter()
        .map(|p| {
            Point::new(
                center.x + (p.x - center.x) * WALL_EXPANSION,
                center.y + (p.y - center.y) * WALL_EXPANSION,
            )
        })
        .collect();

    add_gates(city, rng);
}

/// Place 2–4 gates at random interpolation points on random wall segments.
/// The first gate is the main one; gates are emitted as POIs.
fn add_gates(city: &mut CityLayout, rng: &mut SeededRandom) {
    if city.walls.is_empty() {
        return;
    }

    let gate_count = rng.random_int(2, 4);
    for i in 0..gate_count {
        let segment = rng.random_int(0, city.walls.len() as i64 - 1) as usize;
        let start = city.walls[segment];
        let end = city.walls[(segment + 1) % city.walls.len()];
        let t = rng.random_float(0.3, 0.7);

        let label = if i == 0 { "Main Gate" } else { "Secondary Gate" };
        city.pois.push(Poi {
            x: start.x + t * (end.x - start.x),
            y: start.y + t * (end.y - start.y),
            kind: "Gate".to_string(),
            label: label.to_string(),
            icon: "gate".to_string(),
            description: None,
            secret: false,
        });
    }
}
