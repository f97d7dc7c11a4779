use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::model::{CityLayout, Point, Prop, WaterArea};
use crate::rng::SeededRandom;

use super::tags;

/// Samples along the waterfront arc (inclusive of both ends).
const WATERFRONT_STEPS: usize = 20;

/// Synthesize a waterfront ribbon along a randomized arc around the city
/// center, then line it with docks. The stored water area gets extra axis
/// jitter for a natural look; dock positions sample the clean arc.
pub fn generate_waterfront(city: &mut CityLayout, rng: &mut SeededRandom) {
    let center = city.center;
    let radius = city.size.radius * 0.8;
    let start_angle = rng.random_float(0.0, TAU);
    let arc_length = FRAC_PI_2 + rng.random_float(0.0, FRAC_PI_4);

    let mut arc = Vec::with_capacity(WATERFRONT_STEPS + 1);
    for i in 0..=WATERFRONT_STEPS {
        let angle = start_angle + i as f64 / WATERFRONT_STEPS as f64 * arc_length;
        let variance = rng.random_float(0.9, 1.1);
        arc.push(Point::new(
            center.x + radius * variance * angle.cos(),
            center.y + radius * variance * angle.sin(),
        ));
    }

    let ribbon: Vec<Point> = arc
        .iter()
        .map(|p| {
            Point::new(
                p.x + rng.random_float(-15.0, 15.0),
                p.y + rng.random_float(-15.0, 15.0),
            )
        })
        .collect();
    city.water_areas.push(WaterArea { points: ribbon });

    add_docks(city, &arc, rng);
}

fn add_docks(city: &mut CityLayout, waterfront: &[Point], rng: &mut SeededRandom) {
    let dock_count = rng.random_int(3, 8);
    for _ in 0..dock_count {
        let t = rng.random_float(0.1, 0.9);
        let index = (t * (waterfront.len() - 1) as f64).floor() as usize;
        let point = waterfront[index];
        city.props.push(Prop {
            x: point.x,
            y: point.y,
            kind: "dock".to_string(),
            width: (30 + rng.random_int(0, 20)) as f64,
            height: 10.0,
            rotation: rng.random_float(0.0, TAU),
        });
    }
}

/// Standalone water body: a near-circular ring around an offset center.
/// Lakes keep the closed ring; coastlines keep only the first half as an
/// open arc.
pub fn generate_water_body(city: &mut CityLayout, rng: &mut SeededRandom) {
    let is_lake = city.has_tag(tags::LAKE) || rng.next() > 0.5;
    let center = Point::new(
        city.center.x + rng.random_float(-100.0, 100.0),
        city.center.y + rng.random_float(-100.0, 100.0),
    );
    let radius = (80 + rng.random_int(0, 120)) as f64;
    let steps = if is_lake { 24 } else { 30 };

    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let angle = i as f64 * TAU / steps as f64;
        let variance = 0.9 + rng.random_float(0.0, 0.2);
        points.push(Point::new(
            center.x + radius * variance * angle.cos(),
            center.y + radius * variance * angle.sin(),
        ));
    }

    if !is_lake {
        points.truncate(points.len() / 2);
    }
    city.water_areas.push(WaterArea { points });
}
