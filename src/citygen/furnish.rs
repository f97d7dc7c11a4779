use std::f64::consts::TAU;

use crate::geometry::{centroid, distance};
use crate::model::{Building, BuildingKind, CityLayout, Point, Poi, Prop};
use crate::rng::SeededRandom;

pub const POI_TYPES: [&str; 10] = [
    "Tavern", "Temple", "Market", "Smithy", "Stables", "Inn", "Keep", "Gatehouse", "Fountain",
    "Statue",
];

const PROP_TYPES: [&str; 6] = ["well", "statue", "fountain", "cart", "bench", "lamp"];

const NAME_ADJECTIVES: [&str; 9] = [
    "Old", "Golden", "Sleeping", "Red", "Blue", "Silver", "Royal", "Black", "White",
];

const NAME_NOUNS: [&str; 8] = [
    "Dragon", "Lion", "Swan", "Bear", "Eagle", "Rose", "Crown", "Sword",
];

/// Best-effort minimum separation between placed POIs.
const MIN_POI_SPACING: f64 = 25.0;
/// Placement attempts before a POI is dropped rather than retried forever.
const MAX_PLACEMENT_ATTEMPTS: u32 = 10;

/// Scatter 3–9 buildings around every block centroid, except inside
/// citadels. The central block gets taller buildings.
pub fn place_buildings(city: &mut CityLayout, rng: &mut SeededRandom) {
    for id in 0..city.blocks.len() {
        let (block_kind, center) = {
            let block = &city.blocks[id];
            (block.kind, centroid(&block.vertices))
        };
        if block_kind == crate::model::BlockKind::Citadel {
            continue;
        }
        let is_central = block_kind == crate::model::BlockKind::Central;

        let building_count = 3 + rng.random_int(0, 6);
        for _ in 0..building_count {
            let angle = rng.random_float(0.0, TAU);
            let offset = rng.random_float(0.0, 25.0);
            city.buildings.push(Building {
                x: center.x + offset * angle.cos(),
                y: center.y + offset * angle.sin(),
                width: (12 + rng.random_int(0, 10)) as f64,
                height: (8 + rng.random_int(0, 12)) as f64,
                rotation: rng.random_float(-0.3, 0.3),
                kind: *rng.pick(&BuildingKind::ALL),
                floors: (1 + rng.random_int(0, if is_central { 2 } else { 1 })) as u32,
            });
        }
    }
}

/// Scatter everyday street furniture around the city center, out to roughly
/// 0.7 of the city radius.
pub fn scatter_props(city: &mut CityLayout, rng: &mut SeededRandom) {
    let prop_count = 20 + rng.random_int(0, 30);
    for _ in 0..prop_count {
        let angle = rng.random_float(0.0, TAU);
        let offset = rng.random_float(50.0, city.size.radius * 0.7);
        city.props.push(Prop {
            x: city.center.x + offset * angle.cos(),
            y: city.center.y + offset * angle.sin(),
            kind: (*rng.pick(&PROP_TYPES)).to_string(),
            width: (8 + rng.random_int(0, 8)) as f64,
            height: (8 + rng.random_int(0, 8)) as f64,
            rotation: rng.random_float(0.0, TAU),
        });
    }
}

/// Place `count` named points of interest near random block centroids,
/// rejection-sampling positions until the spacing constraint holds or the
/// attempt budget runs out. A POI whose budget runs out is skipped, not
/// retried, so fewer POIs than requested can appear.
pub fn generate_pois(city: &mut CityLayout, count: i64, rng: &mut SeededRandom) {
    let mut placed: Vec<Point> = Vec::new();

    for _ in 0..count {
        let mut attempts = 0;
        let position = loop {
            let center = {
                let block = rng.pick(&city.blocks);
                centroid(&block.vertices)
            };
            let angle = rng.random_float(0.0, TAU);
            let offset = rng.random_float(10.0, 30.0);
            let candidate = Point::new(
                center.x + offset * angle.cos(),
                center.y + offset * angle.sin(),
            );
            attempts += 1;
            if !too_close(candidate, &placed) || attempts >= MAX_PLACEMENT_ATTEMPTS {
                break candidate;
            }
        };
        if attempts >= MAX_PLACEMENT_ATTEMPTS {
            continue;
        }
        placed.push(position);

        let kind = *rng.pick(&POI_TYPES);
        let adjective = *rng.pick(&NAME_ADJECTIVES);
        let noun = *rng.pick(&NAME_NOUNS);
        let label = format!("{adjective} {noun} {kind}");
        let description = describe_poi(kind, &label);
        city.pois.push(Poi {
            x: position.x,
            y: position.y,
            kind: kind.to_string(),
            label,
            icon: kind.to_lowercase(),
            description: Some(description),
            secret: false,
        });
    }
}

fn too_close(candidate: Point, placed: &[Point]) -> bool {
    placed
        .iter()
        .any(|p| distance(candidate, *p) < MIN_POI_SPACING)
}

fn describe_poi(kind: &str, name: &str) -> String {
    match kind {
        "Tavern" => format!("A bustling {name} where locals gather for ale and news"),
        "Temple" => format!("Sacred {name} dedicated to the gods, filled with worshippers"),
        "Market" => format!("Busy {name} where merchants sell goods from distant lands"),
        "Smithy" => format!("The {name} rings with the sound of hammer on anvil"),
        "Keep" => format!("Imposing {name} that watches over the city"),
        "Gate" => format!("Heavily guarded {name}, main entrance to the city"),
        _ => format!("The {name}, an important location in the city"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citygen::blocks::{generate_central_block, grow_branches};
    use crate::citygen::tags::create_citadel;
    use crate::model::{BlockKind, CityDims};

    fn grown_city(seed: u32, budget: u32, tags: &[&str]) -> (CityLayout, SeededRandom) {
        let mut city = CityLayout::new(
            Point::new(400.0, 300.0),
            CityDims {
                blocks: budget,
                radius: 250.0,
            },
            tags.iter().map(|t| t.to_string()).collect(),
        );
        let mut rng = SeededRandom::new(seed);
        generate_central_block(&mut city, &mut rng);
        grow_branches(&mut city, 0, budget, 0, &mut rng);
        (city, rng)
    }

    #[test]
    fn every_ordinary_block_gets_three_to_nine_buildings() {
        let (mut city, mut rng) = grown_city(42, 10, &[]);
        place_buildings(&mut city, &mut rng);

        let n = city.blocks.len();
        assert!(city.buildings.len() >= 3 * n);
        assert!(city.buildings.len() <= 9 * n);
    }

    #[test]
    fn citadel_blocks_get_no_buildings() {
        let (mut city, mut rng) = grown_city(42, 0, &[]);
        create_citadel(&mut city, &mut rng);
        assert_eq!(city.blocks[1].kind, BlockKind::Citadel);
        place_buildings(&mut city, &mut rng);

        // Only the central block was furnished.
        assert!((3..=9).contains(&city.buildings.len()));
        let central_center = centroid(&city.blocks[0].vertices);
        for b in &city.buildings {
            assert!(distance(Point::new(b.x, b.y), central_center) <= 25.0 + 1e-9);
        }
    }

    #[test]
    fn central_block_buildings_can_be_taller() {
        let (mut city, mut rng) = grown_city(42, 0, &[]);
        place_buildings(&mut city, &mut rng);
        for b in &city.buildings {
            assert!((1..=3).contains(&b.floors));
        }
    }

    #[test]
    fn props_stay_within_seven_tenths_of_the_radius() {
        let (mut city, mut rng) = grown_city(7, 5, &[]);
        scatter_props(&mut city, &mut rng);

        let count = city.props.len();
        assert!((20..=50).contains(&count));
        for prop in &city.props {
            let d = distance(Point::new(prop.x, prop.y), city.center);
            assert!(d >= 50.0 - 1e-9);
            assert!(d <= city.size.radius * 0.7 + 1e-9);
        }
    }

    #[test]
    fn pois_respect_the_minimum_spacing() {
        for seed in [1, 7, 42, 2024] {
            let (mut city, mut rng) = grown_city(seed, 12, &[]);
            generate_pois(&mut city, 15, &mut rng);

            for (i, a) in city.pois.iter().enumerate() {
                for b in city.pois.iter().skip(i + 1) {
                    let d = distance(Point::new(a.x, a.y), Point::new(b.x, b.y));
                    assert!(
                        d >= MIN_POI_SPACING,
                        "seed {seed}: {} and {} only {d} apart",
                        a.label,
                        b.label
                    );
                }
            }
        }
    }

    #[test]
    fn pois_never_exceed_the_requested_count() {
        let (mut city, mut rng) = grown_city(42, 12, &[]);
        generate_pois(&mut city, 8, &mut rng);
        assert!(city.pois.len() <= 8);
        assert!(!city.pois.is_empty());
    }

    #[test]
    fn placed_pois_are_fully_described() {
        let (mut city, mut rng) = grown_city(9, 10, &[]);
        generate_pois(&mut city, 10, &mut rng);
        for poi in &city.pois {
            assert!(POI_TYPES.contains(&poi.kind.as_str()));
            assert!(poi.label.ends_with(&poi.kind));
            assert_eq!(poi.icon, poi.kind.to_lowercase());
            assert!(poi.description.is_some());
            assert!(!poi.secret);
        }
    }

    #[test]
    fn descriptions_fall_back_for_unlisted_kinds() {
        let text = describe_poi("Stables", "Red Swan Stables");
        assert!(text.contains("Red Swan Stables"));
        assert!(text.contains("important location"));
    }
}
