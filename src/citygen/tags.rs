//! Optional feature stages, keyed by caller-supplied tags.
//!
//! Stages run as a fixed, explicitly ordered pipeline over the build
//! context, each guarded by a membership test against the tag set. The
//! ordering carries semantics: `dry` must come after every water producer,
//! and the late pass (backdoor, chaotic) runs only after roads, buildings,
//! and POIs exist.

use std::f64::consts::TAU;

use crate::geometry::centroid;
use crate::model::{Block, BlockKind, CityLayout, Label, Point, Poi, Prop, Tree, TreeSpecies};
use crate::rng::SeededRandom;

use super::{walls, water};

pub const CITY_WALLS: &str = "city-walls";
pub const WATERFRONT: &str = "waterfront";
pub const DOCKS: &str = "docks";
pub const CENTRAL_PLAZA: &str = "central-plaza";
pub const CITADEL: &str = "citadel";
pub const FORESTS: &str = "forests";
pub const COAST: &str = "coast";
pub const LAKE: &str = "lake";
pub const DRY: &str = "dry";
pub const MULTI_LEVEL: &str = "multi-level";
pub const BACKDOOR: &str = "backdoor";
pub const CHAOTIC: &str = "chaotic";
pub const COMPACT: &str = "compact";
pub const LARGE: &str = "large";

/// One optional stage: runs when any of its trigger tags is present.
struct TagStage {
    triggers: &'static [&'static str],
    run: fn(&mut CityLayout, &mut SeededRandom),
}

/// Stages applied right after district growth, before roads and furnishing.
const EARLY_STAGES: &[TagStage] = &[
    TagStage {
        triggers: &[CITY_WALLS],
        run: walls::generate_walls,
    },
    TagStage {
        triggers: &[WATERFRONT, DOCKS],
        run: water::generate_waterfront,
    },
    TagStage {
        triggers: &[CENTRAL_PLAZA],
        run: create_central_plaza,
    },
    TagStage {
        triggers: &[CITADEL],
        run: create_citadel,
    },
    TagStage {
        triggers: &[FORESTS],
        run: plant_forest,
    },
    TagStage {
        triggers: &[COAST, LAKE],
        run: water::generate_water_body,
    },
    TagStage {
        triggers: &[DRY],
        run: drain_water,
    },
    TagStage {
        triggers: &[MULTI_LEVEL],
        run: assign_elevation,
    },
];

/// Stages applied after every other stage has run.
const LATE_STAGES: &[TagStage] = &[
    TagStage {
        triggers: &[BACKDOOR],
        run: add_secret_entrance,
    },
    TagStage {
        triggers: &[CHAOTIC],
        run: jumble_layout,
    },
];

pub fn apply_tag_stages(city: &mut CityLayout, rng: &mut SeededRandom) {
    run_stages(EARLY_STAGES, city, rng);
}

pub fn apply_late_tag_stages(city: &mut CityLayout, rng: &mut SeededRandom) {
    run_stages(LATE_STAGES, city, rng);
}

fn run_stages(stages: &[TagStage], city: &mut CityLayout, rng: &mut SeededRandom) {
    for stage in stages {
        if stage.triggers.iter().any(|t| city.has_tag(t)) {
            (stage.run)(city, rng);
        }
    }
}

/// Final override: a dry city has no water, whatever earlier stages built.
fn drain_water(city: &mut CityLayout, _rng: &mut SeededRandom) {
    city.water_areas.clear();
}

/// Fountain POI plus a plaza label at the central block.
fn create_central_plaza(city: &mut CityLayout, rng: &mut SeededRandom) {
    let center = match city.blocks.first() {
        Some(block) => centroid(&block.vertices),
        None => return,
    };
    let plaza_radius = (25 + rng.random_int(0, 15)) as f64;

    city.pois.push(Poi {
        x: center.x,
        y: center.y,
        kind: "Fountain".to_string(),
        label: "Central Fountain".to_string(),
        icon: "fountain".to_string(),
        description: None,
        secret: false,
    });
    city.labels.push(Label {
        x: center.x,
        y: center.y + plaza_radius + 10.0,
        text: "Central Plaza".to_string(),
        size: 14,
    });
}

/// A regular hexagonal citadel block at the city center, with a keep. The
/// citadel joins the road graph but stays exempt from building placement.
pub(crate) fn create_citadel(city: &mut CityLayout, rng: &mut SeededRandom) {
    let center = city.center;
    let citadel_radius = (40 + rng.random_int(0, 20)) as f64;
    let sides = 6;

    let mut vertices = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = i as f64 * TAU / sides as f64;
        vertices.push(Point::new(
            center.x + citadel_radius * angle.cos(),
            center.y + citadel_radius * angle.sin(),
        ));
    }

    let id = city.blocks.len();
    city.blocks.push(Block {
        id,
        vertices,
        kind: BlockKind::Citadel,
        depth: 0,
        children: Vec::new(),
        parent_id: None,
        elevation: None,
    });
    city.props.push(Prop {
        x: center.x,
        y: center.y,
        kind: "keep".to_string(),
        width: 25.0,
        height: 40.0,
        rotation: 0.0,
    });
}

/// Scatter 50–150 trees in an annulus just outside the city proper.
fn plant_forest(city: &mut CityLayout, rng: &mut SeededRandom) {
    let tree_count = 50 + rng.random_int(0, 100);
    let forest_radius = city.size.radius * 1.2;

    for _ in 0..tree_count {
        let angle = rng.random_float(0.0, TAU);
        let offset = rng.random_float(forest_radius * 0.8, forest_radius);
        city.trees.push(Tree {
            x: city.center.x + offset * angle.cos(),
            y: city.center.y + offset * angle.sin(),
            size: rng.random_float(0.8, 1.5),
            species: *rng.pick(&TreeSpecies::ALL),
        });
    }
}

/// Stair props placed with elevation; 5 of them, at picked block centroids.
const STAIR_COUNT: usize = 5;

/// Give every block an elevation level and scatter connecting stairs.
fn assign_elevation(city: &mut CityLayout, rng: &mut SeededRandom) {
    for block in &mut city.blocks {
        block.elevation = Some(rng.random_int(0, 3) as u8);
    }
    for _ in 0..STAIR_COUNT {
        let center = {
            let block = rng.pick(&city.blocks);
            centroid(&block.vertices)
        };
        city.props.push(Prop {
            x: center.x,
            y: center.y,
            kind: "stairs".to_string(),
            width: 15.0,
            height: 8.0,
            rotation: rng.random_float(0.0, TAU),
        });
    }
}

/// A hidden passage somewhere along the wall, away from the gates' segment
/// midsection. No wall, no secret entrance.
fn add_secret_entrance(city: &mut CityLayout, rng: &mut SeededRandom) {
    if city.walls.is_empty() {
        return;
    }
    let segment = rng.random_int(0, city.walls.len() as i64 - 1) as usize;
    let start = city.walls[segment];
    let end = city.walls[(segment + 1) % city.walls.len()];
    let t = rng.random_float(0.2, 0.8);

    city.pois.push(Poi {
        x: start.x + t * (end.x - start.x),
        y: start.y + t * (end.y - start.y),
        kind: "Secret Entrance".to_string(),
        label: "Hidden Passage".to_string(),
        icon: "secret".to_string(),
        description: None,
        secret: true,
    });
}

/// Jitter every non-citadel block's vertices and strew extra rubble.
fn jumble_layout(city: &mut CityLayout, rng: &mut SeededRandom) {
    for block in &mut city.blocks {
        if block.kind == BlockKind::Citadel {
            continue;
        }
        for v in &mut block.vertices {
            v.x += rng.random_float(-10.0, 10.0);
            v.y += rng.random_float(-10.0, 10.0);
        }
    }

    let extra_props = 10 + rng.random_int(0, 20);
    for _ in 0..extra_props {
        let angle = rng.random_float(0.0, TAU);
        let offset = rng.random_float(30.0, city.size.radius);
        city.props.push(Prop {
            x: city.center.x + offset * angle.cos(),
            y: city.center.y + offset * angle.sin(),
            kind: "rubble".to_string(),
            width: (5 + rng.random_int(0, 10)) as f64,
            height: (5 + rng.random_int(0, 10)) as f64,
            rotation: rng.random_float(0.0, TAU),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citygen::blocks::{generate_central_block, grow_branches};
    use crate::geometry::distance;
    use crate::model::CityDims;

    fn grown_city(seed: u32, tags: &[&str]) -> (CityLayout, SeededRandom) {
        let mut city = CityLayout::new(
            Point::new(400.0, 300.0),
            CityDims {
                blocks: 8,
                radius: 250.0,
            },
            tags.iter().map(|t| t.to_string()).collect(),
        );
        let mut rng = SeededRandom::new(seed);
        generate_central_block(&mut city, &mut rng);
        grow_branches(&mut city, 0, 8, 0, &mut rng);
        (city, rng)
    }

    #[test]
    fn untagged_city_gets_no_optional_features() {
        let (mut city, mut rng) = grown_city(42, &[]);
        apply_tag_stages(&mut city, &mut rng);
        apply_late_tag_stages(&mut city, &mut rng);

        assert!(city.walls.is_empty());
        assert!(city.water_areas.is_empty());
        assert!(city.trees.is_empty());
        assert!(city.labels.is_empty());
        assert!(city.pois.is_empty());
        assert!(city.blocks.iter().all(|b| b.elevation.is_none()));
    }

    #[test]
    fn dry_runs_after_the_water_producers() {
        let (mut city, mut rng) = grown_city(1, &["lake", "waterfront", "dry"]);
        apply_tag_stages(&mut city, &mut rng);
        assert!(city.water_areas.is_empty());
        // Docks survive; only the water itself is drained.
        assert!(city.props.iter().any(|p| p.kind == "dock"));
    }

    #[test]
    fn plaza_adds_fountain_and_label() {
        let (mut city, mut rng) = grown_city(7, &["central-plaza"]);
        apply_tag_stages(&mut city, &mut rng);

        let fountain = city
            .pois
            .iter()
            .find(|p| p.kind == "Fountain")
            .expect("plaza fountain");
        assert_eq!(fountain.label, "Central Fountain");
        assert_eq!(city.labels.len(), 1);
        assert_eq!(city.labels[0].text, "Central Plaza");
        assert_eq!(city.labels[0].size, 14);
    }

    #[test]
    fn citadel_is_a_parentless_hexagon_with_a_keep() {
        let (mut city, mut rng) = grown_city(42, &["citadel"]);
        let before = city.blocks.len();
        apply_tag_stages(&mut city, &mut rng);

        let citadel = &city.blocks[before];
        assert_eq!(citadel.kind, BlockKind::Citadel);
        assert_eq!(citadel.vertices.len(), 6);
        assert!(citadel.parent_id.is_none());
        for v in &citadel.vertices {
            let r = distance(*v, city.center);
            assert!((40.0..=60.0).contains(&r));
        }
        assert!(city.props.iter().any(|p| p.kind == "keep"));
    }

    #[test]
    fn forest_plants_50_to_150_trees_in_the_outer_annulus() {
        let (mut city, mut rng) = grown_city(3, &["forests"]);
        apply_tag_stages(&mut city, &mut rng);

        assert!((50..=150).contains(&city.trees.len()));
        let outer = city.size.radius * 1.2;
        for tree in &city.trees {
            let d = distance(Point::new(tree.x, tree.y), city.center);
            assert!(d >= outer * 0.8 - 1e-9);
            assert!(d <= outer + 1e-9);
            assert!((0.8..1.5).contains(&tree.size));
        }
    }

    #[test]
    fn multi_level_elevates_every_block_and_adds_stairs() {
        let (mut city, mut rng) = grown_city(11, &["multi-level"]);
        apply_tag_stages(&mut city, &mut rng);

        for block in &city.blocks {
            let elevation = block.elevation.expect("every block gets an elevation");
            assert!(elevation <= 3);
        }
        let stairs = city.props.iter().filter(|p| p.kind == "stairs").count();
        assert_eq!(stairs, STAIR_COUNT);
    }

    #[test]
    fn backdoor_without_walls_is_a_no_op() {
        let (mut city, mut rng) = grown_city(5, &["backdoor"]);
        apply_tag_stages(&mut city, &mut rng);
        apply_late_tag_stages(&mut city, &mut rng);
        assert!(city.pois.iter().all(|p| !p.secret));
    }

    #[test]
    fn backdoor_with_walls_adds_one_secret_poi() {
        let (mut city, mut rng) = grown_city(5, &["city-walls", "backdoor"]);
        apply_tag_stages(&mut city, &mut rng);
        apply_late_tag_stages(&mut city, &mut rng);

        let secret: Vec<_> = city.pois.iter().filter(|p| p.secret).collect();
        assert_eq!(secret.len(), 1);
        assert_eq!(secret[0].kind, "Secret Entrance");
        assert_eq!(secret[0].label, "Hidden Passage");
    }

    #[test]
    fn chaotic_jitters_blocks_but_never_the_citadel() {
        let (mut city, mut rng) = grown_city(9, &["citadel", "chaotic"]);
        apply_tag_stages(&mut city, &mut rng);
        let before = city.blocks.clone();
        apply_late_tag_stages(&mut city, &mut rng);

        for (old, new) in before.iter().zip(city.blocks.iter()) {
            if old.kind == BlockKind::Citadel {
                assert_eq!(old.vertices, new.vertices, "citadel must stay put");
            } else {
                assert_ne!(old.vertices, new.vertices, "block {} unjittered", old.id);
                for (a, b) in old.vertices.iter().zip(new.vertices.iter()) {
                    assert!((a.x - b.x).abs() <= 10.0);
                    assert!((a.y - b.y).abs() <= 10.0);
                }
            }
        }
        assert!(city.props.iter().any(|p| p.kind == "rubble"));
    }
}
