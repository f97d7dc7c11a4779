pub mod block;
pub mod building;
pub mod city;
pub mod label;
pub mod point;
pub mod poi;
pub mod prop;
pub mod road;
pub mod tree;
pub mod water;

pub use block::{Block, BlockKind};
pub use building::{Building, BuildingKind};
pub use city::{CityData, CityDims, CityLayout, CityMeta, CityStats};
pub use label::Label;
pub use point::Point;
pub use poi::Poi;
pub use prop::Prop;
pub use road::{Road, RoadKind};
pub use tree::{Tree, TreeSpecies};
pub use water::WaterArea;
