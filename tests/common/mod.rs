use city_gen::{CityData, CityGenerator, SizeSpec};

pub fn generate(seed: u32, size: SizeSpec, tags: &[&str]) -> CityData {
    CityGenerator::new(
        Some(seed),
        size,
        tags.iter().map(|t| t.to_string()).collect(),
    )
    .generate()
}
