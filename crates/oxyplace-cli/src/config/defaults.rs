use oxyplace::core::utils::geometry::Axis;
use oxyplace::engine::config as core_config;

pub struct DefaultsConfig {
    pub distance: f64,
    pub chain_id: char,
    pub residue_number: i32,
    pub offset_axis: Axis,
    pub spread_axis: Axis,
    pub keep_marker: String,
    pub remove_connect: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            distance: core_config::DEFAULT_DISTANCE,
            chain_id: core_config::DEFAULT_CHAIN_ID,
            residue_number: core_config::DEFAULT_RESIDUE_NUMBER,
            offset_axis: Axis::X,
            spread_axis: Axis::Y,
            keep_marker: core_config::DEFAULT_KEEP_MARKER.to_string(),
            remove_connect: false,
        }
    }
}
