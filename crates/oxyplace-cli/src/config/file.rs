use crate::error::{CliError, Result};
use oxyplace::core::utils::geometry::Axis;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub placement: Option<FilePlacementConfig>,
    pub filter: Option<FileFilterConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilePlacementConfig {
    pub distance: Option<f64>,
    pub chain_id: Option<char>,
    pub residue_number: Option<i32>,
    pub offset_axis: Option<Axis>,
    pub spread_axis: Option<Axis>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileFilterConfig {
    pub keep_marker: Option<String>,
    pub remove_connect: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let parse_error = |source: anyhow::Error| CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        };
        let content = std::fs::read_to_string(path).map_err(|e| parse_error(e.into()))?;
        toml::from_str(&content).map_err(|e| parse_error(e.into()))
    }
}
