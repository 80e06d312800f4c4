use crate::core::utils::geometry::Axis;
use thiserror::Error;

pub const DEFAULT_DISTANCE: f64 = 50.0;
pub const DEFAULT_CHAIN_ID: char = 'L';
pub const DEFAULT_RESIDUE_NUMBER: i32 = 999;
pub const DEFAULT_KEEP_MARKER: &str = "HEM";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Offset and spread axes must differ (both are '{0}')")]
    CollinearAxes(Axis),

    #[error("Chain identifier must be a single printable ASCII character, got {0:?}")]
    InvalidChainId(char),

    #[error("Residue number {0} does not fit in the 4-column residue sequence field")]
    ResidueNumberOutOfRange(i32),

    #[error("Placement distance must be a finite number")]
    NonFiniteDistance,
}

/// Parameters for placing the synthetic O2 molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationConfig {
    /// Distance in Angstroms from the center of mass to the O2 midpoint.
    pub distance: f64,
    /// Axis along which the midpoint is displaced from the center of mass.
    pub offset_axis: Axis,
    /// Axis along which the two oxygen atoms are spread around the midpoint.
    pub spread_axis: Axis,
    pub chain_id: char,
    pub residue_number: i32,
}

#[derive(Default)]
pub struct AnnotationConfigBuilder {
    distance: Option<f64>,
    offset_axis: Option<Axis>,
    spread_axis: Option<Axis>,
    chain_id: Option<char>,
    residue_number: Option<i32>,
}

impl AnnotationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
    pub fn offset_axis(mut self, axis: Axis) -> Self {
        self.offset_axis = Some(axis);
        self
    }
    pub fn spread_axis(mut self, axis: Axis) -> Self {
        self.spread_axis = Some(axis);
        self
    }
    pub fn chain_id(mut self, chain_id: char) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
    pub fn residue_number(mut self, residue_number: i32) -> Self {
        self.residue_number = Some(residue_number);
        self
    }

    /// Validates the collected parameters. Both axes are optional and default to
    /// X (offset) and Y (spread).
    pub fn build(self) -> Result<AnnotationConfig, ConfigError> {
        let distance = self
            .distance
            .ok_or(ConfigError::MissingParameter("distance"))?;
        if !distance.is_finite() {
            return Err(ConfigError::NonFiniteDistance);
        }

        let offset_axis = self.offset_axis.unwrap_or(Axis::X);
        let spread_axis = self.spread_axis.unwrap_or(Axis::Y);
        if offset_axis == spread_axis {
            return Err(ConfigError::CollinearAxes(offset_axis));
        }

        let chain_id = self
            .chain_id
            .ok_or(ConfigError::MissingParameter("chain_id"))?;
        if !chain_id.is_ascii_graphic() {
            return Err(ConfigError::InvalidChainId(chain_id));
        }

        let residue_number = self
            .residue_number
            .ok_or(ConfigError::MissingParameter("residue_number"))?;
        if !(-999..=9999).contains(&residue_number) {
            return Err(ConfigError::ResidueNumberOutOfRange(residue_number));
        }

        Ok(AnnotationConfig {
            distance,
            offset_axis,
            spread_axis,
            chain_id,
            residue_number,
        })
    }
}

/// Parameters for the `HETATM`/`CONECT` record filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// `HETATM` records are kept only if their raw text contains this substring.
    pub keep_marker: String,
    /// Drop every `CONECT` record.
    pub remove_connectivity: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keep_marker: DEFAULT_KEEP_MARKER.to_string(),
            remove_connectivity: false,
        }
    }
}
