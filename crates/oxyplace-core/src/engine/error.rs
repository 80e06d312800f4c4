use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No ATOM records with valid coordinates found to compute the center of mass")]
    NoPrimaryAtoms,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
