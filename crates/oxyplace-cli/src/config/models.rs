use oxyplace::engine::config as core_config;
use std::path::PathBuf;

pub struct AnnotateAppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: core_config::AnnotationConfig,
}

pub struct FilterAppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: core_config::FilterConfig,
}
