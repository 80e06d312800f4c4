mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_annotate_config, build_filter_config};
