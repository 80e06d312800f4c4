use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AnnotateAppConfig, FilterAppConfig};
use crate::cli::{AnnotateArgs, ConnectivityOverride, FilterArgs};
use crate::error::{CliError, Result};
use oxyplace::engine::config as core_config;
use oxyplace::engine::error::EngineError;
use std::path::Path;
use tracing::debug;

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    }
}

/// Merges defaults, the optional config file, and CLI flags (highest precedence).
pub fn build_annotate_config(args: &AnnotateArgs) -> Result<AnnotateAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref())?;
    let placement = file_config.placement.take().unwrap_or_default();

    let distance = args
        .distance
        .or(placement.distance)
        .unwrap_or(defaults.distance);
    let chain_id = args
        .chain_id
        .or(placement.chain_id)
        .unwrap_or(defaults.chain_id);
    let residue_number = args
        .residue_number
        .or(placement.residue_number)
        .unwrap_or(defaults.residue_number);
    let offset_axis = args
        .offset_axis
        .or(placement.offset_axis)
        .unwrap_or(defaults.offset_axis);
    let spread_axis = args
        .spread_axis
        .or(placement.spread_axis)
        .unwrap_or(defaults.spread_axis);

    let core_config = core_config::AnnotationConfigBuilder::new()
        .distance(distance)
        .chain_id(chain_id)
        .residue_number(residue_number)
        .offset_axis(offset_axis)
        .spread_axis(spread_axis)
        .build()
        .map_err(EngineError::from)?;
    debug!("Resolved annotation config: {:?}", core_config);

    Ok(AnnotateAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

pub fn build_filter_config(args: &FilterArgs) -> Result<FilterAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(args.config.as_deref())?;
    let filter = file_config.filter.take().unwrap_or_default();

    let keep_marker = args
        .keep_marker
        .clone()
        .or(filter.keep_marker)
        .unwrap_or(defaults.keep_marker);
    if keep_marker.is_empty() {
        return Err(CliError::Config(
            "`keep-marker` cannot be empty".to_string(),
        ));
    }
    let remove_connectivity = match (
        args.connectivity.remove_connect,
        args.connectivity.keep_connect,
    ) {
        (true, false) => true,
        (false, true) => false,
        _ => filter.remove_connect.unwrap_or(defaults.remove_connect),
    };

    let core_config = core_config::FilterConfig {
        keep_marker,
        remove_connectivity,
    };
    debug!("Resolved filter config: {:?}", core_config);

    Ok(FilterAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxyplace::core::utils::geometry::Axis;
    use std::io::Write;
    use std::path::PathBuf;

    fn annotate_args(config: Option<PathBuf>) -> AnnotateArgs {
        AnnotateArgs {
            input: PathBuf::from("in.pdb"),
            output: PathBuf::from("out.pdb"),
            config,
            distance: None,
            chain_id: None,
            residue_number: None,
            offset_axis: None,
            spread_axis: None,
        }
    }

    fn filter_args(config: Option<PathBuf>) -> FilterArgs {
        FilterArgs {
            input: PathBuf::from("in.pdb"),
            output: PathBuf::from("out.pdb"),
            config,
            connectivity: ConnectivityOverride::default(),
            keep_marker: None,
        }
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn annotate_uses_defaults_without_file_or_flags() {
        let app = build_annotate_config(&annotate_args(None)).unwrap();
        let config = app.core_config;
        assert_eq!(config.distance, 50.0);
        assert_eq!(config.chain_id, 'L');
        assert_eq!(config.residue_number, 999);
        assert_eq!(config.offset_axis, Axis::X);
        assert_eq!(config.spread_axis, Axis::Y);
        assert_eq!(app.input_path, PathBuf::from("in.pdb"));
        assert_eq!(app.output_path, PathBuf::from("out.pdb"));
    }

    #[test]
    fn annotate_file_values_override_defaults_and_flags_override_file() {
        let file = write_config("[placement]\ndistance = 20.0\nchain-id = \"Q\"\nresidue-number = 5\n");
        let mut args = annotate_args(Some(file.path().to_path_buf()));
        args.distance = Some(7.5);

        let config = build_annotate_config(&args).unwrap().core_config;
        assert_eq!(config.distance, 7.5);
        assert_eq!(config.chain_id, 'Q');
        assert_eq!(config.residue_number, 5);
    }

    #[test]
    fn annotate_reports_invalid_combinations_as_engine_config_errors() {
        let mut args = annotate_args(None);
        args.offset_axis = Some(Axis::Y);
        let result = build_annotate_config(&args);
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config(
                core_config::ConfigError::CollinearAxes(Axis::Y)
            )))
        ));
    }

    #[test]
    fn annotate_rejects_non_finite_distances_from_the_config_file() {
        let file = write_config("[placement]\ndistance = nan\n");
        let result = build_annotate_config(&annotate_args(Some(file.path().to_path_buf())));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config(
                core_config::ConfigError::NonFiniteDistance
            )))
        ));
    }

    #[test]
    fn filter_flag_and_file_both_enable_conect_removal() {
        let config = build_filter_config(&filter_args(None)).unwrap().core_config;
        assert_eq!(config.keep_marker, "HEM");
        assert!(!config.remove_connectivity);

        let file = write_config("[filter]\nremove-connect = true\nkeep-marker = \"HOH\"\n");
        let config = build_filter_config(&filter_args(Some(file.path().to_path_buf())))
            .unwrap()
            .core_config;
        assert!(config.remove_connectivity);
        assert_eq!(config.keep_marker, "HOH");

        let mut args = filter_args(None);
        args.connectivity.remove_connect = true;
        args.keep_marker = Some("ZN".to_string());
        let config = build_filter_config(&args).unwrap().core_config;
        assert!(config.remove_connectivity);
        assert_eq!(config.keep_marker, "ZN");
    }

    #[test]
    fn filter_keep_connect_flag_overrides_the_config_file() {
        let file = write_config("[filter]\nremove-connect = true\n");
        let mut args = filter_args(Some(file.path().to_path_buf()));
        args.connectivity.keep_connect = true;

        let config = build_filter_config(&args).unwrap().core_config;
        assert!(!config.remove_connectivity);
    }

    #[test]
    fn filter_rejects_an_empty_marker() {
        let mut args = filter_args(None);
        args.keep_marker = Some(String::new());
        assert!(matches!(
            build_filter_config(&args),
            Err(CliError::Config(_))
        ));
    }
}
