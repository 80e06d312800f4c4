use crate::cli::FilterArgs;
use crate::config::build_filter_config;
use crate::error::{CliError, Result};
use oxyplace::core::io::{pdb::PdbFile, traits::RecordFile};
use oxyplace::workflows;
use tracing::info;

pub fn run(args: FilterArgs) -> Result<()> {
    let config = build_filter_config(&args)?;

    info!("Loading input structure from {:?}", &config.input_path);
    let records =
        PdbFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;

    let filtered = workflows::filter::run(&records, &config.core_config);

    PdbFile::write_to_path(&filtered.records, &config.output_path).map_err(|e| {
        CliError::FileWriting {
            path: config.output_path.clone(),
            source: e.into(),
        }
    })?;
    println!(
        "Filtered PDB saved as {} ({} HETATM and {} CONECT record(s) removed)",
        config.output_path.display(),
        filtered.summary.removed_hetero,
        filtered.summary.removed_connectivity
    );

    Ok(())
}
