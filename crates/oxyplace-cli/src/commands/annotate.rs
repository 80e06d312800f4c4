use crate::cli::AnnotateArgs;
use crate::config::build_annotate_config;
use crate::error::{CliError, Result};
use oxyplace::core::io::{pdb::PdbFile, traits::RecordFile};
use oxyplace::workflows;
use tracing::info;

pub fn run(args: AnnotateArgs) -> Result<()> {
    let config = build_annotate_config(&args)?;

    info!("Loading input structure from {:?}", &config.input_path);
    let records =
        PdbFile::read_from_path(&config.input_path).map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })?;

    info!("Invoking the annotation workflow...");
    let annotation = workflows::annotate::run(&records, &config.core_config)?;

    let center = annotation.summary.center;
    println!(
        "Center of mass (computed from ATOM records): ({:.3}, {:.3}, {:.3})",
        center.x, center.y, center.z
    );
    match annotation.summary.max_serial {
        Some(serial) => println!("Max atom serial number: {}", serial),
        None => println!("Max atom serial number: none found"),
    }

    info!(
        "Writing {} records to {:?}",
        annotation.records.len(),
        &config.output_path
    );
    PdbFile::write_to_path(&annotation.records, &config.output_path).map_err(|e| {
        CliError::FileWriting {
            path: config.output_path.clone(),
            source: e.into(),
        }
    })?;
    println!(
        "New PDB with O2 inserted saved as {}",
        config.output_path.display()
    );

    Ok(())
}
