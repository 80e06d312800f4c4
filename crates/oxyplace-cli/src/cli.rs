use clap::{Args, Parser, Subcommand};
use oxyplace::core::utils::geometry::Axis;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "oxyplace - place a synthetic O2 molecule next to a PDB structure and filter hetero-atom records.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert an O2 molecule (two HETATM records) at a distance from the center of mass of the ATOM records.
    Annotate(AnnotateArgs),
    /// Remove HETATM records lacking a marker (default: HEM) and optionally all CONECT records.
    Filter(FilterArgs),
}

/// Arguments for the `annotate` subcommand.
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the output PDB file with O2 inserted.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Distance (in Angstroms) from the center of mass to the O2 midpoint [default: 50.0]
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Chain identifier of the inserted O2 residue [default: L]
    #[arg(long, value_name = "CHAR")]
    pub chain_id: Option<char>,

    /// Residue sequence number of the inserted O2 residue [default: 999]
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub residue_number: Option<i32>,

    /// Axis along which the O2 midpoint is displaced from the center of mass [default: x]
    #[arg(long, value_name = "AXIS")]
    pub offset_axis: Option<Axis>,

    /// Axis along which the two oxygen atoms are spread around the midpoint [default: y]
    #[arg(long, value_name = "AXIS")]
    pub spread_axis: Option<Axis>,
}

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the filtered output PDB file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `filter.remove-connect` from the config file.
    #[command(flatten)]
    pub connectivity: ConnectivityOverride,

    /// Keep only HETATM records containing this substring [default: HEM]
    #[arg(long, value_name = "STRING")]
    pub keep_marker: Option<String>,
}

/// A group to handle mutually exclusive flags for CONECT record removal.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct ConnectivityOverride {
    /// Remove all CONECT records.
    #[arg(long, alias = "remove_connect")]
    pub remove_connect: bool,
    /// Keep CONECT records even if the config file asks to remove them.
    #[arg(long)]
    pub keep_connect: bool,
}
