use clap::Parser;
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
    about = "vsepr - Infer idealized molecular geometries from chemical formulas using the VSEPR model.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Chemical formulas to analyze (e.g. H2O NH3 PCl5).
    #[arg(required = true, value_name = "FORMULA")]
    pub formulas: Vec<String>,

    /// Emit one JSON object per formula instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Also print the idealized ligand direction vectors for each result.
    #[arg(long)]
    pub layout: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
