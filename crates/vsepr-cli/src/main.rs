mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, info};
use vsepr::core::models::shape::ShapeResult;
use vsepr::core::tables::layout::ligand_directions;
use vsepr::engine::infer_shape;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("vsepr v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let total = cli.formulas.len();
    let mut failed = 0;
    let mut first_error = None;
    for formula in &cli.formulas {
        match infer_shape(formula) {
            Ok(result) => print_result(formula, &result, &cli)?,
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", formula, e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        // A single failing formula surfaces its own error directly.
        Some(e) if total == 1 => Err(CliError::Shape(e)),
        Some(_) => Err(CliError::PartialFailure { failed, total }),
        None => Ok(()),
    }
}

fn print_result(formula: &str, result: &ShapeResult, cli: &Cli) -> Result<()> {
    let directions = ligand_directions(result.geometry);

    if cli.json {
        let mut value = serde_json::to_value(result)?;
        value["formula"] = serde_json::Value::String(formula.to_string());
        value["geometry_name"] = serde_json::Value::String(result.geometry.to_string());
        if cli.layout {
            let layout: Vec<[f64; 3]> = directions.iter().map(|d| [d.x, d.y, d.z]).collect();
            value["layout"] = serde_json::to_value(layout)?;
        }
        println!("{}", value);
        return Ok(());
    }

    println!(
        "{}: {} (center {}, {} lone pair{})",
        formula,
        result.geometry,
        result.center_atom,
        result.lone_pairs,
        if result.lone_pairs == 1 { "" } else { "s" }
    );
    if cli.layout {
        for direction in directions {
            println!(
                "  ligand ({:>6.3}, {:>6.3}, {:>6.3})",
                direction.x, direction.y, direction.z
            );
        }
    }
    Ok(())
}
