mod tracing;

use crate::tracing::setup_tracing;
use anyhow::{bail, Result};
use caudal_core::{
    probable_flow, size_drainage, size_potable_water, DrainageSizingError, PotableSizingError,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log the intermediate sizing steps.
    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probable flow rate from Hunter fixture units.
    Hunter {
        /// Fixture-unit count.
        units: f64,
        /// Emit the result record as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Minimum commercial pipe for pressurized potable water.
    Potable {
        /// Design flow [l/s].
        flow: f64,
        /// Maximum permitted velocity [m/s].
        #[arg(short, long, default_value_t = 2.0)]
        velocity: f64,
        /// Emit the result record as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Minimum commercial pipe for gravity sanitary drainage.
    Drainage {
        /// Design flow [l/s].
        flow: f64,
        /// Slope [%].
        #[arg(short, long, default_value_t = 2.0)]
        slope: f64,
        /// Manning roughness coefficient.
        #[arg(short = 'n', long, default_value_t = 0.009)]
        manning_n: f64,
        /// Target fill ratio (tirante) [% of diameter].
        #[arg(short, long, default_value_t = 75.0)]
        fill_ratio: f64,
        /// Emit the result record as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.debug)?;

    match cli.command {
        Commands::Hunter { units, json } => hunter(units, json),
        Commands::Potable { flow, velocity, json } => potable(flow, velocity, json),
        Commands::Drainage {
            flow,
            slope,
            manning_n,
            fill_ratio,
            json,
        } => drainage(flow, slope, manning_n, fill_ratio, json),
    }
}

fn hunter(units: f64, json: bool) -> Result<()> {
    if !units.is_finite() || units <= 0.0 {
        bail!("fixture units must be a positive number");
    }

    let flow = probable_flow(units)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&flow)?);
    } else {
        println!("Probable demand for {units} fixture units");
        println!("  Tank-fed system:     {:.3} l/s", flow.tank_fed_lps);
        println!("  Flush-valve system:  {:.3} l/s", flow.flush_valve_lps);
    }

    Ok(())
}

fn potable(flow: f64, velocity: f64, json: bool) -> Result<()> {
    if !flow.is_finite() || !velocity.is_finite() || flow <= 0.0 || velocity <= 0.0 {
        bail!("design flow and maximum velocity must be positive numbers");
    }

    match size_potable_water(flow, velocity) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Theoretical diameter:  {:.2} mm", result.theoretical_diameter_mm);
                println!(
                    "Commercial pipe:       {} ({:.0} mm nominal, {:.1} mm internal)",
                    result.pipe.nominal, result.pipe.nominal_mm, result.pipe.id_mm
                );
            }
        }
        Err(PotableSizingError::NoSuitablePipe { required_mm }) => {
            println!(
                "No commercial pipe is large enough ({required_mm:.2} mm required). \
                 Consider a higher permitted velocity."
            );
        }
        Err(err) => bail!(err),
    }

    Ok(())
}

fn drainage(flow: f64, slope: f64, manning_n: f64, fill_ratio: f64, json: bool) -> Result<()> {
    let inputs = [flow, slope, manning_n, fill_ratio];
    if inputs.iter().any(|v| !v.is_finite() || *v <= 0.0) || fill_ratio >= 100.0 {
        bail!("flow, slope and Manning coefficient must be positive, and the fill ratio between 0 and 100 %");
    }

    match size_drainage(flow, slope, manning_n, fill_ratio) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Recommended diameter:  {:.0} mm", result.recommended_diameter_mm);
                println!("Flow velocity:         {:.3} m/s", result.flow_velocity);
                println!("Pipe capacity:         {:.2} l/s", result.pipe_capacity_lps);
                println!("Water height:          {:.2} mm", result.water_height_mm);
            }
        }
        Err(DrainageSizingError::NoSuitablePipe { required_capacity_lps }) => {
            println!(
                "No commercial pipe carries {required_capacity_lps:.2} l/s under these conditions. \
                 Consider increasing the slope or revising the inputs."
            );
        }
        Err(err) => bail!(err),
    }

    Ok(())
}
