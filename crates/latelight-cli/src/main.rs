//! latelight command-line interface.
//!
//! Run light-curve jobs from TOML configuration files:
//! ```sh
//! latelight run job.toml
//! latelight validate job.toml
//! latelight isotopes
//! latelight models
//! latelight ratios
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use latelight_core::Isotope;
use latelight_yields::fink_2014;

#[derive(Parser)]
#[command(name = "latelight")]
#[command(about = "latelight: Late-time Type Ia supernova light curves from radioactive decay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a light-curve job from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without writing any output.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display the isotope constant table.
    Isotopes,
    /// List the built-in yield models.
    Models,
    /// Print decay-chain mass ratios of the Fink et al. (2014) deflagration models.
    Ratios,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("latelight Decay Light Curves");
            println!("============================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let result = runner::run_job(&job)?;

            // Determine output directory
            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            // CSV tables (default on)
            if job.output.save_csv {
                if !result.curves.is_empty() {
                    runner::write_curves_csv(&result, &out_dir.join("curves.csv"), &job.output)?;
                }
                if !result.envelopes.is_empty() {
                    runner::write_envelopes_csv(&result, &out_dir.join("envelopes.csv"), &job.output)?;
                }
                if !result.observations.is_empty() {
                    runner::write_observations_csv(
                        &result,
                        &out_dir.join("observations.csv"),
                        &job.output,
                    )?;
                }
            }

            // JSON report (optional)
            if job.output.save_json {
                runner::write_json(&result, &out_dir.join("results.json"))?;
            }

            if result.skipped.is_empty() {
                println!("Run complete.");
            } else {
                println!("Run complete; skipped: {}", result.skipped.join(", "));
            }
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let result = runner::run_job(&job)?;
            if !result.skipped.is_empty() {
                anyhow::bail!("Invalid entries: {}", result.skipped.join(", "));
            }
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Isotopes => {
            println!("Supported isotopes:");
            println!();
            println!(
                "  {:<6} {:>11} {:>10} {:>8} {:>8} {:>8} {:>8} {:>9}",
                "", "λ (1/d)", "t½ (d)", "Auger", "IC", "e+", "X-ray", "q (keV)"
            );
            for iso in Isotope::ALL {
                let ch = iso.channels();
                println!(
                    "  {:<6} {:>11.4e} {:>10.1} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>9.3}",
                    iso.symbol(),
                    iso.decay_constant(),
                    iso.half_life_days(),
                    ch.auger,
                    ch.internal_conversion,
                    ch.positron,
                    ch.x_ray,
                    iso.energy_per_decay()
                );
            }
            Ok(())
        }
        Commands::Models => {
            println!("Available yield models:");
            println!();
            for entry in latelight_yields::available() {
                println!("  {:<22} {}", entry.key, entry.model.reference());
            }
            Ok(())
        }
        Commands::Ratios => {
            println!("Fink et al. (2014) failed-detonation yields:");
            println!();
            println!(
                "  {:<10} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
                "model", "M_ej", "X56", "X55", "X57", "X55/X56", "X55/X57"
            );
            for m in fink_2014::MODELS.iter() {
                println!(
                    "  {:<10} {:>8.3} {:>10.3e} {:>10.3e} {:>10.3e} {:>10.4} {:>10.4}",
                    m.label,
                    m.ejecta_mass,
                    m.chain_56(),
                    m.chain_55(),
                    m.chain_57(),
                    m.ratio_55_to_56(),
                    m.ratio_55_to_57()
                );
            }
            Ok(())
        }
    }
}
