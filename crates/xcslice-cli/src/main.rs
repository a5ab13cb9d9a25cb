//! xcslice CLI - Inspect prebuilt XCFramework bundles
//!
//! Commands:
//! - `xcslice inspect` - Resolve a bundle and print its metadata
//! - `xcslice check` - Decode a bundle manifest and list its slices

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod inspect;

#[derive(Parser)]
#[command(name = "xcslice")]
#[command(author, version, about = "Inspector for XCFramework bundles", long_about = None)]
struct Cli {
    /// Resolver configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a bundle and print its metadata
    Inspect {
        /// Path to the .xcframework directory
        bundle: PathBuf,

        /// Only consider slices for this platform (ios, macos, tvos, watchos, xros)
        #[arg(short, long)]
        platform: Option<String>,

        /// Only consider slices whose identifier starts with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Only consider simulator slices
        #[arg(long, conflicts_with = "device")]
        simulator: bool,

        /// Only consider device slices
        #[arg(long)]
        device: bool,

        /// Mark the bundle as optional in the output
        #[arg(long)]
        optional: bool,

        /// Print the metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a bundle manifest and list its slices
    Check {
        /// Path to the .xcframework directory
        bundle: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    config::init_logging(cli.verbose)?;
    let config = config::load(cli.config.as_deref())?;
    config::apply_log_level(&config, cli.verbose)?;

    match cli.command {
        Commands::Inspect {
            bundle,
            platform,
            prefix,
            simulator,
            device,
            optional,
            json,
        } => {
            let options = inspect::InspectOptions {
                platform,
                prefix,
                simulator: match (simulator, device) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                optional,
                json,
            };
            inspect::run(&bundle, config, &options)?;
        }
        Commands::Check { bundle } => {
            check::run(&bundle, config)?;
        }
    }

    Ok(())
}
