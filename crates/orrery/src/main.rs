//! Orrery CLI - procedural star and solar system generator.
//!
//! Generates a star, places planets around it and prints the result as a
//! text report or JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use thiserror::Error;

use planetary::{AtmosphereSubtype, PlanetType, PlanetaryError};
use star_system::{GeneratorConfig, SystemError, SystemMetadata, generate_system};
use stellar::generate_star;

mod logging;
mod render;


/// Procedural star and solar system generator.
#[derive(Parser)]
#[command(name = "orrery")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a star and its planets.
    System {
        /// Numeric seed for reproducible generation.
        #[arg(short, long, conflicts_with_all = ["name", "uuid"])]
        seed: Option<u64>,

        /// Proper name; the system is seeded from the name.
        #[arg(short, long, conflicts_with = "uuid")]
        name: Option<String>,

        /// Regenerate the system with this id.
        #[arg(long)]
        uuid: Option<String>,

        /// JSON generator config file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate a single star.
    Star {
        /// Numeric seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the gas table for an atmosphere sub-type (e.g. "nitrogen-I").
    Composition {
        subtype: String,
    },

    /// Show the bulk element table for a planet type (e.g. "gas-giant").
    Elements {
        planet_type: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Logging(String),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    Planetary(#[from] PlanetaryError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let _logger = logging::init_logging(&cli.log_level).map_err(CliError::Logging)?;

    match cli.command {
        Commands::System {
            seed,
            name,
            uuid,
            config,
            format,
        } => {
            let metadata = match (seed, name, uuid) {
                (_, _, Some(id)) => SystemMetadata::parse_id(&id)?,
                (_, Some(name), None) => SystemMetadata::from_seed_name(&name).with_name(name),
                (Some(seed), None, None) => SystemMetadata::from_seed(seed),
                (None, None, None) => SystemMetadata::new_random(),
            };
            let config = match config {
                Some(path) => GeneratorConfig::from_path(path)?,
                None => GeneratorConfig::default(),
            };

            info!("generating system {} (seed {})", metadata.display_name(), metadata.seed());
            let system = generate_system(metadata, &config)?;

            match format {
                OutputFormat::Text => println!("{}", render::render_system(&system)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&system)?),
            }
        }
        Commands::Star { seed, format } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!("generating star (seed {})", seed);

            let mut rng = ChaChaRng::seed_from_u64(seed);
            let star = generate_star(&mut rng);

            match format {
                OutputFormat::Text => println!("{}", render::render_star(&star)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&star)?),
            }
        }
        Commands::Composition { subtype } => {
            let subtype: AtmosphereSubtype = subtype.parse()?;
            println!("{}", render::render_composition(subtype));
        }
        Commands::Elements { planet_type } => {
            let planet_type: PlanetType = planet_type.parse()?;
            println!("{}", render::render_elements(planet_type));
        }
    }

    Ok(())
}
