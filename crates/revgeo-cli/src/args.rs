use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for revgeo
#[derive(Debug, Parser)]
#[command(
    name = "revgeo",
    version,
    about = "Reverse geocoding: find the populated place nearest to a coordinate"
)]
pub struct CliArgs {
    /// Path to the GeoNames gazetteer (cities500.txt or .txt.gz).
    /// Without it: $CITIES_DATA_PATH, /data/cities500.txt, data/cities500.txt,
    /// ./data/cities500.txt, ../data/cities500.txt
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Enable verbose logging (RUST_LOG still takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// HTTP listening port
        #[arg(short = 'p', long = "port", default_value_t = 8080)]
        port: u16,

        /// Address to bind
        #[arg(long = "bind", default_value = "0.0.0.0")]
        bind: IpAddr,

        /// Load the dataset before accepting requests
        #[arg(long = "preload")]
        preload: bool,

        /// Cache duration minutes sent to clients (0 disables caching)
        #[arg(short = 'c', long = "cache", default_value_t = crate::http::DEFAULT_CACHE_MINUTES)]
        cache: u64,
    },

    /// Print the place nearest to a coordinate
    #[command(allow_negative_numbers = true)]
    Nearest {
        /// Latitude in decimal degrees
        lat: f64,

        /// Longitude in decimal degrees
        lon: f64,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show a summary of the loaded dataset
    Stats,
}
