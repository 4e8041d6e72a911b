//! revgeo — reverse geocoding service
//!
//! Finds the populated place nearest to a latitude/longitude using a GeoNames
//! gazetteer (`cities500.txt`) held in memory.
//!
//! Usage examples
//! --------------
//!
//! - Run the HTTP service on port 8080
//!   $ revgeo serve
//!   $ curl 'localhost:8080/reverse-geocode?lat=51.5&lon=-0.1'
//!
//! - Use a specific dataset and load it before serving
//!   $ revgeo --input /srv/geonames/cities500.txt.gz serve --preload
//!
//! - One-off lookup
//!   $ revgeo nearest 48.85 2.35
//!
//! Data source
//! -----------
//!
//! Without `--input`, the dataset is searched at `$CITIES_DATA_PATH`,
//! `/data/cities500.txt`, `data/cities500.txt`, `./data/cities500.txt` and
//! `../data/cities500.txt`, in that order.
use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use revgeo_core::NearestSearch;
use revgeo_cli::args::{CliArgs, Commands};
use revgeo_cli::http::{router, AppState};
use revgeo_cli::{build_locator, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let locator = build_locator(args.input);

    match args.command {
        Commands::Serve {
            port,
            bind,
            preload,
            cache,
        } => {
            tracing::debug!(candidates = ?locator.sources().candidates(), "cities dataset sources");
            if preload {
                let places = locator
                    .dataset()
                    .context("preloading cities dataset")?
                    .len();
                tracing::info!(places, "cities dataset preloaded");
            }

            let state = AppState::new(locator, cache).context("registering metrics")?;
            let app = router(state);
            let addr = SocketAddr::new(bind, port);
            tracing::info!(cache_minutes = cache, "client cache duration");
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {addr}"))?;
            tracing::info!(address = %addr, "revgeo listening");

            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        }

        Commands::Nearest { lat, lon, json } => {
            let hit = locator.find_nearest(lat, lon)?;
            if json {
                let body = serde_json::json!({
                    "city": hit.name,
                    "country": hit.country,
                    "distance_km": hit.distance_km,
                });
                println!("{body}");
            } else {
                println!("{} ({}) — {:.1} km", hit.name, hit.country, hit.distance_km);
            }
        }

        Commands::Stats => {
            let db = locator.dataset()?;
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Places: {}", stats.places);
            println!("  Countries: {}", stats.countries);
            if let Some(err) = locator.load_error() {
                println!("  Warning: {err}");
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
