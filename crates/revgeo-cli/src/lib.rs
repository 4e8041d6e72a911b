//! revgeo-cli
//! ==========
//!
//! HTTP service and command-line front end for [`revgeo_core`].
//!
//! The binary (`revgeo`) is the primary deliverable. The library target
//! exposes the router and its state so the HTTP surface can be exercised
//! in-process by tests.
//!
//! Endpoints
//! ---------
//! - `GET /reverse-geocode?lat=<deg>&lon=<deg>` → `{"city": .., "country": ..}`
//! - `GET /` → same as `/reverse-geocode`
//! - `GET /metrics` → Prometheus text format
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod http;
pub mod metrics;

use revgeo_core::{CityLocator, DataSources};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the locator: a single explicit path, or the fallback chain.
pub fn build_locator(input: Option<PathBuf>) -> CityLocator {
    match input {
        Some(path) => CityLocator::new(DataSources::single(path)),
        None => CityLocator::from_env(),
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
