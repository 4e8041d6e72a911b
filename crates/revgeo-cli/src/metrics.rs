//! Prometheus metrics for the HTTP service.
//!
//! Each [`Metrics`] owns its own [`Registry`], so several routers (as in
//! tests) never share counters.

use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use revgeo_core::CityLocator;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    lookup_errors: IntCounter,
    dataset_loaded: IntGauge,
    dataset_places: IntGauge,
    dataset_countries: IntGauge,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                "revgeo_http_requests_total",
                "HTTP requests by route and status.",
            ),
            &["route", "status"],
        )?;
        let lookup_errors = IntCounter::new(
            "revgeo_lookup_errors_total",
            "Lookups that returned an error.",
        )?;
        let dataset_loaded = IntGauge::new(
            "revgeo_dataset_loaded",
            "Whether the dataset load has completed.",
        )?;
        let dataset_places = IntGauge::new("revgeo_dataset_places", "Places held in memory.")?;
        let dataset_countries = IntGauge::new(
            "revgeo_dataset_countries",
            "Distinct country codes held in memory.",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(lookup_errors.clone()))?;
        registry.register(Box::new(dataset_loaded.clone()))?;
        registry.register(Box::new(dataset_places.clone()))?;
        registry.register(Box::new(dataset_countries.clone()))?;

        Ok(Self {
            registry,
            requests,
            lookup_errors,
            dataset_loaded,
            dataset_places,
            dataset_countries,
        })
    }

    pub fn record_request(&self, route: &str, status: u16) {
        let status = status.to_string();
        self.requests
            .with_label_values(&[route, status.as_str()])
            .inc();
    }

    pub fn record_lookup_error(&self) {
        self.lookup_errors.inc();
    }

    pub fn requests(&self, route: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.requests
            .get_metric_with_label_values(&[route, status.as_str()])
            .map(|c| c.get())
            .unwrap_or(0)
    }

    pub fn lookup_errors(&self) -> u64 {
        self.lookup_errors.get()
    }

    /// Refreshes the dataset gauges and encodes the registry in the
    /// Prometheus text format. Never triggers a dataset load.
    pub fn render(&self, locator: &CityLocator) -> prometheus::Result<String> {
        let stats = locator.loaded_stats().unwrap_or_default();
        self.dataset_loaded.set(i64::from(locator.is_initialized()));
        self.dataset_places.set(saturating_i64(stats.places));
        self.dataset_countries.set(saturating_i64(stats.countries));

        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
