// crates/revgeo-cli/src/http.rs
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::{ConnectInfo, MatchedPath, Query, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    BoxError, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;

use crate::metrics::Metrics;
use revgeo_core::CityLocator;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Default lifetime clients may cache a lookup for.
pub const DEFAULT_CACHE_MINUTES: u64 = 60;

#[derive(Clone)]
pub struct AppState {
    pub locator: Arc<CityLocator>,
    pub metrics: Arc<Metrics>,
    /// `Cache-Control` value sent with successful lookups.
    pub cache_control: HeaderValue,
}

impl AppState {
    pub fn new(locator: CityLocator, cache_minutes: u64) -> prometheus::Result<Self> {
        Ok(Self {
            locator: Arc::new(locator),
            metrics: Arc::new(Metrics::new()?),
            cache_control: cache_control(cache_minutes),
        })
    }
}

/// `public, max-age=<secs>`, or `no-store` when caching is disabled.
pub fn cache_control(minutes: u64) -> HeaderValue {
    if minutes == 0 {
        return HeaderValue::from_static("no-store");
    }
    let secs = minutes.saturating_mul(60);
    HeaderValue::from_str(&format!("public, max-age={secs}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

pub fn router(state: AppState) -> Router {
    let geocode = Router::<AppState>::new()
        .route("/", get(reverse_geocode))
        .route("/reverse-geocode", get(reverse_geocode))
        .route_layer(middleware::from_fn_with_state(state.clone(), log_requests));

    geocode
        .route("/metrics", get(prometheus_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(REQUEST_TIMEOUT),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct CoordQuery {
    lat: Option<String>,
    lon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ReverseGeocodeResponse {
    pub city: String,
    pub country: String,
}

/// `GET /reverse-geocode?lat=..&lon=..`
pub async fn reverse_geocode(
    State(st): State<AppState>,
    Query(q): Query<CoordQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (lat, lon) = parse_coords(&q)?;

    let locator = Arc::clone(&st.locator);
    // The first lookup may read the whole dataset from disk.
    let found = tokio::task::spawn_blocking(move || locator.find_nearest(lat, lon))
        .await
        .map_err(internal)?;

    match found {
        Ok(hit) => Ok((
            [(header::CACHE_CONTROL, st.cache_control.clone())],
            Json(ReverseGeocodeResponse {
                city: hit.name,
                country: hit.country,
            }),
        )),
        Err(err) => {
            st.metrics.record_lookup_error();
            tracing::warn!(lat, lon, error = %err, "reverse geocode failed");
            Err(internal(err))
        }
    }
}

/// `GET /metrics`
pub async fn prometheus_metrics(
    State(st): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let body = st.metrics.render(&st.locator).map_err(internal)?;
    Ok(([(header::CONTENT_TYPE, st.metrics.content_type())], body))
}

fn parse_coords(q: &CoordQuery) -> Result<(f64, f64), (StatusCode, String)> {
    let (lat, lon) = match (q.lat.as_deref(), q.lon.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => return Err(bad_request("lat and lon are required")),
    };
    let lat = parse_degrees(lat).ok_or_else(|| bad_request("invalid lat"))?;
    let lon = parse_degrees(lon).ok_or_else(|| bad_request("invalid lon"))?;
    Ok((lat, lon))
}

fn parse_degrees(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Logs every request, then counts it by matched route and status.
async fn log_requests(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    let content_length = header_str(&req, header::CONTENT_LENGTH).unwrap_or("0");
    let host = header_str(&req, header::HOST).unwrap_or("-");
    tracing::info!(
        remote = %remote,
        method = %req.method(),
        uri = %req.uri(),
        content_length,
        host,
        version = ?req.version(),
        "request"
    );

    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let resp = next.run(req).await;
    st.metrics.record_request(&route, resp.status().as_u16());
    resp
}

fn header_str(req: &Request, name: header::HeaderName) -> Option<&str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

async fn handle_timeout(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "request timed out".to_string())
    } else {
        internal(err)
    }
}

fn bad_request(msg: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.to_string())
}

fn internal<E: ToString>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(lat: Option<&str>, lon: Option<&str>) -> CoordQuery {
        CoordQuery {
            lat: lat.map(str::to_string),
            lon: lon.map(str::to_string),
        }
    }

    #[test]
    fn cache_control_values() {
        assert_eq!(cache_control(60), "public, max-age=3600");
        assert_eq!(cache_control(1), "public, max-age=60");
        assert_eq!(cache_control(0), "no-store");
    }

    #[test]
    fn parses_valid_coordinates() {
        assert_eq!(parse_coords(&q(Some("51.5"), Some("-0.1"))), Ok((51.5, -0.1)));
        assert_eq!(parse_coords(&q(Some("1e1"), Some("20"))), Ok((10.0, 20.0)));
    }

    #[test]
    fn missing_or_empty_is_required() {
        for query in [
            q(None, Some("1")),
            q(Some("1"), None),
            q(None, None),
            q(Some(""), Some("1")),
        ] {
            let err = parse_coords(&query).unwrap_err();
            assert_eq!(err, (StatusCode::BAD_REQUEST, "lat and lon are required".to_string()));
        }
    }

    #[test]
    fn malformed_values_name_the_parameter() {
        assert_eq!(
            parse_coords(&q(Some("abc"), Some("1"))).unwrap_err().1,
            "invalid lat"
        );
        assert_eq!(
            parse_coords(&q(Some("1"), Some("1,5"))).unwrap_err().1,
            "invalid lon"
        );
        assert_eq!(
            parse_coords(&q(Some("NaN"), Some("1"))).unwrap_err().1,
            "invalid lat"
        );
    }
}
