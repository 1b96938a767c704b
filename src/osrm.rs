//! OSRM HTTP adapter for per-segment road geometry.

use serde::Deserialize;

use crate::model::Coordinate;
use crate::polyline::Polyline;
use crate::traits::{RoutingError, SegmentRouter};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl SegmentRouter for OsrmClient {
    fn route_between(&self, from: Coordinate, to: Coordinate) -> Result<Polyline, RoutingError> {
        // OSRM takes lng,lat pairs.
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, from.lng, from.lat, to.lng, to.lat
        );

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        let route = body.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let points = route
            .geometry
            .coordinates
            .into_iter()
            // GeoJSON order is [lng, lat].
            .map(|pair| Coordinate::new(pair[1], pair[0]))
            .collect::<Vec<_>>();

        if points.is_empty() {
            return Err(RoutingError::NoRoute);
        }

        Ok(Polyline::new(points))
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
