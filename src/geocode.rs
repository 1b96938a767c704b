//! Geocoding: Nominatim HTTP client and the per-session caching resolver.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::model::{normalize_address, Coordinate};
use crate::traits::{GeocodeError, Geocoder};

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: format!("route-map/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
        }
    }
}

/// Nominatim search adapter. Returns the best match only.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/search", self.config.base_url);
        let places = self
            .client
            .get(url)
            .query(&[("format", "json"), ("limit", "1"), ("q", address)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>())?;

        // Nominatim serializes coordinates as strings.
        places
            .first()
            .and_then(|place| {
                let lat = place.lat.parse::<f64>().ok()?;
                let lng = place.lon.parse::<f64>().ok()?;
                Some(Coordinate::new(lat, lng))
            })
            .ok_or(GeocodeError::NoMatch)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Caching resolver for one pipeline run.
///
/// Calls the underlying service one at a time (`resolve` takes `&mut self`,
/// so there is no way to issue a concurrent burst) and caches every
/// successful resolution keyed by the address's normalized form. A repeated
/// address, such as a depot appearing as both first and last stop, costs one
/// external call. Failures are counted but not cached.
pub struct GeocodeResolver<'a, G: Geocoder> {
    service: &'a G,
    cache: HashMap<String, Coordinate>,
    unresolved: u32,
}

impl<'a, G: Geocoder> GeocodeResolver<'a, G> {
    pub fn new(service: &'a G) -> Self {
        Self {
            service,
            cache: HashMap::new(),
            unresolved: 0,
        }
    }

    pub fn resolve(&mut self, address: &str) -> Option<Coordinate> {
        let key = normalize_address(address);
        if let Some(coordinate) = self.cache.get(&key) {
            debug!(address, "geocode cache hit");
            return Some(*coordinate);
        }

        match self.service.geocode(address) {
            Ok(coordinate) => {
                self.cache.insert(key, coordinate);
                Some(coordinate)
            }
            Err(err) => {
                warn!(address, ?err, "address left unresolved");
                self.unresolved += 1;
                None
            }
        }
    }

    /// Number of addresses that failed to resolve so far.
    pub fn unresolved_count(&self) -> u32 {
        self.unresolved
    }
}
