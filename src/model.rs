//! Core data model for the map rendering engine.
//!
//! Everything here is plain data handed over by the surrounding application:
//! route plans from the backend, delivery statuses, missed addresses, and
//! driver telemetry. Geometry types (`Coordinate`, `Bounds`) are shared by
//! every other module.

use serde::{Deserialize, Serialize};

/// A resolved geographic position (degrees). Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Normalized form of a free-text address, used as the geocode cache key.
///
/// Two addresses with the same normalized form must resolve to the same
/// coordinate within one pipeline run.
pub fn normalize_address(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Per-stop delivery outcome as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Completed,
    Failed,
}

/// Role of a stop within its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopRole {
    Depot,
    Stop,
}

/// One ordered waypoint in a route plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub address: String,
    pub sequence_index: usize,
    pub role: StopRole,
    pub status: Option<DeliveryStatus>,
}

/// An ordered delivery route for a single driver.
///
/// `color_index` selects a palette color; it is assigned by plan position and
/// wraps when plans exceed the palette size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub driver_label: String,
    pub color_index: usize,
    pub stops: Vec<RouteStop>,
}

impl RoutePlan {
    /// Builds a plan from a bare address list, the shape the backend emits:
    /// the first and last address are the depot.
    pub fn from_addresses(driver_label: impl Into<String>, color_index: usize, addresses: &[&str]) -> Self {
        let last = addresses.len().saturating_sub(1);
        let stops = addresses
            .iter()
            .enumerate()
            .map(|(i, address)| RouteStop {
                address: (*address).to_string(),
                sequence_index: i,
                role: if i == 0 || (i == last && last > 0) {
                    StopRole::Depot
                } else {
                    StopRole::Stop
                },
                status: None,
            })
            .collect();

        Self {
            driver_label: driver_label.into(),
            color_index,
            stops,
        }
    }
}

/// An address that could not be scheduled into any plan, rendered on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedAddress {
    pub address: String,
    pub reason: String,
}

/// A single live position sample for a driver.
///
/// Each sample replaces the previous one wholesale; the engine keeps no
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverTelemetry {
    pub position: Coordinate,
    /// Reported GPS accuracy radius in meters.
    pub accuracy_m: f64,
    /// Capture time as unix seconds.
    pub captured_at: i64,
}

/// Axis-aligned lat/lng bounding box for viewport fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Smallest box containing all points, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: Coordinate) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}
