//! Core seams for the map engine.
//!
//! These are intentionally minimal. Concrete apps wire in real services
//! (Nominatim, OSRM, a Leaflet-style canvas) or test doubles.

use crate::legend::LegendSpec;
use crate::marker::{MarkerSpec, RouteLine};
use crate::model::{Bounds, Coordinate};
use crate::polyline::Polyline;

/// Resolves a free-text address to its best-match coordinate.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}

/// Address resolution failure. Recovered locally by the pipeline: the
/// affected stop is omitted and a soft-error counter is incremented.
#[derive(Debug)]
pub enum GeocodeError {
    /// The service answered but had no match for the address.
    NoMatch,
    Http(reqwest::Error),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}

/// Produces a road-following point sequence between two coordinates.
pub trait SegmentRouter {
    fn route_between(&self, from: Coordinate, to: Coordinate) -> Result<Polyline, RoutingError>;
}

/// Segment routing failure. Never surfaced to the caller: the stitcher
/// degrades the segment to a straight line.
#[derive(Debug)]
pub enum RoutingError {
    /// The service answered but found no route between the points.
    NoRoute,
    Http(reqwest::Error),
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Http(err)
    }
}

/// Rendering surface the engine draws onto.
///
/// One canvas is exclusively owned by one session generation; a superseded
/// generation never gets to mutate it. `upsert_driver` must keep at most one
/// driver marker and accuracy circle alive, repositioning them on every call.
pub trait MapCanvas {
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn add_route_line(&mut self, line: &RouteLine);
    fn set_legend(&mut self, legend: &LegendSpec);
    fn fit_bounds(&mut self, bounds: Bounds);
    fn upsert_driver(&mut self, position: Coordinate, accuracy_m: f64);
}

/// Creates map canvases. Mounting can fail (no container element, tile layer
/// refused, ...) and that failure is fatal to the render attempt.
pub trait MapHost {
    type Canvas: MapCanvas;

    fn mount(&self) -> Result<Self::Canvas, MapInitError>;
}

/// The underlying map instance could not be created.
#[derive(Debug)]
pub struct MapInitError {
    pub reason: String,
}

impl MapInitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
