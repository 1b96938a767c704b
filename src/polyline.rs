//! Polyline representation for route geometries.
//!
//! Stores decoded coordinate sequences directly. Encoding to/from compact
//! wire formats belongs at API boundaries, not inside the engine; the OSRM
//! adapter already requests GeoJSON geometry and hands decoded points here.

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

/// A route geometry as an ordered list of decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
