//! route-map rendering engine
//!
//! Turns delivery route plans (ordered address lists) into renderable map
//! content: geocoded markers, road-following route lines, a legend, viewport
//! bounds, and a live driver overlay. Rendering itself happens behind the
//! `MapCanvas` seam, so the engine carries no GUI dependency.

pub mod traits;
pub mod model;
pub mod polyline;
pub mod geocode;
pub mod osrm;
pub mod osrm_data;
pub mod stitch;
pub mod marker;
pub mod legend;
pub mod session;
pub mod telemetry;
