//! Test fixtures for route-map.
//!
//! Provides realistic delivery addresses around Redditch, UK (the original
//! deployment area) with plausible coordinates for mock geocoding.

pub mod redditch_locations;

pub use redditch_locations::*;
