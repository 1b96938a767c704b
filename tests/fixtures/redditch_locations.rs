//! Delivery addresses around Redditch, UK with coordinates for mock
//! geocoding. The coordinates cluster around the town center (52.3068,
//! -1.9465), matching the area the engine was built for.

use route_map::model::Coordinate;

/// A geocodable address with its known coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(address: &'static str, lat: f64, lng: f64) -> Self {
        Self { address, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const DEPOT: Location = Location::new("Unit 5 Arrow Valley Park, Redditch", 52.3045, -1.9210);

pub const STOPS: &[Location] = &[
    Location::new("14 Evesham Walk, Redditch", 52.3061, -1.9442),
    Location::new("2 Church Green West, Redditch", 52.3075, -1.9480),
    Location::new("88 Birchfield Road, Redditch", 52.3111, -1.9630),
    Location::new("31 Easemore Road, Redditch", 52.3109, -1.9401),
    Location::new("7 Plymouth Road, Redditch", 52.3009, -1.9397),
    Location::new("52 Mount Pleasant, Redditch", 52.2984, -1.9341),
    Location::new("19 Studley Road, Redditch", 52.3022, -1.9255),
];

pub const MISSED: &[Location] = &[
    Location::new("3 Feckenham Road, Astwood Bank", 52.2547, -1.9360),
    Location::new("40 Alcester Road, Studley", 52.2710, -1.8920),
];
