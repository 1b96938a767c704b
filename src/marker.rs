//! Renderable marker and route-line specs.
//!
//! Markers are a typed enumeration rather than presentation markup; how a
//! `MarkerKind` turns into an icon is the canvas implementation's business.

use crate::model::{Coordinate, DeliveryStatus, RouteStop, StopRole};
use crate::polyline::Polyline;

/// Fixed palette for per-route colors, indexed by `color_index` and wrapping.
pub const ROUTE_COLORS: [&str; 8] = [
    "#8B5CF6", // purple
    "#EC4899", // pink
    "#10B981", // green
    "#F59E0B", // orange
    "#EF4444", // red
    "#3B82F6", // blue
    "#14B8A6", // teal
    "#A855F7", // violet
];

pub const DEPOT_COLOR: &str = "#4F46E5";
pub const MISSED_COLOR: &str = "#EF4444";
pub const DRIVER_COLOR: &str = "#DC2626";

pub fn route_color(color_index: usize) -> &'static str {
    ROUTE_COLORS[color_index % ROUTE_COLORS.len()]
}

fn status_color(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Pending => "#F59E0B",
        DeliveryStatus::Completed => "#10B981",
        DeliveryStatus::Failed => "#EF4444",
    }
}

/// What a stop marker's color should express.
///
/// `DeliveryProgress` colors each stop by its delivery status (a single
/// route's progress view); `RouteIdentity` colors each stop by its plan's
/// palette color (a multi-route itinerary view). The session picks the mode
/// from the data the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    RouteIdentity,
    DeliveryProgress,
}

/// Marker variants. Missed and driver markers are fixed kinds and never
/// borrow from the stop palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Depot,
    Stop {
        color: &'static str,
        /// Displayed sequence number within the route.
        label: usize,
    },
    Missed,
    Driver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Coordinate,
    pub kind: MarkerKind,
    /// Popup text: the address, plus the miss reason for missed markers.
    pub caption: String,
}

/// A stitched route line ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLine {
    pub points: Polyline,
    pub color: &'static str,
    /// Alternating plans get a dashed pattern so overlapping lines stay
    /// distinguishable.
    pub dashed: bool,
}

/// Deterministic (role, status) to marker mapping. Depot wins over status.
pub fn stop_marker_kind(stop: &RouteStop, mode: ColorMode, plan_color: &'static str) -> MarkerKind {
    if stop.role == StopRole::Depot {
        return MarkerKind::Depot;
    }
    let color = match mode {
        ColorMode::DeliveryProgress => status_color(stop.status.unwrap_or(DeliveryStatus::Pending)),
        ColorMode::RouteIdentity => plan_color,
    };
    MarkerKind::Stop {
        color,
        label: stop.sequence_index,
    }
}
