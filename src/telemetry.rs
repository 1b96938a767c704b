//! Live driver overlay, updated outside the render pipeline.
//!
//! The overlay only repositions one marker and one accuracy circle. It never
//! geocodes, never routes, and owns no timer; the polling cadence belongs to
//! the caller.

use crate::model::DriverTelemetry;
use crate::traits::MapCanvas;

#[derive(Debug, Default)]
pub struct TelemetryOverlay {
    last: Option<DriverTelemetry>,
}

impl TelemetryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one telemetry sample to the canvas. The canvas creates the
    /// driver marker lazily on the first call and repositions it afterwards.
    pub fn update<C: MapCanvas>(&mut self, canvas: &mut C, telemetry: DriverTelemetry) {
        canvas.upsert_driver(telemetry.position, telemetry.accuracy_m);
        self.last = Some(telemetry);
    }

    /// The most recently applied sample, if any.
    pub fn last(&self) -> Option<&DriverTelemetry> {
        self.last.as_ref()
    }

    /// Forgets overlay state, used when the canvas it drew on is replaced.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
