//! Map session lifecycle and the render pipeline.
//!
//! A `MapSession` owns the mounted canvas for the current input set and a
//! monotonically increasing generation counter. Presenting a new input set
//! begins a new generation and supersedes any pipeline run still in flight;
//! a superseded run's output is discarded by a generation check before it
//! can touch the canvas. Cancellation is logical only: a stale run is
//! allowed to finish its network calls, its result simply goes nowhere.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::geocode::GeocodeResolver;
use crate::legend::{self, LegendSpec};
use crate::marker::{self, ColorMode, MarkerKind, MarkerSpec, RouteLine};
use crate::model::{
    normalize_address, Bounds, Coordinate, DeliveryStatus, DriverTelemetry, MissedAddress,
    RoutePlan, RouteStop, StopRole,
};
use crate::stitch::stitch_path;
use crate::telemetry::TelemetryOverlay;
use crate::traits::{Geocoder, MapCanvas, MapHost, MapInitError, SegmentRouter};

/// Everything the caller supplies for one render cycle.
#[derive(Debug, Clone, Default)]
pub struct RenderInput {
    pub depot: String,
    pub plans: Vec<RoutePlan>,
    pub missed: Vec<MissedAddress>,
    /// Per-address delivery status, keyed by the address's normalized form.
    /// When present, stop markers show delivery progress; when absent, they
    /// show route identity colors.
    pub statuses: Option<HashMap<String, DeliveryStatus>>,
    pub telemetry: Option<DriverTelemetry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initializing,
    Ready,
    Disposed,
}

/// Outcome of applying a finished pipeline run.
#[derive(Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(RenderReport),
    /// The run was superseded (or the session disposed) while it was in
    /// flight; nothing was drawn.
    StaleDiscarded,
}

/// Soft-error summary for one successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Addresses omitted because geocoding failed.
    pub unresolved_addresses: u32,
}

pub struct MapSession<H: MapHost> {
    host: H,
    generation: u64,
    phase: SessionPhase,
    canvas: Option<H::Canvas>,
    bounds: Option<Bounds>,
    overlay: TelemetryOverlay,
}

impl<H: MapHost> MapSession<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            generation: 0,
            phase: SessionPhase::Uninitialized,
            canvas: None,
            bounds: None,
            overlay: TelemetryOverlay::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Viewport bounds of the last applied render.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Starts a pipeline run for a new input set. Any earlier run still in
    /// flight is now stale and will be discarded when it arrives.
    ///
    /// On a disposed session the returned run is stale from birth.
    pub fn begin(&mut self, input: RenderInput) -> PipelineRun {
        self.generation += 1;
        if self.phase != SessionPhase::Disposed {
            self.phase = SessionPhase::Initializing;
        }
        debug!(generation = self.generation, "pipeline run started");
        PipelineRun {
            generation: self.generation,
            input,
        }
    }

    /// Applies a finished run's output. The generation check happens before
    /// any canvas mutation; a mismatch means the run was superseded and its
    /// output is dropped.
    ///
    /// Mount failure is fatal to this render attempt: no partial map is
    /// shown and the error is surfaced. Bounds are fitted exactly once, on
    /// the transition to `Ready`.
    pub fn apply(&mut self, plan: RenderPlan) -> Result<ApplyOutcome, MapInitError> {
        if plan.generation != self.generation || self.phase == SessionPhase::Disposed {
            debug!(
                stale = plan.generation,
                current = self.generation,
                "discarding superseded pipeline result"
            );
            return Ok(ApplyOutcome::StaleDiscarded);
        }

        // Tear down the superseded canvas before mounting the replacement.
        self.canvas = None;
        self.overlay.reset();
        self.bounds = None;

        let mut canvas = match self.host.mount() {
            Ok(canvas) => canvas,
            Err(err) => {
                warn!(reason = %err.reason, "map mount failed");
                self.phase = SessionPhase::Uninitialized;
                return Err(err);
            }
        };

        for marker_spec in &plan.markers {
            canvas.add_marker(marker_spec);
        }
        for line in &plan.lines {
            canvas.add_route_line(line);
        }
        canvas.set_legend(&plan.legend);
        if let Some(bounds) = plan.bounds {
            canvas.fit_bounds(bounds);
        }
        if let Some(telemetry) = plan.telemetry.clone() {
            self.overlay.update(&mut canvas, telemetry);
        }

        self.canvas = Some(canvas);
        self.bounds = plan.bounds;
        self.phase = SessionPhase::Ready;
        debug!(generation = plan.generation, "render applied");
        Ok(ApplyOutcome::Applied(RenderReport {
            unresolved_addresses: plan.unresolved_addresses,
        }))
    }

    /// Convenience wrapper: run the whole pipeline synchronously.
    pub fn render<G, R>(
        &mut self,
        input: RenderInput,
        geocoder: &G,
        router: &R,
    ) -> Result<ApplyOutcome, MapInitError>
    where
        G: Geocoder,
        R: SegmentRouter,
    {
        let run = self.begin(input);
        let plan = run.execute(geocoder, router);
        self.apply(plan)
    }

    /// Cheap update path for live driver position. Bypasses the pipeline
    /// entirely; a no-op unless the session is `Ready`.
    pub fn update_telemetry(&mut self, telemetry: DriverTelemetry) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        if let Some(canvas) = self.canvas.as_mut() {
            self.overlay.update(canvas, telemetry);
        }
    }

    /// Last telemetry sample applied to the current canvas, if any.
    pub fn last_telemetry(&self) -> Option<&DriverTelemetry> {
        self.overlay.last()
    }

    /// Tears the session down: all outstanding runs become stale and the
    /// canvas is released. Terminal.
    pub fn dispose(&mut self) {
        self.generation += 1;
        self.phase = SessionPhase::Disposed;
        self.canvas = None;
        self.overlay.reset();
        self.bounds = None;
        debug!(generation = self.generation, "session disposed");
    }
}

/// One generation-tagged pipeline run.
///
/// `execute` does all the network-bound work and never touches the session,
/// so a newer run can begin while an older one is still resolving; the older
/// output is then rejected by `MapSession::apply`.
pub struct PipelineRun {
    generation: u64,
    input: RenderInput,
}

impl PipelineRun {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolves every address, stitches route geometry, and assembles the
    /// renderable plan. Soft failures (unresolved address, routing fallback)
    /// degrade the output without aborting it.
    pub fn execute<G, R>(self, geocoder: &G, router: &R) -> RenderPlan
    where
        G: Geocoder,
        R: SegmentRouter,
    {
        let input = self.input;
        let mut resolver = GeocodeResolver::new(geocoder);
        let mut markers: Vec<MarkerSpec> = Vec::new();
        let mut lines: Vec<RouteLine> = Vec::new();
        let mut bound_points: Vec<Coordinate> = Vec::new();

        let color_mode = if input.statuses.is_some() {
            ColorMode::DeliveryProgress
        } else {
            ColorMode::RouteIdentity
        };

        // Depot gets exactly one dedicated marker; depot-role stops inside
        // plans contribute to geometry and bounds only.
        if let Some(position) = resolver.resolve(&input.depot) {
            markers.push(MarkerSpec {
                position,
                kind: MarkerKind::Depot,
                caption: input.depot.clone(),
            });
            bound_points.push(position);
        }

        for (plan_index, plan) in input.plans.iter().enumerate() {
            let plan_color = marker::route_color(plan.color_index);
            let mut stop_coords: Vec<Coordinate> = Vec::new();

            for stop in &plan.stops {
                let Some(position) = resolver.resolve(&stop.address) else {
                    // Unresolved stop: omitted from markers and geometry, the
                    // path will run straight between its neighbors.
                    continue;
                };
                stop_coords.push(position);
                bound_points.push(position);

                if stop.role == StopRole::Depot {
                    continue;
                }

                // The caller-supplied status map wins over any status baked
                // into the stop itself.
                let status = match &input.statuses {
                    Some(statuses) => statuses
                        .get(&normalize_address(&stop.address))
                        .copied()
                        .or(stop.status),
                    None => stop.status,
                };
                let stop = RouteStop {
                    status,
                    ..stop.clone()
                };
                markers.push(MarkerSpec {
                    position,
                    kind: marker::stop_marker_kind(&stop, color_mode, plan_color),
                    caption: stop.address.clone(),
                });
            }

            if stop_coords.len() > 1 {
                lines.push(RouteLine {
                    points: stitch_path(router, &stop_coords),
                    color: plan_color,
                    dashed: plan_index % 2 == 1,
                });
            }
        }

        for missed in &input.missed {
            let Some(position) = resolver.resolve(&missed.address) else {
                continue;
            };
            markers.push(MarkerSpec {
                position,
                kind: MarkerKind::Missed,
                caption: missed_caption(missed),
            });
            bound_points.push(position);
        }

        if let Some(telemetry) = &input.telemetry {
            bound_points.push(telemetry.position);
        }

        RenderPlan {
            generation: self.generation,
            legend: legend::build(&input.plans, !input.missed.is_empty()),
            bounds: Bounds::from_points(bound_points),
            unresolved_addresses: resolver.unresolved_count(),
            telemetry: input.telemetry,
            markers,
            lines,
        }
    }
}

fn missed_caption(missed: &MissedAddress) -> String {
    format!("{}: {}", missed.address, missed.reason)
}

/// Fully resolved render content for one generation. Pure data; applying it
/// to a canvas is `MapSession::apply`'s job.
#[derive(Debug)]
pub struct RenderPlan {
    generation: u64,
    pub markers: Vec<MarkerSpec>,
    pub lines: Vec<RouteLine>,
    pub legend: LegendSpec,
    pub bounds: Option<Bounds>,
    pub telemetry: Option<DriverTelemetry>,
    pub unresolved_addresses: u32,
}

impl RenderPlan {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
