//! Stitches per-segment road geometry into one continuous path per route.

use tracing::warn;

use crate::model::Coordinate;
use crate::polyline::Polyline;
use crate::traits::SegmentRouter;

/// Builds the full path for a route from its resolved stop coordinates.
///
/// Each consecutive pair is routed independently. Every segment after the
/// first has its leading point dropped before appending, because it repeats
/// the prior segment's trailing point; keeping it would put a doubled point
/// at every stop. A failed or empty segment degrades to the straight line
/// between the two stops, so this never fails, it only flattens geometry.
///
/// Stops that failed geocoding must not appear in `stops`: the path is then
/// stitched directly between their geocoded neighbors.
pub fn stitch_path<R: SegmentRouter>(router: &R, stops: &[Coordinate]) -> Polyline {
    if stops.len() < 2 {
        return Polyline::new(stops.to_vec());
    }

    let mut points: Vec<Coordinate> = Vec::new();
    for (i, pair) in stops.windows(2).enumerate() {
        let segment = match router.route_between(pair[0], pair[1]) {
            Ok(segment) if !segment.is_empty() => Some(segment),
            Ok(_) => None,
            Err(err) => {
                warn!(?err, "segment routing failed, using straight line");
                None
            }
        };

        match segment {
            Some(segment) => {
                let skip = if i == 0 { 0 } else { 1 };
                points.extend(segment.into_points().into_iter().skip(skip));
            }
            None => {
                if i == 0 {
                    points.push(pair[0]);
                }
                points.push(pair[1]);
            }
        }
    }

    Polyline::new(points)
}
