use foundation::math::Vec3;

use crate::arc::route_arcs;
use crate::interpolate::great_circle_points;
use crate::stop::Stop;

/// Assemble the rendered route for an ordered list of stops.
///
/// Each arc becomes its own point list so the renderer can dash and
/// animate legs independently. Fewer than two stops produce an empty
/// route, which callers must treat as "render nothing" rather than an
/// error.
pub fn assemble_route(stops: &[Stop], segments: usize, radius: f64) -> Vec<Vec<Vec3>> {
    route_arcs(stops.len())
        .into_iter()
        .map(|arc| {
            let start = stops[arc.start].position(radius);
            let end = stops[arc.end].position(radius);
            great_circle_points(start, end, segments, radius)
        })
        .collect()
}
