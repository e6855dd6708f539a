use foundation::math::{ARC_ALTITUDE, GLOBE_RADIUS, LABEL_ALTITUDE, Vec3};

use crate::continents::{ContinentOutline, triangulate_outline};
use crate::interpolate::DEFAULT_ARC_SEGMENTS;
use crate::labels::{StopLabel, stop_labels};
use crate::render::GlobeStyle;
use crate::route::assemble_route;
use crate::stop::Stop;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeConfig {
    pub radius: f64,
    pub arc_segments: usize,
    /// Route arcs render at radius * arc_altitude so they float just
    /// above the surface instead of z-fighting with it.
    pub arc_altitude: f64,
    pub label_altitude: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: GLOBE_RADIUS,
            arc_segments: DEFAULT_ARC_SEGMENTS,
            arc_altitude: ARC_ALTITUDE,
            label_altitude: LABEL_ALTITUDE,
        }
    }
}

/// One complete set of declarative draw inputs for a render surface.
///
/// Everything in here is derived from the stops and the static outlines;
/// there is no retained state to invalidate. Rebuild it whenever the
/// itinerary changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlobeFrame {
    /// One point list per route arc, in itinerary order, closing arc last.
    pub route_arcs: Vec<Vec<Vec3>>,
    pub labels: Vec<StopLabel>,
    /// Flat triangle list (3 vertices per triangle) for continent fills.
    pub continent_triangles: Vec<Vec3>,
    pub style: GlobeStyle,
}

impl GlobeFrame {
    pub fn build(stops: &[Stop], outlines: &[ContinentOutline], config: &GlobeConfig) -> Self {
        let mut continent_triangles: Vec<Vec3> = Vec::new();
        for outline in outlines {
            continent_triangles.extend(triangulate_outline(outline, config.radius));
        }

        Self {
            route_arcs: assemble_route(
                stops,
                config.arc_segments,
                config.radius * config.arc_altitude,
            ),
            labels: stop_labels(stops, config.radius * config.label_altitude),
            continent_triangles,
            style: GlobeStyle::default(),
        }
    }
}
