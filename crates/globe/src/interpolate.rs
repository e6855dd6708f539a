use foundation::math::Vec3;

/// Default number of segments per route arc (33 samples per arc).
pub const DEFAULT_ARC_SEGMENTS: usize = 32;

/// Approximate the great-circle arc between two points on a sphere.
///
/// Samples are linearly interpolated in Cartesian space and pushed back
/// out to `radius`. This is deliberately not a spherical slerp: the
/// rendered curve only has to look continuous, and the chord-based
/// samples bunch slightly toward the arc midpoint in a way nobody can
/// see at 32 segments. Keep it this way unless visual requirements
/// change.
///
/// Returns `segments + 1` points including both endpoints (a segment
/// count of 0 is treated as 1), every point at distance `radius` from
/// the origin. Pure and deterministic.
pub fn great_circle_points(start: Vec3, end: Vec3, segments: usize, radius: f64) -> Vec<Vec3> {
    let segments = segments.max(1);

    let mut points: Vec<Vec3> = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        points.push(start.lerp(end, t).with_length(radius));
    }
    points
}
