use super::Vec3;

/// Base radius of the unit globe. Routes, labels and continent fills are
/// all expressed as multiples of this.
pub const GLOBE_RADIUS: f64 = 1.0;
/// Altitude factor for route arcs, slightly above the surface.
pub const ARC_ALTITUDE: f64 = 1.02;
/// Altitude factor for stop labels and their dot markers.
pub const LABEL_ALTITUDE: f64 = 1.01;

/// Project geographic coordinates onto a sphere of the given radius.
///
/// Fixed convention: polar angle phi = (90 - lat) degrees, azimuthal
/// angle theta = (lng + 180) degrees, with
///   x = r * sin(phi) * cos(theta)
///   y = r * cos(phi)
///   z = r * sin(phi) * sin(theta)
/// so (lat 0, lng 0) at radius 1 lands on (-1, 0, 0). Every lat/lng in
/// the engine goes through this one function; mixing conventions makes
/// continents, routes and markers visibly drift apart.
///
/// Out-of-range coordinates still produce a point on the sphere. They
/// are semantically meaningless, not an error.
pub fn lat_lng_to_cartesian(lat_deg: f64, lng_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();

    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.cos(),
        radius * phi.cos(),
        radius * sin_phi * theta.sin(),
    )
}
