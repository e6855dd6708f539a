use foundation::math::{Vec3, lat_lng_to_cartesian};

/// A named waypoint of an itinerary, in visiting order.
///
/// Stops are produced by the content layer and are immutable once handed
/// to the engine; everything 3D is recomputed from them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl Stop {
    pub fn new(name: impl Into<String>, lat_deg: f64, lng_deg: f64) -> Self {
        Self {
            name: name.into(),
            lat_deg,
            lng_deg,
        }
    }

    pub fn position(&self, radius: f64) -> Vec3 {
        lat_lng_to_cartesian(self.lat_deg, self.lng_deg, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::Stop;

    #[test]
    fn position_uses_the_shared_projection() {
        let stop = Stop::new("Key West", 24.55, -81.78);
        let p = stop.position(1.0);
        let q = foundation::math::lat_lng_to_cartesian(24.55, -81.78, 1.0);
        assert_eq!(p, q);
    }
}
