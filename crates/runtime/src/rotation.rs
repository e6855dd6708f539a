/// Default yaw rate of the idle globe (degrees per second).
pub const GLOBE_SPIN_DEG_PER_S: f64 = 2.1;
/// Default drift rate of the cloud shell, counter to the globe spin.
pub const CLOUD_DRIFT_DEG_PER_S: f64 = -0.36;

/// Explicit rotation state for one spinning shell (globe or clouds).
///
/// The host render loop calls `tick(dt)` once per frame and applies the
/// returned yaw to its camera or mesh transform. There is no recurring
/// callback and no hidden state: the same sequence of deltas always
/// produces the same yaw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AutoRotate {
    pub yaw_deg: f64,
    pub speed_deg_per_s: f64,
    pub enabled: bool,
}

impl AutoRotate {
    pub fn new(speed_deg_per_s: f64) -> Self {
        Self {
            yaw_deg: 0.0,
            speed_deg_per_s,
            enabled: true,
        }
    }

    pub fn globe() -> Self {
        Self::new(GLOBE_SPIN_DEG_PER_S)
    }

    pub fn clouds() -> Self {
        Self::new(CLOUD_DRIFT_DEG_PER_S)
    }

    /// Advance the rotation by one host frame. Yaw is kept in [0, 360).
    pub fn tick(self, dt_s: f64) -> Self {
        if !self.enabled {
            return self;
        }
        let yaw = (self.yaw_deg + self.speed_deg_per_s * dt_s).rem_euclid(360.0);
        Self {
            yaw_deg: yaw,
            ..self
        }
    }

    /// Pause without losing the current yaw, e.g. while the user drags.
    pub fn paused(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }

    pub fn resumed(self) -> Self {
        Self {
            enabled: true,
            ..self
        }
    }
}
