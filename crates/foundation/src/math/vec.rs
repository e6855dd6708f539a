#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Rescale to the given length. A zero vector is returned unchanged
    /// rather than producing NaN components.
    pub fn with_length(self, len: f64) -> Self {
        let l2 = self.dot(self);
        if l2 <= 0.0 {
            return self;
        }
        self.scale(len / l2.sqrt())
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self).scale(t)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec3;

    #[test]
    fn add_sub_dot() {
        let a = Vec3::new(1.0, 2.0, -1.0);
        let b = Vec3::new(0.5, -2.0, 3.0);
        assert_eq!(a + b, Vec3::new(1.5, 0.0, 2.0));
        assert_eq!(a - b, Vec3::new(0.5, 4.0, -4.0));
        assert_eq!(a.dot(b), -6.5);
    }

    #[test]
    fn with_length_rescales() {
        let v = Vec3::new(3.0, 0.0, 4.0).with_length(10.0);
        assert_eq!(v, Vec3::new(6.0, 0.0, 8.0));
    }

    #[test]
    fn with_length_leaves_zero_vector_alone() {
        let v = Vec3::new(0.0, 0.0, 0.0).with_length(5.0);
        assert_eq!(v, Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(2.0, -4.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(1.0, -2.0, 3.0));
    }
}
