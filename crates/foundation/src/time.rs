/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

impl Time {
    pub fn zero() -> Self {
        Time(0.0)
    }

    pub fn advanced_by(self, dt_s: f64) -> Self {
        Time(self.0 + dt_s)
    }
}

#[cfg(test)]
mod tests {
    use super::Time;

    #[test]
    fn advancing_accumulates_seconds() {
        let t = Time::zero().advanced_by(0.5).advanced_by(0.25);
        assert_eq!(t, Time(0.75));
    }
}
