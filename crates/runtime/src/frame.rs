use foundation::time::Time;

/// Frame metadata advanced by the host render loop.
///
/// The host environment owns the scheduling (one callback per display
/// refresh); this type just records where that loop is. It is small and
/// pure so frame state can be recorded and replayed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Delta time of the step that produced this frame (seconds).
    pub dt_s: f64,
    /// Accumulated time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn start() -> Self {
        Self {
            index: 0,
            dt_s: 0.0,
            time: Time::zero(),
        }
    }

    /// Advance by a host-supplied delta. Refresh intervals vary, so the
    /// delta is an input rather than a fixed constant.
    pub fn advance(self, dt_s: f64) -> Self {
        Self {
            index: self.index + 1,
            dt_s,
            time: self.time.advanced_by(dt_s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use foundation::time::Time;

    #[test]
    fn advance_accumulates_variable_deltas() {
        let f = Frame::start().advance(1.0 / 60.0).advance(1.0 / 30.0);
        assert_eq!(f.index, 2);
        assert_eq!(f.dt_s, 1.0 / 30.0);
        assert_eq!(f.time, Time(1.0 / 60.0 + 1.0 / 30.0));
    }

    #[test]
    fn frames_are_value_types() {
        let a = Frame::start().advance(0.5);
        let b = Frame::start().advance(0.5);
        assert_eq!(a, b);
    }
}
