use foundation::math::Vec3;

use crate::stop::Stop;

/// A stop name anchored slightly above the globe surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StopLabel {
    pub text: String,
    pub position: Vec3,
}

/// Label anchors for every named stop, at the given render radius.
/// Unnamed stops still get a route arc but no label.
pub fn stop_labels(stops: &[Stop], radius: f64) -> Vec<StopLabel> {
    let mut out: Vec<StopLabel> = Vec::with_capacity(stops.len());
    for stop in stops {
        let trimmed = stop.name.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push(StopLabel {
            text: trimmed.to_string(),
            position: stop.position(radius),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::stop_labels;
    use crate::stop::Stop;

    #[test]
    fn one_label_per_named_stop() {
        let stops = vec![
            Stop::new("Key West", 24.55, -81.78),
            Stop::new("  San Juan  ", 18.47, -66.1),
        ];
        let labels = stop_labels(&stops, 1.01);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].text, "Key West");
        assert_eq!(labels[1].text, "San Juan");
        assert_eq!(labels[0].position, stops[0].position(1.01));
    }

    #[test]
    fn blank_names_are_skipped() {
        let stops = vec![Stop::new("", 0.0, 0.0), Stop::new("   ", 1.0, 1.0)];
        assert!(stop_labels(&stops, 1.01).is_empty());
    }
}
