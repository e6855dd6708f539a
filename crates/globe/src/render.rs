use crate::snapshot::GlobeFrame;

/// Route gold, the product's accent color (#C5A572).
pub const ROUTE_GOLD: [f32; 4] = [0.773, 0.647, 0.447, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub struct ArcStyle {
    pub color: [f32; 4],
    pub stroke_width: f32,
    /// Dash pattern as fractions of the arc length.
    pub dash_length: f32,
    pub dash_gap: f32,
    /// One dash cycle, in milliseconds. 0 disables the animation.
    pub dash_period_ms: f32,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            color: ROUTE_GOLD,
            stroke_width: 0.5,
            dash_length: 0.4,
            dash_gap: 0.2,
            dash_period_ms: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub color: [f32; 4],
    pub size: f32,
    pub dot_radius: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: ROUTE_GOLD,
            size: 1.2,
            dot_radius: 0.4,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlobeStyle {
    pub arc: ArcStyle,
    pub label: LabelStyle,
}

/// Capability seam between the geometry engine and whatever draws it.
///
/// The engine hands over one declarative `GlobeFrame` per data change
/// (or per frame, they are cheap to rebuild); how the surface turns
/// buffers and styles into pixels is its own business. Keeping this the
/// only seam is what stops geometry logic from being duplicated per
/// graphics backend.
pub trait RenderSurface {
    fn render(&mut self, frame: &GlobeFrame);
}
