use rand::Rng;

/// One drifting point of the backdrop. Velocity is a constant per-frame
/// delta, not units per second; the drift is deliberately tied to the
/// display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

pub const RADIUS_RANGE: (f32, f32) = (0.5, 3.0);
pub const DRIFT_X_RANGE: (f32, f32) = (-0.15, 0.15);
pub const DRIFT_Y_RANGE: (f32, f32) = (0.2, 0.7);
pub const OPACITY_RANGE: (f32, f32) = (0.3, 0.8);

impl Particle {
    /// Draws a fresh particle anywhere on a `width` x `height` surface.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            vx: rng.gen_range(DRIFT_X_RANGE.0..DRIFT_X_RANGE.1),
            vy: rng.gen_range(DRIFT_Y_RANGE.0..DRIFT_Y_RANGE.1),
            radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            opacity: rng.gen_range(OPACITY_RANGE.0..OPACITY_RANGE.1),
        }
    }
}
