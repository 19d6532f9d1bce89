use rand::Rng;

use crate::particle::Particle;
use crate::surface::Surface;

/// Surface width below which the field thins out to half the particles.
pub const NARROW_WIDTH: f32 = 768.0;
pub const NARROW_COUNT: usize = 50;
pub const WIDE_COUNT: usize = 100;

/// Shared fill color for every particle (#A78BFA). Opacity varies per
/// particle, the color never does.
pub const FIELD_COLOR: [f32; 3] = [0.655, 0.545, 0.980];

/// Particles leaving through the bottom re-enter just above the top edge.
const RESPAWN_Y: f32 = -10.0;

/// The ambient backdrop: a fixed-count collection of drifting particles
/// over a `width` x `height` surface.
///
/// The random source is injected so generation and wraparound are
/// deterministic under a seeded rng.
pub struct ParticleField<R> {
    width: f32,
    height: f32,
    rng: R,
    particles: Vec<Particle>,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(width: f32, height: f32, rng: R) -> Self {
        let mut field = Self {
            width,
            height,
            rng,
            particles: Vec::new(),
        };
        field.regenerate();
        field
    }

    /// Sizing rule: 50 particles on narrow surfaces, 100 otherwise.
    /// Evaluated at construction and on resize, never mid-frame.
    pub fn count_for_width(width: f32) -> usize {
        if width < NARROW_WIDTH {
            NARROW_COUNT
        } else {
            WIDE_COUNT
        }
    }

    /// Re-measures the surface and rebuilds the whole collection. No
    /// particle survives a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = Self::count_for_width(self.width);
        self.particles.clear();
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&mut self.rng, self.width, self.height));
        }
    }

    /// Advances every particle by one frame and applies the edge policy:
    /// falling out the bottom re-enters at y = -10 with a fresh x, while
    /// the horizontal edges hard-clamp to the opposite side. The clamp is
    /// intentionally not a modulo wrap and intentionally keeps y.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.y > self.height {
                p.y = RESPAWN_Y;
                p.x = self.rng.gen_range(0.0..self.width);
            }
            if p.x > self.width {
                p.x = 0.0;
            }
            if p.x < 0.0 {
                p.x = self.width;
            }
        }
    }

    /// Draws the field: one shared fill color, per-circle alpha restored
    /// to opaque after each particle so nothing leaks into later draws.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.set_fill_color(FIELD_COLOR);
        for p in &self.particles {
            surface.set_global_alpha(p.opacity);
            surface.fill_circle(p.x, p.y, p.radius);
            surface.set_global_alpha(1.0);
        }
    }

    /// One frame: clear, draw, then advance.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        self.draw(surface);
        self.advance();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(width: f32, height: f32, seed: u64) -> ParticleField<StdRng> {
        ParticleField::new(width, height, StdRng::seed_from_u64(seed))
    }

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        FillColor([f32; 3]),
        Alpha(f32),
        Circle(f32, f32, f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn set_fill_color(&mut self, color: [f32; 3]) {
            self.ops.push(Op::FillColor(color));
        }
        fn set_global_alpha(&mut self, alpha: f32) {
            self.ops.push(Op::Alpha(alpha));
        }
        fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
            self.ops.push(Op::Circle(x, y, radius));
        }
    }

    #[test]
    fn initial_population_is_inside_the_surface() {
        let field = field(1024.0, 768.0, 1);
        assert_eq!(field.particles().len(), WIDE_COUNT);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 1024.0);
            assert!(p.y >= 0.0 && p.y < 768.0);
        }
    }

    #[test]
    fn sizing_rule_halves_on_narrow_surfaces() {
        assert_eq!(ParticleField::<StdRng>::count_for_width(767.9), NARROW_COUNT);
        assert_eq!(ParticleField::<StdRng>::count_for_width(768.0), WIDE_COUNT);
        assert_eq!(field(320.0, 480.0, 2).particles().len(), NARROW_COUNT);
    }

    #[test]
    fn bounds_hold_across_many_frames() {
        let mut field = field(640.0, 360.0, 3);
        for _ in 0..5000 {
            field.advance();
            for p in field.particles() {
                assert!(p.x >= 0.0 && p.x <= 640.0, "x escaped: {}", p.x);
                assert!(p.y >= -10.0 && p.y <= 360.0, "y escaped: {}", p.y);
            }
        }
    }

    #[test]
    fn resize_replaces_every_particle() {
        let mut field = field(1024.0, 768.0, 4);
        let before = field.particles().to_vec();
        field.resize(640.0, 480.0);
        assert_eq!(field.particles().len(), NARROW_COUNT);
        for p in field.particles() {
            assert!(p.x < 640.0 && p.y < 480.0);
            assert!(!before.contains(p));
        }
    }

    #[test]
    fn bottom_exit_reenters_above_with_fresh_x() {
        let mut field = field(800.0, 600.0, 5);
        {
            let p = &mut field.particles[0];
            p.x = 400.0;
            p.y = 599.99;
            p.vx = 0.0;
            p.vy = 0.5;
        }
        field.advance();
        let p = field.particles[0];
        assert_eq!(p.y, -10.0);
        assert!(p.x >= 0.0 && p.x < 800.0);
    }

    #[test]
    fn right_exit_clamps_to_left_edge() {
        let mut field = field(800.0, 600.0, 6);
        {
            let p = &mut field.particles[0];
            p.x = 799.9;
            p.y = 100.0;
            p.vx = 0.15;
            p.vy = 0.0;
        }
        field.advance();
        assert_eq!(field.particles[0].x, 0.0);
        assert_eq!(field.particles[0].y, 100.0);
    }

    #[test]
    fn left_exit_clamps_to_right_edge() {
        let mut field = field(800.0, 600.0, 7);
        {
            let p = &mut field.particles[0];
            p.x = 0.05;
            p.y = 100.0;
            p.vx = -0.15;
            p.vy = 0.0;
        }
        field.advance();
        // Asymmetric on purpose: the left edge wraps to exactly x == width.
        assert_eq!(field.particles[0].x, 800.0);
        assert_eq!(field.particles[0].y, 100.0);
    }

    #[test]
    fn identical_seeds_stay_in_lockstep() {
        let mut a = field(800.0, 600.0, 8);
        let mut b = field(800.0, 600.0, 8);
        for _ in 0..500 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn tick_clears_then_draws_each_particle_with_restored_alpha() {
        let mut field = field(320.0, 240.0, 9);
        let mut surface = RecordingSurface::default();
        field.tick(&mut surface);

        assert_eq!(surface.ops[0], Op::Clear);
        assert_eq!(surface.ops[1], Op::FillColor(FIELD_COLOR));
        let per_particle = &surface.ops[2..];
        assert_eq!(per_particle.len(), NARROW_COUNT * 3);
        for (chunk, p) in per_particle.chunks(3).zip(field.particles()) {
            assert!(matches!(chunk[0], Op::Alpha(a) if a > 0.0 && a < 1.0));
            assert!(matches!(chunk[1], Op::Circle(..)));
            assert_eq!(chunk[2], Op::Alpha(1.0));
            // Draw happened before advance, so the drawn center trails the
            // particle by exactly one velocity step.
            if let Op::Circle(x, y, r) = chunk[1] {
                if p.y != -10.0 && p.x != 0.0 && p.x != 320.0 {
                    assert!((x + p.vx - p.x).abs() < 1e-4);
                    assert!((y + p.vy - p.y).abs() < 1e-4);
                }
                assert_eq!(r, p.radius);
            }
        }
    }
}
