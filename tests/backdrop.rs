use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use violet_drift::{Animator, ParticleField, Surface};

/// Counts what a frame asks of the surface.
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    circles: usize,
    alpha: f32,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }
    fn set_fill_color(&mut self, _color: [f32; 3]) {}
    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32) {
        self.circles += 1;
    }
}

#[test]
fn a_running_backdrop_draws_every_particle_each_frame() {
    let field = ParticleField::new(1280.0, 720.0, StdRng::seed_from_u64(11));
    let mut animator = Animator::new(field);
    animator.start();

    let mut surface = CountingSurface::default();
    for frame in 1..=60 {
        animator.frame(&mut surface);
        assert_eq!(surface.clears, frame);
        assert_eq!(surface.circles, frame * 100);
        // Alpha always ends a frame restored to opaque.
        assert_eq!(surface.alpha, 1.0);
    }
}

#[test]
fn shrinking_the_window_thins_the_field() {
    let field = ParticleField::new(1280.0, 720.0, StdRng::seed_from_u64(12));
    let mut animator = Animator::new(field);
    animator.start();

    let mut surface = CountingSurface::default();
    animator.frame(&mut surface);
    assert_eq!(surface.circles, 100);

    animator.field_mut().resize(480.0, 720.0);
    surface.circles = 0;
    animator.frame(&mut surface);
    assert_eq!(surface.circles, 50);
}

proptest! {
    #[test]
    fn positions_never_escape_the_surface(
        seed in any::<u64>(),
        width in 100.0f32..2000.0,
        height in 100.0f32..2000.0,
        frames in 1usize..200,
    ) {
        let mut field = ParticleField::new(width, height, StdRng::seed_from_u64(seed));
        for _ in 0..frames {
            field.advance();
        }
        for p in field.particles() {
            prop_assert!(p.x >= 0.0 && p.x <= width);
            prop_assert!(p.y >= -10.0 && p.y <= height);
        }
    }
}
