//! Ambient violet particle backdrop.
//!
//! The simulation lives in [`field::ParticleField`] and talks to the
//! outside world only through the [`surface::Surface`] trait and an
//! injected [`rand::Rng`], so it runs identically under the GPU shell
//! and under seeded tests.

pub mod animator;
pub mod field;
pub mod particle;
pub mod render;
pub mod surface;

pub use animator::Animator;
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::Surface;
