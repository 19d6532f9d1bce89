use rand::Rng;
use tracing::debug;

use crate::field::ParticleField;
use crate::surface::Surface;

/// Explicit frame-loop handle around a [`ParticleField`].
///
/// The owning event loop calls [`Animator::frame`] once per redraw;
/// `start`/`stop` make the loop's lifetime explicit, so tests can run a
/// bounded number of frames synchronously instead of fighting an
/// infinitely self-rescheduling callback.
pub struct Animator<R> {
    field: ParticleField<R>,
    running: bool,
}

impl<R: Rng> Animator<R> {
    pub fn new(field: ParticleField<R>) -> Self {
        Self {
            field,
            running: false,
        }
    }

    pub fn start(&mut self) {
        debug!("backdrop animation started");
        self.running = true;
    }

    pub fn stop(&mut self) {
        debug!("backdrop animation stopped");
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one tick against `surface`, or nothing while stopped.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        if !self.running {
            return;
        }
        self.field.tick(surface);
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }
}
