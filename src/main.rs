use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, warn};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use violet_drift::render::circles::CircleRenderer;
use violet_drift::render::GpuContext;
use violet_drift::{Animator, ParticleField};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("failed to create event loop: {e}");
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let window = match WindowBuilder::new()
        .with_title("Violet Drift")
        .build(&event_loop)
    {
        Ok(window) => Arc::new(window),
        Err(e) => {
            error!("failed to create window: {e}");
            return;
        }
    };

    // No drawable surface means no backdrop; degrade to nothing rather
    // than surfacing a fault.
    let mut gpu = match futures::executor::block_on(GpuContext::new(window.clone())) {
        Ok(gpu) => gpu,
        Err(e) => {
            warn!("backdrop disabled: {e}");
            return;
        }
    };
    let mut circles = CircleRenderer::new(&gpu);

    let size = window.inner_size();
    let field = ParticleField::new(
        size.width.max(1) as f32,
        size.height.max(1) as f32,
        StdRng::from_entropy(),
    );
    let mut animator = Animator::new(field);
    animator.start();

    let result = event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size);
                let (w, h) = (size.width.max(1) as f32, size.height.max(1) as f32);
                circles.set_resolution(gpu.queue(), w, h);
                animator.field_mut().resize(w, h);
            }
            WindowEvent::RedrawRequested => match gpu.surface().get_current_texture() {
                Ok(frame) => {
                    let view = frame
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder =
                        gpu.device()
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("backdrop encoder"),
                            });
                    animator.frame(&mut circles);
                    circles.flush(gpu.queue(), &mut encoder, &view);
                    gpu.queue().submit(std::iter::once(encoder.finish()));
                    frame.present();
                }
                Err(wgpu::SurfaceError::Lost) => {
                    warn!("surface lost, reconfiguring");
                    gpu.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("surface out of memory");
                    elwt.exit();
                }
                Err(e) => warn!("surface error: {e:?}"),
            },
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    });
    if let Err(e) = result {
        error!("event loop error: {e}");
    }
}
