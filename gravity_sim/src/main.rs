//! 2D N-body Gravity Simulation
//!
//! Seeds a handful of random bodies, then once per display refresh advances
//! the universe by one tick and draws it through a canvas-style surface
//! rendered with wgpu.
//!
//! Controls:
//! - Scroll: Zoom in/out
//! - Arrow keys / WASD: Pan camera
//! - 0: Reset camera
//! - Space: Pause/resume simulation
//! - R: Re-seed the universe

mod renderer;

use std::time::{Duration, Instant};

use common::{GraphicsContext, ScreenCamera};
use glam::Vec2;
use gravity_sim::canvas::CanvasSurface;
use gravity_sim::fps::FrameStats;
use gravity_sim::seed::{self, BodyInfo};
use gravity_sim::settings::HostSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::Renderer;
use universe::Universe;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const MAX_BODIES: usize = 2000;
const TELEMETRY_INTERVAL: Duration = Duration::from_secs(1);
const PAN_STEP: f32 = 0.1;

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    universe: Universe,
    bodies: Vec<BodyInfo>,
    canvas: CanvasSurface,
    camera: ScreenCamera,
    stats: FrameStats,
    rng: StdRng,
    body_count: usize,
    paused: bool,
    last_frame: Instant,
    last_report: Instant,
}

impl App {
    fn new(ctx: GraphicsContext, settings: HostSettings) -> Self {
        let renderer = Renderer::new(&ctx, MAX_BODIES);
        let camera = ScreenCamera::new(ctx.size.width as f32, ctx.size.height as f32);
        let canvas = CanvasSurface::new(ctx.height());
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let now = Instant::now();
        let mut app = Self {
            ctx,
            renderer,
            universe: Universe::new(),
            bodies: Vec::new(),
            canvas,
            camera,
            stats: FrameStats::new(),
            rng,
            body_count: settings.body_count,
            paused: false,
            last_frame: now,
            last_report: now,
        };
        app.reseed();
        app
    }

    fn reseed(&mut self) {
        let mut universe = Universe::new();
        match seed::populate(&mut universe, &mut self.rng, self.body_count, self.ctx.height()) {
            Ok(bodies) => {
                self.universe = universe;
                self.bodies = bodies;
            }
            Err(e) => log::error!("failed to seed universe: {e}"),
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera
            .resize(self.ctx.size.width as f32, self.ctx.size.height as f32);
    }

    fn update(&mut self) {
        let now = Instant::now();
        self.stats.record(now - self.last_frame);
        self.last_frame = now;

        if !self.paused {
            self.universe.tick();
        }

        // Clearing every frame is the host's choice; the universe never clears.
        self.canvas.begin_frame(self.ctx.height());
        self.universe.render(&mut self.canvas);

        if now - self.last_report >= TELEMETRY_INTERVAL {
            self.report();
            self.last_report = now;
        }
    }

    fn report(&self) {
        log::info!("{}", self.stats.summary());

        if let Some(fps) = self.stats.latest() {
            self.ctx.window.set_title(&format!(
                "Gravity Simulation - {} bodies - {:.0} fps{}",
                self.universe.len(),
                fps,
                if self.paused { " (paused)" } else { "" }
            ));
        }

        for info in &self.bodies {
            if let Ok(p) = self.universe.get_position(&info.id) {
                log::debug!("{} ({}) at ({:.1}, {:.1})", info.id, info.color, p.x, p.y);
            }
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer
            .update_instances(&self.ctx.queue, self.canvas.instances());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => self.paused = !self.paused,
            KeyCode::KeyR => self.reseed(),
            KeyCode::Digit0 => self.camera.reset(),
            KeyCode::ArrowUp | KeyCode::KeyW => self.camera.pan(Vec2::new(0.0, -PAN_STEP)),
            KeyCode::ArrowDown | KeyCode::KeyS => self.camera.pan(Vec2::new(0.0, PAN_STEP)),
            KeyCode::ArrowLeft | KeyCode::KeyA => self.camera.pan(Vec2::new(-PAN_STEP, 0.0)),
            KeyCode::ArrowRight | KeyCode::KeyD => self.camera.pan(Vec2::new(PAN_STEP, 0.0)),
            _ => {}
        }
    }

    fn handle_scroll(&mut self, delta: f32) {
        self.camera.zoom_by(delta);
    }
}

fn main() {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Gravity Simulation - Rust/wgpu",
        1280,
        720,
    ));

    let settings = HostSettings::from_env();
    log::info!("starting with {:?}", settings);

    let mut app = App::new(ctx, settings);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.resize(size),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                ..
                            },
                        ..
                    } => app.handle_key(key, state),
                    WindowEvent::MouseWheel { delta, .. } => {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y,
                            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                        };
                        app.handle_scroll(scroll);
                    }
                    WindowEvent::RedrawRequested => {
                        app.update();
                        match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::error!("Render error: {:?}", e),
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
