use std::sync::Arc;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_chains::cli::Cli;
use cube_chains::clock::Clock;
use cube_chains::renderer::ChainRenderer;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<ChainRenderer>,
    clock: Clock,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            clock: Clock::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Cube Chains")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let mut rng = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let renderer = match pollster::block_on(ChainRenderer::new(
            window.clone(),
            &self.cli.segments,
            self.cli.shapes,
            &mut rng,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        // The frame clock starts once setup is done, so the first delta does
        // not include device and shape initialization.
        self.clock = Clock::new();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.advance_and_render(dt) {
                        log::warn!("Render error: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "cube-chains: {} shapes, segments {:?}, seed {:?}",
        cli.shapes,
        cli.segments,
        cli.seed
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
