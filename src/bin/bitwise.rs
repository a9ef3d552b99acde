//! Bitwise - Action Input Demo
//!
//! Run with: `cargo run --bin bitwise [config.json]`
//!
//! Opens a window and polls the keyboard once per frame tick, logging the
//! actions that are held.
//!
//! Controls:
//! - Left Ctrl: Attack
//! - Space: Jump
//! - Left Shift: Duck
//! - Up arrow: Forward
//! - Down arrow: Back
//! - E: Use
//! - Backspace: Cancel
//!
//! Set `RUST_LOG=bitwise_input=debug` to see every asserted action per tick.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use bitwise_input::{ActionState, DemoConfig, FrameClock, InputPoller, KeyboardSnapshot};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    config: DemoConfig,
    window: Option<Window>,
    keyboard: KeyboardSnapshot,
    poller: InputPoller,
    clock: FrameClock,
    last_logged: Option<ActionState>,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        let clock = FrameClock::new(config.tick_interval(), Instant::now());
        Self {
            config,
            window: None,
            keyboard: KeyboardSnapshot::new(),
            poller: InputPoller::new(),
            clock,
            last_logged: None,
        }
    }

    /// One frame tick: poll the keyboard and report the result.
    fn tick(&mut self) {
        self.poller.update(&self.keyboard);
        let state = *self.poller.state();

        if self.config.log_changes_only && self.last_logged == Some(state) {
            return;
        }
        self.last_logged = Some(state);

        if state.is_empty() {
            log::info!("[tick {}] idle", self.clock.ticks());
        } else {
            let held: Vec<String> = state.held().map(|action| action.to_string()).collect();
            log::info!("[tick {}] {}", self.clock.ticks(), held.join(", "));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.viewport_width,
                self.config.viewport_height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::info!(
                    "window {}x{}, polling every {} ms",
                    self.config.viewport_width,
                    self.config.viewport_height,
                    self.config.tick_interval_ms
                );
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered to an unfocused window
                self.keyboard.release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                self.keyboard
                    .handle_winit_key(key, state == ElementState::Pressed);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.clock.tick_due(now) {
            self.clock.advance(now);
            self.tick();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    // Per-action diagnostics from the library are on by default; RUST_LOG overrides.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,bitwise_input=debug"),
    )
    .format_timestamp_millis()
    .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("config: {e}");
            return Err(e.into());
        }
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
