//! Walkabout - First-Person Camera Control
//!
//! Run with: `cargo run --bin walkabout`
//!
//! Controls:
//! - Mouse: Look around (cursor is captured and re-centered every frame)
//! - WASD: Move
//! - Left Ctrl: Sprint
//! - Space: Jump (hold to keep bouncing)
//! - ESC: Release cursor, click to capture again
//!
//! Set `FIRST_PERSON_RIG_CONFIG` to a JSON file to override rig settings and
//! `RUST_LOG` to change the log filter (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use first_person_rig_engine::{
    CameraRig, CursorAction, CursorManager, FrameRateMeter, KeyCode, PointerHost, RigConfig,
};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{self, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "FIRST_PERSON_RIG_CONFIG";

#[derive(Debug, Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] first_person_rig_engine::ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("window creation failed: {0}")]
    Window(#[from] OsError),
}

/// Translate a winit physical key into the rig's key code.
fn map_key(code: keyboard::KeyCode) -> KeyCode {
    match code {
        keyboard::KeyCode::KeyW => KeyCode::W,
        keyboard::KeyCode::KeyA => KeyCode::A,
        keyboard::KeyCode::KeyS => KeyCode::S,
        keyboard::KeyCode::KeyD => KeyCode::D,
        keyboard::KeyCode::KeyQ => KeyCode::Q,
        keyboard::KeyCode::KeyE => KeyCode::E,
        keyboard::KeyCode::KeyZ => KeyCode::Z,
        keyboard::KeyCode::KeyX => KeyCode::X,
        keyboard::KeyCode::KeyC => KeyCode::C,
        keyboard::KeyCode::ArrowUp => KeyCode::ArrowUp,
        keyboard::KeyCode::ArrowDown => KeyCode::ArrowDown,
        keyboard::KeyCode::ArrowLeft => KeyCode::ArrowLeft,
        keyboard::KeyCode::ArrowRight => KeyCode::ArrowRight,
        keyboard::KeyCode::Space => KeyCode::Space,
        keyboard::KeyCode::ShiftLeft => KeyCode::ShiftLeft,
        keyboard::KeyCode::ShiftRight => KeyCode::ShiftRight,
        keyboard::KeyCode::ControlLeft => KeyCode::ControlLeft,
        keyboard::KeyCode::ControlRight => KeyCode::ControlRight,
        keyboard::KeyCode::AltLeft => KeyCode::AltLeft,
        keyboard::KeyCode::Escape => KeyCode::Escape,
        keyboard::KeyCode::Enter => KeyCode::Enter,
        keyboard::KeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Unknown,
    }
}

/// Pointer view over the winit window for one tick.
struct WinitPointer<'a> {
    window: &'a Window,
    cursor: &'a CursorManager,
    position: &'a mut (f32, f32),
}

impl PointerHost for WinitPointer<'_> {
    fn has_pointer_focus(&self) -> bool {
        self.cursor.has_pointer_focus()
    }

    fn pointer_position(&self, _device: usize) -> (f32, f32) {
        *self.position
    }

    fn window_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn move_pointer(&mut self, _device: usize, x: f32, y: f32) -> bool {
        match self
            .window
            .set_cursor_position(PhysicalPosition::new(x as f64, y as f64))
        {
            Ok(()) => {
                *self.position = (x, y);
                true
            }
            Err(_) => false,
        }
    }
}

struct WalkaboutApp {
    config: RigConfig,
    rig: CameraRig,
    cursor: CursorManager,
    cursor_position: (f32, f32),
    frame_rate: FrameRateMeter,
    window: Option<Window>,
    fatal: Option<HostError>,
}

impl WalkaboutApp {
    fn new(config: RigConfig) -> Self {
        let rig = CameraRig::new(&config);
        Self {
            config,
            rig,
            cursor: CursorManager::new(),
            cursor_position: (0.0, 0.0),
            frame_rate: FrameRateMeter::default(),
            window: None,
            fatal: None,
        }
    }

    /// Push the cursor manager's state to the window.
    fn apply_cursor_state(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        if self.cursor.is_captured() && self.cursor.has_focus() {
            if let Err(err) = window.set_cursor_grab(CursorGrabMode::Confined) {
                debug!(error = %err, "cursor confine unsupported");
            }
        } else if let Err(err) = window.set_cursor_grab(CursorGrabMode::None) {
            debug!(error = %err, "cursor release failed");
        }
        window.set_cursor_visible(self.cursor.should_cursor_be_visible());
        self.cursor.clear_dirty();
    }

    fn handle_key(&mut self, code: keyboard::KeyCode, pressed: bool) {
        let code = map_key(code);
        if code == KeyCode::Escape {
            if pressed && self.cursor.handle_escape() == CursorAction::ApplyState {
                info!("cursor released");
                self.apply_cursor_state();
            }
            return;
        }
        self.rig.handle_key_code(code, pressed);
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let reading = self.frame_rate.record_frame(now);

        let Some(window) = &self.window else {
            return;
        };

        let mut pointer = WinitPointer {
            window,
            cursor: &self.cursor,
            position: &mut self.cursor_position,
        };
        self.rig.tick(&mut pointer);

        if let Some(fps) = reading {
            let position = self.rig.transform().position();
            window.set_title(&format!(
                "{} | FPS: {:.0} | ({:.1}, {:.1}, {:.1}) | {}",
                self.config.window.title,
                fps,
                position.x,
                position.y,
                position.z,
                self.cursor.status_message()
            ));
        }
    }
}

impl ApplicationHandler for WalkaboutApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.cursor_position = ((size.width / 2) as f32, (size.height / 2) as f32);
                info!(width = size.width, height = size.height, "window created");
                self.window = Some(window);
                self.apply_cursor_state();
            }
            Err(err) => {
                self.fatal = Some(err.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(ticks = self.rig.ticks(), "close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if self.cursor.handle_left_click() == CursorAction::ApplyState {
                    info!("cursor captured");
                    self.apply_cursor_state();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x as f32, position.y as f32);
            }
            WindowEvent::CursorEntered { .. } => {
                if self.cursor.handle_cursor_enter() == CursorAction::ApplyState {
                    self.apply_cursor_state();
                }
            }
            WindowEvent::CursorLeft { .. } => self.cursor.handle_cursor_leave(),
            WindowEvent::Focused(focused) => {
                if !focused {
                    self.rig.release_all_keys();
                }
                if self.cursor.handle_focus(focused) == CursorAction::ApplyState {
                    self.apply_cursor_state();
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if self.cursor.is_dirty() {
            self.apply_cursor_state();
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn load_config() -> Result<RigConfig, HostError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading rig config");
            Ok(RigConfig::load(&path)?)
        }
        None => Ok(RigConfig::default()),
    }
}

fn run() -> Result<(), HostError> {
    let config = load_config()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = WalkaboutApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("walkabout starting: WASD move, Left Ctrl sprint, Space jump, ESC release cursor");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "walkabout exited with error");
            ExitCode::FAILURE
        }
    }
}
