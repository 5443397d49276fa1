//! Application shell
//!
//! Opens a window, owns the renderer and fly camera, and drives a
//! [`Scene`] from the winit event loop: input is routed through the scene's
//! bindings, `update` runs once per redraw, and the scene's meshes are
//! uploaded and drawn.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::audio::AudioError;
use crate::camera::{CameraConfig, FlyCamera};
use crate::config::ConfigError;
use crate::input::{ActionEdge, InputAction, InputState, KeyBindings, KeyCode, MouseButton, Trigger};
use crate::render::{FrameInput, GpuContextConfig, Mesh, RenderError, Renderer};

/// Largest timestep handed to `Scene::update`
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What the shell should do after a scene handles input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneControl {
    Continue,
    Exit,
}

/// A self-contained scene driven by [`run_scene`].
pub trait Scene {
    fn title(&self) -> String;

    /// Initial camera placement
    fn camera(&self) -> CameraConfig;

    fn bindings(&self) -> KeyBindings;

    /// Discrete action edges (held movement is handled by the shell).
    fn handle_action(&mut self, edge: ActionEdge, camera: &FlyCamera) -> SceneControl;

    /// Advance one frame.
    fn update(&mut self, dt: f32, camera: &FlyCamera);

    fn build_world_mesh(&self) -> Mesh;

    /// Overlay geometry in NDC for a `width` x `height` pixel target.
    fn build_ui_mesh(&self, width: f32, height: f32) -> Mesh;

    /// Called after the camera moves each frame.
    fn listener_update(&mut self, _camera: &FlyCamera) {}

    fn clear_color(&self) -> [f32; 4] {
        [0.2, 0.2, 0.2, 1.0]
    }

    /// 1.0 = unlit flat colour
    fn ambient(&self) -> f32 {
        0.35
    }
}

/// Window and GPU settings shared by every scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub gpu: GpuContextConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            gpu: GpuContextConfig::default(),
        }
    }
}

struct AppState {
    window: Arc<Window>,
    renderer: Renderer,
    camera: FlyCamera,
    input: InputState,
    last_frame: Instant,
}

struct App<S: Scene> {
    scene: S,
    config: AppConfig,
    state: Option<AppState>,
    error: Option<AppError>,
}

impl<S: Scene> App<S> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<AppState, AppError> {
        let attrs = WindowAttributes::default()
            .with_title(self.scene.title())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attrs)?);
        let renderer = Renderer::new(Arc::clone(&window), self.config.gpu)?;
        let camera = FlyCamera::from_config(&self.scene.camera());
        let input = InputState::new(self.scene.bindings());

        for (trigger, action) in input.bindings.all_bindings() {
            log::debug!("  {:?} -> {:?}", trigger, action);
        }

        Ok(AppState {
            window,
            renderer,
            camera,
            input,
            last_frame: Instant::now(),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

/// Route a physical trigger through the bindings into the scene.
fn dispatch<S: Scene>(scene: &mut S, state: &mut AppState, trigger: Trigger, pressed: bool) -> SceneControl {
    let Some(edge) = state.input.handle_trigger(trigger, pressed) else {
        return SceneControl::Continue;
    };
    if edge.action().is_held() {
        return SceneControl::Continue;
    }
    if edge == ActionEdge::Released(InputAction::Exit) {
        return SceneControl::Exit;
    }
    scene.handle_action(edge, &state.camera)
}

impl<S: Scene> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Starting scene: {}", self.scene.title());
        match self.init(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let control = match event {
            WindowEvent::CloseRequested => SceneControl::Exit,
            WindowEvent::Resized(size) => {
                state.renderer.resize(size.width, size.height);
                SceneControl::Continue
            }
            WindowEvent::Focused(false) => {
                state.input.release_all();
                SceneControl::Continue
            }
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => {
                    let key = KeyCode::from_winit(code);
                    let pressed = event.state == ElementState::Pressed;
                    dispatch(&mut self.scene, state, Trigger::Key(key), pressed)
                }
                PhysicalKey::Unidentified(_) => SceneControl::Continue,
            },
            WindowEvent::MouseInput { button, state: button_state, .. } => {
                match MouseButton::from_winit(button) {
                    Some(button) => {
                        let pressed = button_state == ElementState::Pressed;
                        dispatch(&mut self.scene, state, Trigger::Mouse(button), pressed)
                    }
                    None => SceneControl::Continue,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                state.input.mouse.set_position(position.x, position.y);
                SceneControl::Continue
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(state.last_frame).as_secs_f32().min(MAX_FRAME_DT);
                state.last_frame = now;

                let (dx, dy) = state.input.mouse.take_delta();
                state.camera.handle_mouse_look(dx as f32, dy as f32);
                state.camera.update_movement(state.input.movement_axes(), dt);
                self.scene.listener_update(&state.camera);
                self.scene.update(dt, &state.camera);

                let (width, height) = state.renderer.gpu.dimensions();
                let world = self.scene.build_world_mesh();
                let ui = self.scene.build_ui_mesh(width as f32, height as f32);
                let frame = FrameInput {
                    view_proj: state.camera.view_projection(state.renderer.gpu.aspect_ratio()),
                    world: &world,
                    ui: &ui,
                    clear_color: self.scene.clear_color(),
                    ambient: self.scene.ambient(),
                };

                if let Err(e) = state.renderer.render(&frame) {
                    self.fail(event_loop, e.into());
                    return;
                }
                state.window.request_redraw();
                SceneControl::Continue
            }
            _ => SceneControl::Continue,
        };

        if control == SceneControl::Exit {
            log::info!("Exiting {}", self.scene.title());
            event_loop.exit();
        }
    }
}

/// Run `scene` until its window closes or it asks to exit.
pub fn run_scene<S: Scene>(scene: S, config: AppConfig) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        scene,
        config,
        state: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
