//! Platform layer: windowing, event loop, input polling, frame driving.
//!
//! One window, one GPU state, one frame per event-loop redraw. The loop
//! terminates on Escape or on a close request; everything else is a
//! recoverable per-frame concern.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowId};

use asset::mesh::FlatMesh;
use corelib::error::ViewerError;
use corelib::transform::{Action, ModelTransform};
use renderer::GpuState;
use wgpu::SurfaceError;

pub mod input;

use input::InputState;

/// Fixed window size.
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
const WINDOW_TITLE: &str = "wireview";

/// Physical key bound to each transform action.
pub fn key_binding(action: Action) -> KeyCode {
    match action {
        Action::TranslateUp => KeyCode::KeyW,
        Action::TranslateDown => KeyCode::KeyS,
        Action::TranslateLeft => KeyCode::KeyA,
        Action::TranslateRight => KeyCode::KeyD,
        Action::RotateCw => KeyCode::KeyQ,
        Action::RotateCcw => KeyCode::KeyE,
        Action::ScaleUp => KeyCode::KeyR,
        Action::ScaleDown => KeyCode::KeyF,
    }
}

/// Run the viewer until the window closes or Escape is pressed.
/// Blocks for the window's lifetime.
pub fn run_viewer(mesh: FlatMesh, backends: wgpu::Backends) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new().map_err(|e| ViewerError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(mesh, backends);
    event_loop
        .run_app(&mut app)
        .map_err(|e| ViewerError::EventLoop(e.to_string()))?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct ViewerApp {
    mesh: Option<FlatMesh>,
    backends: wgpu::Backends,
    // Declared before `window`: field drop order releases GPU resources
    // before the window goes away.
    gpu: Option<GpuState>,
    window: Option<Arc<Window>>,
    input: InputState,
    transform: ModelTransform,
    error: Option<ViewerError>,
}

impl ViewerApp {
    fn new(mesh: FlatMesh, backends: wgpu::Backends) -> Self {
        Self {
            mesh: Some(mesh),
            backends,
            gpu: None,
            window: None,
            input: InputState::new(),
            transform: ModelTransform::identity(),
            error: None,
        }
    }

    fn fail(&mut self, err: ViewerError, event_loop: &ActiveEventLoop) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    /// One frame: poll held keys, update the transform, draw, schedule the
    /// next redraw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.key_down(KeyCode::Escape) {
            log::info!("Escape pressed. Exiting event loop.");
            event_loop.exit();
            return;
        }

        let input = &self.input;
        self.transform
            .apply_held(|action| input.key_down(key_binding(action)));

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        match gpu.render(self.transform.matrix()) {
            Ok(()) => {}
            Err(err) if GpuState::is_surface_lost(&err) => {
                log::warn!("Surface lost/outdated; reconfiguring.");
                gpu.recreate_surface();
            }
            Err(SurfaceError::OutOfMemory) => {
                self.fail(ViewerError::Gpu("surface out of memory".into()), event_loop);
                return;
            }
            Err(err) => log::warn!("Frame skipped: {err:?}"),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(ViewerError::WindowCreation(err.to_string()), event_loop);
                return;
            }
        };
        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        let Some(mesh) = self.mesh.take() else {
            return;
        };
        match pollster::block_on(GpuState::new(window.clone(), self.backends, &mesh)) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(err) => self.fail(err, event_loop),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.input.handle_key(&event),
            WindowEvent::Resized(new_size) => {
                log::info!("Resized: {}x{}", new_size.width, new_size.height);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_bind_to_documented_keys() {
        assert_eq!(key_binding(Action::TranslateUp), KeyCode::KeyW);
        assert_eq!(key_binding(Action::TranslateDown), KeyCode::KeyS);
        assert_eq!(key_binding(Action::TranslateLeft), KeyCode::KeyA);
        assert_eq!(key_binding(Action::TranslateRight), KeyCode::KeyD);
        assert_eq!(key_binding(Action::RotateCw), KeyCode::KeyQ);
        assert_eq!(key_binding(Action::RotateCcw), KeyCode::KeyE);
        assert_eq!(key_binding(Action::ScaleUp), KeyCode::KeyR);
        assert_eq!(key_binding(Action::ScaleDown), KeyCode::KeyF);
    }

    #[test]
    fn bindings_are_unique_and_leave_escape_free() {
        let codes: Vec<KeyCode> = Action::ALL.iter().map(|a| key_binding(*a)).collect();
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, KeyCode::Escape);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
