//! GUI mode implementation (requires "gui" feature).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::Config;
use crate::core::app::EditorApp;
use crate::core::dispatcher::DispatchResult;
use crate::core::input::EditorEvent;
use crate::gui::canvas::Canvas;
use crate::gui::font::FontResource;
use crate::gui::{DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, Renderer};
use crate::run::frame::{DEFAULT_FRAME_RATE, FrameLimiter};

const DEFAULT_WINDOW_SIZE: (u32, u32) = (1920, 1080);
const DEFAULT_WINDOW_TITLE: &str = "Visionary";

/// Run in GUI mode (requires "gui" feature).
pub fn run_gui_mode(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let font_path = PathBuf::from(config.get_string("font_path").unwrap_or(DEFAULT_FONT_PATH));
    let font_size = config
        .get_int_as::<u16>("font_size")
        .map(f32::from)
        .unwrap_or(DEFAULT_FONT_SIZE);

    // A missing or broken font ends the run before any window opens
    let font = FontResource::load(&font_path, font_size)?;
    info!(font = %font_path.display(), font_size, "font loaded");

    let window_size = (
        config
            .get_int_as::<u32>("window_width")
            .unwrap_or(DEFAULT_WINDOW_SIZE.0),
        config
            .get_int_as::<u32>("window_height")
            .unwrap_or(DEFAULT_WINDOW_SIZE.1),
    );
    let title = config
        .get_string("window_title")
        .unwrap_or(DEFAULT_WINDOW_TITLE)
        .to_string();
    let limiter = FrameLimiter::new(
        config
            .get_int_as::<u32>("frame_rate")
            .unwrap_or(DEFAULT_FRAME_RATE),
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = GuiApp {
        window: None,
        renderer: None,
        canvas: Canvas::new(0, 0),
        font,
        editor: EditorApp::initialize_with_config(config),
        modifiers: ModifiersState::default(),
        limiter,
        window_size,
        title,
        dirty: true,
        failure: None,
    };

    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Window attributes with the inner size given in physical pixels
fn window_attributes(title: &str, size: (u32, u32)) -> WindowAttributes {
    Window::default_attributes()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(size.0, size.1))
}

struct GuiApp {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    canvas: Canvas,
    font: FontResource,
    editor: EditorApp,
    modifiers: ModifiersState,
    limiter: FrameLimiter,
    window_size: (u32, u32),
    title: String,
    dirty: bool,
    /// Fatal error that stopped the event loop
    failure: Option<Box<dyn std::error::Error>>,
}

impl ApplicationHandler for GuiApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = window_attributes(&self.title, self.window_size);
        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        match Renderer::new(window.clone()) {
            Ok(renderer) => {
                let (width, height) = renderer.size();
                self.canvas.resize(width, height);
                self.renderer = Some(renderer);
                info!(width, height, "window opened");
            }
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }
        self.window = Some(window);
        self.dirty = true;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.handle_editor_event(event_loop, &EditorEvent::Closed);
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
                self.canvas.resize(size.width, size.height);
                self.handle_editor_event(
                    event_loop,
                    &EditorEvent::Resized(size.width, size.height),
                );
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !crate::gui::input::should_process(event.state) {
                    return;
                }
                let events = crate::gui::input::key_events(
                    event.physical_key,
                    event.text.as_deref(),
                    self.modifiers,
                );
                for editor_event in &events {
                    if !self.handle_editor_event(event_loop, editor_event) {
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.dirty {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }
        if self.limiter.ready(Instant::now()) {
            event_loop.set_control_flow(ControlFlow::Wait);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        } else if let Some(deadline) = self.limiter.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}

impl Drop for GuiApp {
    fn drop(&mut self) {
        // The renderer's surface borrows the window; release it first
        drop(self.renderer.take());
        drop(self.window.take());
    }
}

impl GuiApp {
    /// Feed one event to the editor. Returns false once the loop is exiting.
    fn handle_editor_event(&mut self, event_loop: &ActiveEventLoop, event: &EditorEvent) -> bool {
        match self.editor.handle_event(event) {
            Ok(DispatchResult::Exit) => {
                info!("window closed");
                event_loop.exit();
                false
            }
            Ok(DispatchResult::Success) => {
                self.dirty = true;
                true
            }
            Ok(DispatchResult::NotHandled) => {
                debug!(?event, "event not handled");
                true
            }
            Err(e) => {
                self.fail(event_loop, e.into());
                false
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        self.canvas
            .paint_editor(&self.editor.editor, self.editor.tab_width, &mut self.font);
        match renderer.present(&self.canvas) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, "GPU out of memory".into());
                return;
            }
            Err(e) => {
                debug!("skipped frame: {}", e);
                return;
            }
        }

        self.limiter.mark(Instant::now());
        self.dirty = false;
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Box<dyn std::error::Error>) {
        error!("GUI mode stopped: {}", e);
        self.failure.get_or_insert(e);
        event_loop.exit();
    }
}
