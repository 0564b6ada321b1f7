#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod editor;
mod error;
mod input;
mod render;

pub use editor::{Brush, Command, Editor, Mode, Redraw};
pub use error::{AppError, log_error};
pub use input::{brush_for_button, command_for_key, tile_at, window_size_to_grid_size};
pub use render::{BACKGROUND_RGBA, TileCanvas};

use life_grid::{EditableWorld, GridSize, Loc};
use log::info;
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub title: String,
    pub window_size: PhysicalSize<u32>,
    pub tile_size: u32,
    pub step_interval: Duration,
}

impl EditorConfig {
    fn grid_size(&self, window_size: PhysicalSize<u32>) -> Result<GridSize, AppError> {
        let grid_size =
            window_size_to_grid_size(window_size.width, window_size.height, self.tile_size);
        if grid_size.is_empty() {
            Err(AppError::WindowTooSmall {
                width: window_size.width,
                height: window_size.height,
                tile_size: self.tile_size,
            })
        } else {
            Ok(grid_size)
        }
    }
}

/// Opens the editor window and runs it until the user closes it. `build_editor` is called
/// once, with the grid size that fits the window.
pub fn animate<W, F>(config: EditorConfig, build_editor: F) -> Result<(), AppError>
where
    W: EditableWorld,
    F: Fn(GridSize) -> Editor<W>,
{
    config.grid_size(config.window_size)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(config, build_editor);
    event_loop.run_app(&mut handler)?;
    handler.error.map_or(Ok(()), Err)
}

struct App<W: EditableWorld> {
    editor: Editor<W>,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    canvas: TileCanvas,
    title: String,
    tile_size: u32,
    step_interval: Duration,
    cursor: Option<PhysicalPosition<f64>>,
    next_update: Instant,
}

impl<W: EditableWorld> App<W> {
    fn new<F>(
        event_loop: &ActiveEventLoop,
        config: &EditorConfig,
        build_editor: &F,
    ) -> Result<Self, AppError>
    where
        F: Fn(GridSize) -> Editor<W>,
    {
        let window = Arc::new(Self::build_window(event_loop, config)?);
        let window_size = window.inner_size();
        let grid_size = config.grid_size(window_size)?;
        info!(
            "{}x{} window holds {} columns by {} rows",
            window_size.width, window_size.height, grid_size.width, grid_size.height
        );

        let editor = build_editor(grid_size);
        let pixels = Self::build_pixels(&window)?;
        Ok(Self {
            editor,
            window,
            pixels,
            canvas: TileCanvas::new(window_size.width, window_size.height, config.tile_size),
            title: config.title.clone(),
            tile_size: config.tile_size,
            step_interval: config.step_interval,
            cursor: None,
            next_update: Instant::now(),
        })
    }

    fn build_window(event_loop: &ActiveEventLoop, config: &EditorConfig) -> Result<Window, AppError> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size)
            .with_resizable(false)
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(window: &Arc<Window>) -> Result<Pixels<'static>, AppError> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?;
        Ok(pixels)
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_command(&mut self, command: Command) {
        let previous_mode = self.editor.mode();
        self.editor.apply(command);
        if self.editor.mode() == Mode::Running && previous_mode == Mode::Idle {
            self.next_update = Instant::now();
        }
        self.window.set_title(&format!(
            "{} [{}, generation {}]",
            self.title,
            self.editor.mode(),
            self.editor.generation()
        ));
    }

    fn on_time_step(&mut self) {
        self.editor.tick();

        while self.next_update < Instant::now() {
            self.next_update += self.step_interval;
        }
    }

    fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
        let loc = self.cursor_tile();
        self.editor.drag(loc);
    }

    fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let Some(brush) = brush_for_button(button) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                let loc = self.cursor_tile();
                self.editor.press(brush, loc);
            }
            ElementState::Released => self.editor.release(brush),
        }
    }

    fn cursor_tile(&self) -> Option<Loc> {
        let position = self.cursor?;
        let pixel = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()?;
        tile_at(pixel, self.tile_size, self.editor.world().grid().size())
    }

    fn request_redraw_if_needed(&self) {
        if self.editor.needs_redraw() {
            self.window.request_redraw();
        }
    }

    fn control_flow(&self) -> ControlFlow {
        match self.editor.mode() {
            Mode::Running => ControlFlow::WaitUntil(self.next_update),
            Mode::Idle => ControlFlow::Wait,
        }
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        let redraw = self.editor.take_redraw();
        let grid = self.editor.world().grid();
        let frame = self.pixels.frame_mut();
        match redraw {
            Redraw::Nothing => {}
            Redraw::Cells(locs) => self.canvas.paint_cells(frame, grid, &locs),
            Redraw::Full => self.canvas.paint_grid(frame, grid),
        }
        self.pixels.render()
    }
}

struct AppEventHandler<W, F>
where
    W: EditableWorld,
    F: Fn(GridSize) -> Editor<W>,
{
    config: EditorConfig,
    build_editor: F,
    app: Option<App<W>>,
    error: Option<AppError>,
}

impl<W, F> AppEventHandler<W, F>
where
    W: EditableWorld,
    F: Fn(GridSize) -> Editor<W>,
{
    fn new(config: EditorConfig, build_editor: F) -> Self {
        Self {
            config,
            build_editor,
            app: None,
            error: None,
        }
    }
}

impl<W, F> ApplicationHandler for AppEventHandler<W, F>
where
    W: EditableWorld,
    F: Fn(GridSize) -> Editor<W>,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
            app.request_redraw_if_needed();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            match App::new(event_loop, &self.config, &self.build_editor) {
                Ok(mut app) => {
                    app.on_create();
                    self.app = Some(app);
                }
                Err(err) => {
                    self.error = Some(err);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else if let Some(command) = command_for_key(code) {
                    app.on_command(command);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.on_cursor_moved(position);
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                app.on_mouse_input(state, button);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    log_error("pixels.render", err);
                    event_loop.exit();
                    return;
                }
            }
            _ => (),
        }
        app.request_redraw_if_needed();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            event_loop.set_control_flow(app.control_flow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tile_size: u32) -> EditorConfig {
        EditorConfig {
            title: "test".to_string(),
            window_size: PhysicalSize::new(500, 500),
            tile_size,
            step_interval: Duration::from_millis(16),
        }
    }

    #[test]
    fn zero_tile_size_is_reported_as_too_small() {
        let config = config(0);
        let result = config.grid_size(config.window_size);
        assert!(matches!(
            result,
            Err(AppError::WindowTooSmall {
                width: 500,
                height: 500,
                tile_size: 0,
            })
        ));
    }

    #[test]
    fn window_narrower_than_a_tile_is_too_small() {
        let config = config(10);
        assert!(config.grid_size(PhysicalSize::new(9, 500)).is_err());
        assert_eq!(
            config.grid_size(config.window_size).ok(),
            Some(GridSize::new(50, 50))
        );
    }
}
