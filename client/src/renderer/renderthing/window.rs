use std::sync::Arc;

use libgame::intent::Flow;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

/// What the window drives once per event and once per frame.
pub trait FrameHandler {
    /// Handles one window event. `cursor` is the canvas pixel under the mouse,
    /// if it's over the canvas.
    fn on_event(&mut self, event: &WindowEvent, cursor: Option<[u32; 2]>) -> Flow;

    /// Advances and draws one frame. All events queued before this frame have
    /// already been handled.
    fn on_frame(&mut self, frame: RenderFrame);

    fn title(&self) -> String;
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
}

pub(super) struct RendererWindow<H> {
    config: RendererWindowConfig,
    handler: H,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    cursor: Option<[u32; 2]>,
    shown_title: String,
}

impl<H> RendererWindow<H>
where
    H: FrameHandler,
{
    pub fn new(config: RendererWindowConfig, handler: H) -> Self {
        Self {
            sleeper: Sleeper::from_fps(config.target_fps),
            shown_title: config.title.clone(),
            config,
            handler,
            resumed_window: None,
            cursor: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(self.config.title.clone())
                    .with_inner_size(window_size)
                    .with_resizable(false),
            )?
        });

        // The pixel buffer always has the canvas size; pixels scales it onto
        // whatever surface size the platform hands us.
        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()?
        };

        Ok(ResumedWindow { window, pixels })
    }
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl<H> ApplicationHandler for RendererWindow<H>
where
    H: FrameHandler,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(resumed_window) => {
                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(e) => {
                log::error!("Creating window: {e:?}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let next_frame = RenderFrame {
                    width: self.config.width,
                    height: self.config.height,
                    buffer: pixels.frame_mut(),
                };

                self.handler.on_frame(next_frame);

                if let Err(e) = pixels.render() {
                    log::error!("Rendering with pixels: {e}");
                    event_loop.exit();
                    return;
                }

                let title = self.handler.title();
                if title != self.shown_title {
                    window.set_title(&title);
                    self.shown_title = title;
                }

                // FIXME: Throttling inside the redraw handler also delays resize handling.
                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Err(e) = pixels.resize_surface(width, height) {
                    log::error!("Resizing surface: {e}");
                }
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = pixels
                    .window_pos_to_pixel((position.x as f32, position.y as f32))
                    .ok()
                    .map(|(x, y)| [x as u32, y as u32]);
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            _ => {}
        }

        if self.handler.on_event(&event, self.cursor) == Flow::Exit {
            event_loop.exit();
        }
    }
}
