use anyhow::Context;
use window::{FrameHandler, RendererWindow, RendererWindowConfig};
use winit::event_loop::EventLoop;

pub mod frame;
pub mod sleeper;
pub mod window;

pub struct Renderer<H> {
    event_loop: EventLoop<()>,
    window: RendererWindow<H>,
}

impl<H> Renderer<H>
where
    H: FrameHandler,
{
    pub fn new(config: RendererWindowConfig, handler: H) -> anyhow::Result<Self> {
        Ok(Self {
            event_loop: EventLoop::new().context("Creating event loop")?,
            window: RendererWindow::new(config, handler),
        })
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop
            .run_app(&mut self.window)
            .context("Running event loop")?;
        Ok(())
    }
}
