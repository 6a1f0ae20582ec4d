mod input;
mod renderthing;

use input::InputMapper;
use libgame::{Game, config::LifeConfig, intent::Flow};
use renderthing::{
    Renderer,
    frame::{Color, RenderFrame},
    window::{FrameHandler, RendererWindowConfig},
};
use winit::event::WindowEvent;

const DEAD_COLOR: Color = [60, 60, 60, 255];
const ALIVE_COLOR: Color = [220, 220, 220, 255];
const GRID_LINE_COLOR: Color = [33, 33, 33, 255];

pub fn run(game: Game, config: LifeConfig) -> anyhow::Result<()> {
    let window_config = RendererWindowConfig {
        title: game.title(),
        width: config.world_width,
        height: config.world_height,
        target_fps: config.target_fps,
    };

    let view = LifeView {
        game,
        config,
        input: InputMapper::default(),
    };

    Renderer::new(window_config, view)?.run()
}

/// Owns the simulation for the lifetime of the window.
struct LifeView {
    game: Game,
    config: LifeConfig,
    input: InputMapper,
}

impl FrameHandler for LifeView {
    fn on_event(&mut self, event: &WindowEvent, cursor: Option<[u32; 2]>) -> Flow {
        let Some(intent) = self.input.map(event, cursor, &self.config) else {
            return Flow::Continue;
        };

        match self.game.apply(intent) {
            Ok(flow) => flow,
            Err(e) => {
                // The board is untouched on failure; keep running.
                log::error!("{:?}", anyhow::Error::from(e));
                Flow::Continue
            }
        }
    }

    fn on_frame(&mut self, mut frame: RenderFrame) {
        self.game.frame();
        draw(&self.game, &mut frame);
    }

    fn title(&self) -> String {
        self.game.title()
    }
}

fn draw(game: &Game, frame: &mut RenderFrame) {
    let board = &game.board;

    // Covers any strip the cells leave when the canvas isn't a multiple of the cell size.
    frame.fill(GRID_LINE_COLOR);

    for (index, rect) in board.cell_rects().into_iter().enumerate() {
        let color = if board.is_alive(index) {
            ALIVE_COLOR
        } else {
            DEAD_COLOR
        };

        frame.draw_square(rect.x, rect.y, rect.width, rect.height, color);
    }

    let spacing = board.cell_size().max(1) as usize;

    for x in (0..frame.width).step_by(spacing) {
        frame.draw_vline(x, GRID_LINE_COLOR);
    }

    for y in (0..frame.height).step_by(spacing) {
        frame.draw_hline(y, GRID_LINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use libgame::{board::GameBoard, scheduler::StepScheduler};

    use super::*;
    use super::renderthing::frame::PIXEL_BITS;

    #[test]
    fn draws_cells_and_grid_lines() {
        let mut game = Game::new(GameBoard::new(2, 2, 4), StepScheduler::new(15));
        game.board.toggle_cell_at(3);

        let mut buffer = vec![0; 8 * 8 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 8,
            height: 8,
            buffer: &mut buffer,
        };

        draw(&game, &mut frame);

        assert_eq!(frame.pixel(0, 0), Some(&GRID_LINE_COLOR));
        assert_eq!(frame.pixel(4, 2), Some(&GRID_LINE_COLOR));
        assert_eq!(frame.pixel(1, 1), Some(&DEAD_COLOR));
        assert_eq!(frame.pixel(6, 6), Some(&ALIVE_COLOR));
    }
}
