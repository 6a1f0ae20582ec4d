use std::path::Path;

use board::GameBoard;
use config::LifeConfig;
use intent::{Flow, Intent};
use save::SaveError;
use scheduler::StepScheduler;

pub mod board;
pub mod cell;
pub mod config;
pub mod intent;
pub mod pos;
pub mod rule;
pub mod save;
pub mod scheduler;

/// The whole simulation context: board, tempo and play state. Owned by the
/// control loop and handed by reference to input handling and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub scheduler: StepScheduler,
    playing: bool,
    tempo_step: u32,
}

impl Game {
    pub fn new(board: GameBoard, scheduler: StepScheduler) -> Self {
        Self {
            board,
            scheduler,
            playing: false,
            tempo_step: LifeConfig::default().tempo_step,
        }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            tempo_step: config.tempo_step,
            ..Self::new(
                GameBoard::from_config(config),
                StepScheduler::new(config.initial_period),
            )
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn tempo_step(&self) -> u32 {
        self.tempo_step
    }

    pub fn apply(&mut self, intent: Intent) -> Result<Flow, SaveError> {
        match intent {
            Intent::ToggleAt { x, y } => {
                if self.playing {
                    return Ok(Flow::Continue);
                }

                if let Some(index) = self.board.cell_at_screen(x, y) {
                    self.board.toggle_cell_at(index);
                }
            }

            Intent::StepOnce => {
                if !self.playing {
                    self.board.step();
                }
            }

            Intent::TogglePlay => {
                self.playing = !self.playing;
                log::info!(
                    "{} at period {}",
                    if self.playing { "playing" } else { "paused" },
                    self.scheduler.period()
                );
            }

            Intent::Reset => {
                self.playing = false;
                self.board.reset();
                log::info!("board reset");
            }

            Intent::AdjustTempo(delta) => {
                self.scheduler.adjust_period(delta);
                log::debug!("period is now {}", self.scheduler.period());
            }

            Intent::Save(path) => self.save(path)?,
            Intent::Load(path) => self.load(path)?,
            Intent::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Runs the scheduler for one frame. Returns whether a step was taken.
    /// Input must already be applied for this frame; rendering comes after.
    pub fn frame(&mut self) -> bool {
        if !self.playing {
            return false;
        }

        self.scheduler.advance(1);
        if !self.scheduler.is_due() {
            return false;
        }

        self.scheduler.consume_due();
        self.board.step();
        true
    }

    pub fn save<P>(&self, path: P) -> Result<(), SaveError>
    where
        P: AsRef<Path>,
    {
        save::save(&self.board, path)
    }

    /// Replaces the board with a saved one. On any error the current board
    /// is left exactly as it was.
    pub fn load<P>(&mut self, path: P) -> Result<(), SaveError>
    where
        P: AsRef<Path>,
    {
        let flags = save::load(path)?;
        self.board.deserialize_alive_flags(&flags)
    }

    pub fn title(&self) -> String {
        let mut title = format!("Life -- steps: {}", self.board.step_count());

        if self.playing {
            title.push_str(&format!(" -- playing f={}", self.scheduler.period()));
        }

        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game(period: u32) -> Game {
        Game::new(GameBoard::new(4, 4, 10), StepScheduler::new(period))
    }

    #[test]
    fn title_shows_period_only_while_playing() {
        let mut game = small_game(15);
        assert_eq!(game.title(), "Life -- steps: 0");

        game.apply(Intent::TogglePlay).unwrap();
        assert_eq!(game.title(), "Life -- steps: 0 -- playing f=15");
    }

    #[test]
    fn edits_are_ignored_while_playing() {
        let mut game = small_game(15);
        game.apply(Intent::TogglePlay).unwrap();

        game.apply(Intent::ToggleAt { x: 5, y: 5 }).unwrap();
        game.apply(Intent::StepOnce).unwrap();

        assert_eq!(game.board.alive_count(), 0);
        assert_eq!(game.board.step_count(), 0);
    }

    #[test]
    fn toggle_maps_screen_position_to_cell() {
        let mut game = small_game(15);
        game.apply(Intent::ToggleAt { x: 25, y: 12 }).unwrap();

        let index = game.board.index_of([2, 1]).unwrap();
        assert!(game.board.is_alive(index));

        // Off the board, nothing happens.
        game.apply(Intent::ToggleAt { x: 400, y: 0 }).unwrap();
        assert_eq!(game.board.alive_count(), 1);
    }

    #[test]
    fn paused_frames_never_step() {
        let mut game = small_game(0);
        for _ in 0..10 {
            assert!(!game.frame());
        }
        assert_eq!(game.board.step_count(), 0);
    }

    #[test]
    fn playing_steps_once_per_period_plus_one_frames() {
        let mut game = small_game(2);
        game.apply(Intent::TogglePlay).unwrap();

        let steps: Vec<bool> = (0..10).map(|_| game.frame()).collect();
        assert_eq!(
            steps,
            vec![false, false, true, false, false, true, false, false, true, false]
        );
        assert_eq!(game.board.step_count(), 3);
    }

    #[test]
    fn long_pause_does_not_bank_steps() {
        let mut game = small_game(15);
        for _ in 0..100 {
            game.frame();
        }
        assert_eq!(game.scheduler.counter(), 15);

        game.apply(Intent::TogglePlay).unwrap();
        let first_step = (1..=16).find(|_| game.frame());
        assert_eq!(first_step, Some(16));
    }

    #[test]
    fn pausing_mid_countdown_keeps_the_remaining_frames() {
        let mut game = small_game(3);
        game.apply(Intent::TogglePlay).unwrap();
        game.frame();
        game.frame();

        game.apply(Intent::TogglePlay).unwrap();
        for _ in 0..20 {
            assert!(!game.frame());
        }

        game.apply(Intent::TogglePlay).unwrap();
        assert!(!game.frame());
        assert!(game.frame());
    }

    #[test]
    fn reset_stops_playback() {
        let mut game = small_game(0);
        game.apply(Intent::ToggleAt { x: 0, y: 0 }).unwrap();
        game.apply(Intent::TogglePlay).unwrap();
        game.frame();
        game.frame();

        game.apply(Intent::Reset).unwrap();
        assert!(!game.is_playing());
        assert_eq!(game.board.step_count(), 0);
        assert_eq!(game.board.alive_count(), 0);
    }

    #[test]
    fn tempo_adjusts_period() {
        let mut game = small_game(15);
        game.apply(Intent::AdjustTempo(5)).unwrap();
        assert_eq!(game.scheduler.period(), 20);
        game.apply(Intent::AdjustTempo(-30)).unwrap();
        assert_eq!(game.scheduler.period(), 0);
    }

    #[test]
    fn quit_exits() {
        let mut game = small_game(15);
        assert_eq!(game.apply(Intent::StepOnce).unwrap(), Flow::Continue);
        assert_eq!(game.apply(Intent::Quit).unwrap(), Flow::Exit);
    }

    #[test]
    fn from_config_uses_configured_sizes() {
        let config = LifeConfig::default();
        let game = Game::from_config(&config);

        assert_eq!(game.board.width(), 40);
        assert_eq!(game.board.height(), 40);
        assert_eq!(game.scheduler.period(), 15);
        assert_eq!(game.tempo_step(), 5);
    }
}
