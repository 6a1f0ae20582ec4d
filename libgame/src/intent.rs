use std::path::PathBuf;

/// A discrete user action, already decoupled from the input device that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Toggle the cell under a canvas pixel. Ignored while playing.
    ToggleAt { x: u32, y: u32 },
    /// Advance exactly one generation. Ignored while playing.
    StepOnce,
    TogglePlay,
    /// Stop playback and clear the board.
    Reset,
    /// Change the number of frames between steps.
    AdjustTempo(i64),
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

/// Whether the control loop keeps going after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
