use crate::rule;

/// A single grid cell.
///
/// Updates are two-phase: [`Cell::evaluate`] records whether the cell has to
/// flip, [`Cell::commit`] applies it. Every cell of a board must be evaluated
/// before any of them is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    alive: bool,
    pending_change: bool,
}

impl Cell {
    pub fn alive(alive: bool) -> Self {
        Self {
            alive,
            pending_change: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_pending(&self) -> bool {
        self.pending_change
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn evaluate(&mut self, live_neighbors: usize) {
        debug_assert!(live_neighbors <= 8, "a cell has at most 8 neighbors");
        self.pending_change = rule::next_alive(self.alive, live_neighbors) != self.alive;
    }

    pub fn commit(&mut self) {
        if self.pending_change {
            self.pending_change = false;
            self.toggle();
        }
    }
}
