use itertools::Itertools;

use crate::{cell::Cell, config::LifeConfig, pos::Position, save::SaveError};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

/// Screen-space rectangle of one cell, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A bounded grid of cells stored row-major: `index = x + y * width`.
///
/// Cells outside the grid don't exist; they are neither wrapped around nor
/// counted as dead neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    step_count: u64,
}

impl GameBoard {
    pub fn new(width: usize, height: usize, cell_size: u32) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");

        Self {
            width,
            height,
            cell_size,
            cells: vec![Cell::default(); width * height],
            step_count: 0,
        }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Self::new(config.columns(), config.rows(), config.cell_size)
    }

    pub fn with_alive_flags(
        width: usize,
        height: usize,
        cell_size: u32,
        flags: &[bool],
    ) -> Result<Self, SaveError> {
        let mut board = Self::new(width, height, cell_size);
        board.deserialize_alive_flags(flags)?;
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_alive(&self, index: usize) -> bool {
        self.cells[index].is_alive()
    }

    pub fn set_alive(&mut self, index: usize, alive: bool) {
        self.cells[index].set_alive(alive);
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kills every cell and zeroes the step counter.
    pub fn reset(&mut self) {
        self.cells = vec![Cell::default(); self.width * self.height];
        self.step_count = 0;
    }

    /// Resets the board, then brings `alive_cells` distinct random cells to life.
    pub fn randomize(&mut self, alive_cells: usize) {
        assert!(
            alive_cells <= self.len(),
            "Board size too small for requested alive cell count"
        );

        self.reset();

        let mut available_indices = (0..self.len()).collect_vec();
        for _ in 0..alive_cells {
            let chosen = rand::random_range(0..available_indices.len());
            let index = available_indices.swap_remove(chosen);
            self.cells[index].set_alive(true);
        }
    }

    /// Panics if `index` is out of range.
    pub fn toggle_cell_at(&mut self, index: usize) {
        self.check_index(index);
        self.cells[index].toggle();
        log::debug!("toggled cell {:?}", self.position_of(index));
    }

    pub fn index_of<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x + y * self.width)
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position {
            x: index % self.width,
            y: index / self.width,
        }
    }

    /// Alive flags of the in-bounds 8-connected neighbors: 3 for a corner,
    /// 5 for an edge and 8 for an interior cell. Panics if `index` is out of
    /// range.
    pub fn neighbors_of(&self, index: usize) -> Vec<bool> {
        self.check_index(index);
        let center = self.position_of(index);

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[dx, dy]| {
                let neighbor_index = self.index_of(center.offset(*dx, *dy)?)?;
                Some(self.cells[neighbor_index].is_alive())
            })
            .collect()
    }

    fn live_neighbor_count(&self, index: usize) -> usize {
        self.neighbors_of(index).into_iter().filter(|alive| *alive).count()
    }

    /// Advances one generation. All cells are evaluated against the current
    /// state before any of them changes.
    pub fn step(&mut self) {
        let live_neighbor_counts = (0..self.len())
            .map(|index| self.live_neighbor_count(index))
            .collect_vec();

        for (cell, count) in self.cells.iter_mut().zip(live_neighbor_counts) {
            cell.evaluate(count);
        }

        for cell in &mut self.cells {
            cell.commit();
        }

        self.step_count += 1;
        log::debug!("step {} done, {} alive", self.step_count, self.alive_count());
    }

    pub fn cell_rect(&self, index: usize) -> CellRect {
        let Position { x, y } = self.position_of(index);

        CellRect {
            x: x as u32 * self.cell_size,
            y: y as u32 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    pub fn cell_rects(&self) -> Vec<CellRect> {
        (0..self.len()).map(|index| self.cell_rect(index)).collect()
    }

    /// Index of the cell under a canvas pixel, if any.
    pub fn cell_at_screen(&self, x: u32, y: u32) -> Option<usize> {
        if self.cell_size == 0 {
            return None;
        }

        self.index_of(Position {
            x: (x / self.cell_size) as usize,
            y: (y / self.cell_size) as usize,
        })
    }

    pub fn serialize_alive_flags(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    /// Replaces the board with the given alive flags. A length mismatch is
    /// rejected and leaves the board untouched.
    pub fn deserialize_alive_flags(&mut self, flags: &[bool]) -> Result<(), SaveError> {
        if flags.len() != self.len() {
            return Err(SaveError::Validation {
                expected: self.len(),
                found: flags.len(),
            });
        }

        self.reset();
        for (cell, alive) in self.cells.iter_mut().zip(flags) {
            cell.set_alive(*alive);
        }

        Ok(())
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.len(),
            "cell index {index} out of range for a {}x{} board",
            self.width,
            self.height
        );
    }
}
