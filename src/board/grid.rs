use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CellRef;

/// Number of grid layers kept for the whole session
pub const LAYER_COUNT: usize = 5;

/// Inclusive bounds for grid dimensions
pub const MIN_DIM: usize = 1;
pub const MAX_DIM: usize = 100;

pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 9;

/// Background a cell returns to when cleared or color-toggled off
pub const CLEAR_BACKGROUND: &str = "white";

/// Border colors distinguishing the five layers
pub const LAYER_COLORS: [&str; LAYER_COUNT] = ["#d0d0d0", "red", "blue", "green", "purple"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("rows and columns must be between {MIN_DIM} and {MAX_DIM} (got {rows}\u{d7}{cols})")]
    DimensionOutOfRange { rows: usize, cols: usize },
}

/// One grid cell: a short text value, a background color and a deleted flag.
/// Deleting a cell only changes how it renders; value and background are
/// preserved so a second toggle restores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    pub background: String,
    pub deleted: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            value: String::new(),
            background: CLEAR_BACKGROUND.to_string(),
            deleted: false,
        }
    }
}

impl Cell {
    pub fn is_default(&self) -> bool {
        self.value.is_empty() && self.background == CLEAR_BACKGROUND && !self.deleted
    }

    /// Reset value and background, keeping the deleted flag
    pub fn clear(&mut self) {
        self.value.clear();
        self.background = CLEAR_BACKGROUND.to_string();
    }
}

/// A row-major matrix of cells with independent dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayer {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Default for GridLayer {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl GridLayer {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: CellRef) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.contains(at)
            .then(|| &self.cells[at.row * self.cols + at.col])
    }

    pub fn cell_mut(&mut self, at: CellRef) -> Option<&mut Cell> {
        self.contains(at)
            .then(|| &mut self.cells[at.row * self.cols + at.col])
    }

    /// Iterate cells in row-major order together with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellRef::new(i / cols, i % cols), cell))
    }

    /// Set a cell's text value, truncated to two characters.
    /// Out-of-bounds coordinates are ignored.
    pub fn set_value(&mut self, at: CellRef, value: &str) {
        if let Some(cell) = self.cell_mut(at) {
            cell.value = value.chars().take(2).collect();
        }
    }

    pub fn set_background(&mut self, at: CellRef, background: &str) {
        if let Some(cell) = self.cell_mut(at) {
            cell.background = background.to_string();
        }
    }

    /// Flip the deleted flag; value and background survive the round trip
    pub fn toggle_deleted(&mut self, at: CellRef) {
        if let Some(cell) = self.cell_mut(at) {
            cell.deleted = !cell.deleted;
        }
    }

    /// Clear value and background for the target cell and every cell within
    /// `radius` of it, clamped at the grid edges. Radius 0 clears only the
    /// target, radius 1 the full 3x3 neighborhood.
    pub fn clear_area(&mut self, at: CellRef, radius: usize) {
        if !self.contains(at) {
            return;
        }
        let row_lo = at.row.saturating_sub(radius);
        let row_hi = (at.row + radius).min(self.rows - 1);
        let col_lo = at.col.saturating_sub(radius);
        let col_hi = (at.col + radius).min(self.cols - 1);
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                if let Some(cell) = self.cell_mut(CellRef::new(row, col)) {
                    cell.clear();
                }
            }
        }
    }

    /// Reallocate the matrix to the new dimensions. Cells at coordinates
    /// present in both the old and the new bounds keep their state; cells
    /// only in the new bounds start out default. Shrinking discards the
    /// cells outside the new bounds.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(GridError::DimensionOutOfRange { rows, cols });
        }

        let mut cells = vec![Cell::default(); rows * cols];
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                cells[row * cols + col] = self.cells[row * self.cols + col].clone();
            }
        }

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
        Ok(())
    }
}

/// Spreadsheet-style row label: A..Z, then AA, AB, ...
pub fn row_label(mut row: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (row % 26) as u8) as char);
        if row < 26 {
            break;
        }
        row = row / 26 - 1;
    }
    label
}

/// Full coordinate label for a cell, e.g. "C7" (rows lettered, columns 1-based)
pub fn cell_label(at: CellRef) -> String {
    format!("{}{}", row_label(at.row), at.col + 1)
}

/// The five independently-sized layers plus the active-layer pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSet {
    layers: Vec<GridLayer>,
    active: usize,
}

impl Default for GridSet {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSet {
    pub fn new() -> Self {
        Self {
            layers: (0..LAYER_COUNT).map(|_| GridLayer::default()).collect(),
            active: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &GridLayer {
        &self.layers[self.active]
    }

    pub fn active_mut(&mut self) -> &mut GridLayer {
        &mut self.layers[self.active]
    }

    pub fn layer(&self, index: usize) -> Option<&GridLayer> {
        self.layers.get(index)
    }

    /// Border color of the active layer
    pub fn border_color(&self) -> &'static str {
        LAYER_COLORS[self.active]
    }

    /// Switch the active layer one step forward or back, wrapping around
    pub fn cycle(&mut self, forward: bool) {
        self.active = if forward {
            (self.active + 1) % LAYER_COUNT
        } else {
            (self.active + LAYER_COUNT - 1) % LAYER_COUNT
        };
    }

    /// Validate and apply new dimensions for the active layer. On rejection
    /// the layer is left untouched.
    pub fn resize_active(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        self.active_mut().resize(rows, cols)
    }
}
