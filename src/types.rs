use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// (row, col) coordinate of a cell in the active grid layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An open quick-color customization popup: which slot it edits and where
/// the triggering gesture happened (client coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalettePopup {
    pub slot: usize,
    pub anchor: Point,
}

impl PalettePopup {
    pub fn new(slot: usize, anchor: Point) -> Self {
        Self { slot, anchor }
    }
}
