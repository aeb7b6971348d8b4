use crate::types::{CellRef, PalettePopup};

use super::grid::GridSet;
use super::page::{PageBook, Snapshot};
use super::palette::QuickColors;
use super::sector::SectorList;
use super::stroke::{Tool, ToolState};

/// Every piece of session state in one struct. The UI dispatches
/// [`BoardAction`]s into [`BoardState::apply`] and renders from the result;
/// nothing mutates outside this controller.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub pages: PageBook,
    pub grids: GridSet,
    pub tools: ToolState,
    pub quick_colors: QuickColors,
    pub sectors: SectorList,
    pub selected: Option<CellRef>,
    pub show_coords: bool,
    pub sidebar_collapsed: bool,
    pub resize_error: Option<String>,
    pub popup: Option<PalettePopup>,
    /// Bumped whenever the drawing surface must re-restore from the stored
    /// snapshot (page switch, clear)
    pub restore_epoch: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    // Pages & drawing
    TextEdited(String),
    PageAdvanced,
    PageRetreated,
    SnapshotStored(Snapshot),
    DrawingCleared,
    ToolToggled(Tool),
    // Grid
    LayerCycled(bool),
    ResizeRequested { rows: String, cols: String },
    CellSelected(CellRef),
    CellEdited(CellRef, String),
    AreaCleared(CellRef, bool),
    DeletedToggled,
    CoordsToggled,
    // Quick colors
    QuickColorApplied(usize),
    SlotRecolored(usize, String),
    PopupOpened(PalettePopup),
    PopupDismissed,
    // Sectors & chrome
    SectorAdded,
    SectorRemoved,
    SectorEdited(usize, String),
    SidebarToggled,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            pages: PageBook::new(),
            grids: GridSet::new(),
            tools: ToolState::default(),
            quick_colors: QuickColors::new(),
            sectors: SectorList::new(),
            selected: None,
            show_coords: false,
            sidebar_collapsed: false,
            resize_error: None,
            popup: None,
            restore_epoch: 0,
        }
    }

    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::TextEdited(text) => self.pages.set_text(text),
            BoardAction::PageAdvanced => {
                self.pages.advance();
                self.restore_epoch += 1;
            }
            BoardAction::PageRetreated => {
                if self.pages.retreat() {
                    self.restore_epoch += 1;
                }
            }
            BoardAction::SnapshotStored(snapshot) => {
                self.pages.set_drawing(Some(snapshot));
            }
            BoardAction::DrawingCleared => {
                self.pages.set_drawing(None);
                self.restore_epoch += 1;
            }
            BoardAction::ToolToggled(tool) => self.tools.toggle(tool),

            BoardAction::LayerCycled(forward) => {
                self.grids.cycle(forward);
                self.selected = None;
                self.resize_error = None;
            }
            BoardAction::ResizeRequested { rows, cols } => self.request_resize(&rows, &cols),
            BoardAction::CellSelected(at) => self.selected = Some(at),
            BoardAction::CellEdited(at, value) => self.edit_cell(at, &value),
            BoardAction::AreaCleared(at, with_neighborhood) => {
                let radius = if with_neighborhood { 1 } else { 0 };
                self.grids.active_mut().clear_area(at, radius);
            }
            BoardAction::DeletedToggled => {
                if let Some(at) = self.selected {
                    self.grids.active_mut().toggle_deleted(at);
                }
            }
            BoardAction::CoordsToggled => self.show_coords = !self.show_coords,

            BoardAction::QuickColorApplied(slot) => self.apply_quick_color(slot),
            BoardAction::SlotRecolored(slot, color) => {
                self.quick_colors.set_color(slot, &color);
                self.popup = None;
            }
            BoardAction::PopupOpened(popup) => self.popup = Some(popup),
            BoardAction::PopupDismissed => self.popup = None,

            BoardAction::SectorAdded => self.sectors.add(),
            BoardAction::SectorRemoved => {
                self.sectors.remove_last();
            }
            BoardAction::SectorEdited(index, text) => self.sectors.set_text(index, text),
            BoardAction::SidebarToggled => self.sidebar_collapsed = !self.sidebar_collapsed,
        }
    }

    /// Validate and apply a resize request from raw form input. Invalid or
    /// out-of-range input leaves the layer unchanged and surfaces a message.
    fn request_resize(&mut self, rows: &str, cols: &str) {
        let parsed = rows
            .trim()
            .parse::<usize>()
            .ok()
            .zip(cols.trim().parse::<usize>().ok());
        let Some((rows, cols)) = parsed else {
            log::warn!("rejected grid resize: non-numeric input {rows:?} x {cols:?}");
            self.resize_error =
                Some("rows and columns must be numbers between 1 and 100".to_string());
            return;
        };
        match self.grids.resize_active(rows, cols) {
            Ok(()) => {
                self.resize_error = None;
                // Drop a selection that fell outside the new bounds
                if let Some(at) = self.selected {
                    if !self.grids.active().contains(at) {
                        self.selected = None;
                    }
                }
            }
            Err(err) => {
                log::warn!("rejected grid resize: {err}");
                self.resize_error = Some(err.to_string());
            }
        }
    }

    /// Text entry into a cell. A typed backquote-digit prefix (`` `1 ``..`` `4 ``)
    /// applies the matching quick-color slot instead and clears the text.
    fn edit_cell(&mut self, at: CellRef, value: &str) {
        if let Some(slot) = quick_color_shorthand(value.trim()) {
            if let Some(cell) = self.grids.active().cell(at) {
                if let Some(background) = self.quick_colors.apply(slot, &cell.background) {
                    self.grids.active_mut().set_background(at, &background);
                }
            }
            self.grids.active_mut().set_value(at, "");
            return;
        }
        self.grids.active_mut().set_value(at, value);
    }

    fn apply_quick_color(&mut self, slot: usize) {
        let Some(at) = self.selected else { return };
        let Some(cell) = self.grids.active().cell(at) else {
            return;
        };
        if let Some(background) = self.quick_colors.apply(slot, &cell.background) {
            self.grids.active_mut().set_background(at, &background);
        }
    }
}

/// Recognize the `` ` ``+digit shorthand typed inside a cell; returns the
/// 0-based quick-color slot
fn quick_color_shorthand(value: &str) -> Option<usize> {
    let mut chars = value.chars();
    if chars.next() != Some('`') {
        return None;
    }
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || !(1..=4).contains(&digit) {
        return None;
    }
    Some(digit as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::{CLEAR_BACKGROUND, DEFAULT_COLS, DEFAULT_ROWS};

    fn at(row: usize, col: usize) -> CellRef {
        CellRef::new(row, col)
    }

    #[test]
    fn test_resize_request_rejects_non_numeric() {
        let mut state = BoardState::new();
        state.apply(BoardAction::ResizeRequested {
            rows: "abc".to_string(),
            cols: "5".to_string(),
        });
        assert!(state.resize_error.is_some());
        assert_eq!(state.grids.active().rows(), DEFAULT_ROWS);
        assert_eq!(state.grids.active().cols(), DEFAULT_COLS);
    }

    #[test]
    fn test_resize_request_rejects_out_of_range() {
        let mut state = BoardState::new();
        state.apply(BoardAction::ResizeRequested {
            rows: "101".to_string(),
            cols: "5".to_string(),
        });
        assert!(state.resize_error.is_some());
        assert_eq!(state.grids.active().rows(), DEFAULT_ROWS);
    }

    #[test]
    fn test_valid_resize_clears_error_and_clamps_selection() {
        let mut state = BoardState::new();
        state.apply(BoardAction::ResizeRequested {
            rows: "x".to_string(),
            cols: "y".to_string(),
        });
        state.apply(BoardAction::CellSelected(at(8, 8)));
        state.apply(BoardAction::ResizeRequested {
            rows: "5".to_string(),
            cols: "5".to_string(),
        });
        assert_eq!(state.resize_error, None);
        assert_eq!(state.selected, None);
        assert_eq!(state.grids.active().rows(), 5);
    }

    #[test]
    fn test_backquote_digit_applies_slot_and_clears_text() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellEdited(at(0, 0), "`2".to_string()));
        let cell = state.grids.active().cell(at(0, 0)).unwrap();
        assert_eq!(cell.value, "");
        assert_eq!(cell.background, state.quick_colors.color(1).unwrap());
    }

    #[test]
    fn test_plain_edit_sets_value() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellEdited(at(0, 0), "`9".to_string()));
        // Not a valid shorthand: stored as text (truncated to two chars)
        assert_eq!(state.grids.active().cell(at(0, 0)).unwrap().value, "`9");
    }

    #[test]
    fn test_quick_color_double_apply_returns_to_white() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellSelected(at(1, 1)));
        state.apply(BoardAction::QuickColorApplied(0));
        state.apply(BoardAction::QuickColorApplied(0));
        assert_eq!(
            state.grids.active().cell(at(1, 1)).unwrap().background,
            CLEAR_BACKGROUND
        );
    }

    #[test]
    fn test_quick_color_without_selection_is_noop() {
        let mut state = BoardState::new();
        state.apply(BoardAction::QuickColorApplied(0));
        assert_eq!(state.grids, GridSet::new());
    }

    #[test]
    fn test_delete_toggles_selected_cell() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellSelected(at(2, 2)));
        state.apply(BoardAction::DeletedToggled);
        assert!(state.grids.active().cell(at(2, 2)).unwrap().deleted);
        state.apply(BoardAction::DeletedToggled);
        assert!(!state.grids.active().cell(at(2, 2)).unwrap().deleted);
    }

    #[test]
    fn test_page_navigation_bumps_restore_epoch() {
        let mut state = BoardState::new();
        state.apply(BoardAction::PageAdvanced);
        assert_eq!(state.restore_epoch, 1);
        state.apply(BoardAction::PageRetreated);
        assert_eq!(state.restore_epoch, 2);
        // Retreat at page 0 moves nothing and must not trigger a restore
        state.apply(BoardAction::PageRetreated);
        assert_eq!(state.restore_epoch, 2);
        assert_eq!(state.pages.current_index(), 0);
    }

    #[test]
    fn test_clear_drawing_drops_snapshot_and_restores() {
        let mut state = BoardState::new();
        state.apply(BoardAction::SnapshotStored(Snapshot::new(
            "data:,x".to_string(),
        )));
        assert!(state.pages.current().drawing.is_some());
        state.apply(BoardAction::DrawingCleared);
        assert_eq!(state.pages.current().drawing, None);
        assert_eq!(state.restore_epoch, 1);
    }

    #[test]
    fn test_layer_cycle_resets_selection_and_error() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellSelected(at(0, 0)));
        state.apply(BoardAction::ResizeRequested {
            rows: "0".to_string(),
            cols: "0".to_string(),
        });
        state.apply(BoardAction::LayerCycled(true));
        assert_eq!(state.selected, None);
        assert_eq!(state.resize_error, None);
        assert_eq!(state.grids.active_index(), 1);
    }

    #[test]
    fn test_area_clear_radius_follows_modifier() {
        let mut state = BoardState::new();
        state.apply(BoardAction::CellEdited(at(1, 1), "a".to_string()));
        state.apply(BoardAction::CellEdited(at(2, 2), "b".to_string()));

        state.apply(BoardAction::AreaCleared(at(2, 2), false));
        assert_eq!(state.grids.active().cell(at(1, 1)).unwrap().value, "a");
        assert_eq!(state.grids.active().cell(at(2, 2)).unwrap().value, "");

        state.apply(BoardAction::AreaCleared(at(2, 2), true));
        assert_eq!(state.grids.active().cell(at(1, 1)).unwrap().value, "");
    }

    #[test]
    fn test_sector_actions_keep_floor_of_one() {
        let mut state = BoardState::new();
        state.apply(BoardAction::SectorAdded);
        state.apply(BoardAction::SectorRemoved);
        state.apply(BoardAction::SectorRemoved);
        assert_eq!(state.sectors.len(), 1);
    }
}
