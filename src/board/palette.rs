use serde::{Deserialize, Serialize};

use super::grid::CLEAR_BACKGROUND;

pub const SLOT_COUNT: usize = 4;

/// Swatches offered by the customization popup
pub const PALETTE_SWATCHES: [&str; 15] = [
    "#ffdddd", "#fde0e0", "#ffd6d6", "#ffdede", "#dde7ff", "#ddefff", "#dfefff", "#ddffdd",
    "#dfffe0", "#fffacd", "#ffe4b3", "#f0ddff", "#ffd6eb", "#333333", "#ffffff",
];

const DEFAULT_SLOT_COLORS: [&str; SLOT_COUNT] = ["#ffdddd", "#dde7ff", "#ddffdd", "#fffacd"];

/// The four customizable quick-color slots.
///
/// Applying a slot to a background is an on/off toggle, not a stack: applying
/// the same color twice in a row returns the background to white.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickColors {
    slots: [String; SLOT_COUNT],
}

impl Default for QuickColors {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickColors {
    pub fn new() -> Self {
        Self {
            slots: DEFAULT_SLOT_COLORS.map(str::to_string),
        }
    }

    pub fn color(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn colors(&self) -> &[String; SLOT_COUNT] {
        &self.slots
    }

    /// Recolor a slot from the swatch popup. Out-of-range slots are ignored.
    pub fn set_color(&mut self, slot: usize, color: &str) {
        if let Some(current) = self.slots.get_mut(slot) {
            *current = color.to_string();
        }
    }

    /// The background that results from applying `slot` to a cell currently
    /// showing `background`. Same color twice toggles back to white.
    pub fn apply(&self, slot: usize, background: &str) -> Option<String> {
        let color = self.color(slot)?;
        Some(if background == color {
            CLEAR_BACKGROUND.to_string()
        } else {
            color.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_slot_color() {
        let colors = QuickColors::new();
        assert_eq!(colors.apply(0, "white").as_deref(), Some("#ffdddd"));
    }

    #[test]
    fn test_apply_same_color_twice_toggles_to_white() {
        let colors = QuickColors::new();
        let once = colors.apply(2, CLEAR_BACKGROUND).unwrap();
        let twice = colors.apply(2, &once).unwrap();
        assert_eq!(twice, CLEAR_BACKGROUND);
    }

    #[test]
    fn test_apply_different_slot_replaces_not_clears() {
        let colors = QuickColors::new();
        let red = colors.apply(0, CLEAR_BACKGROUND).unwrap();
        let blue = colors.apply(1, &red).unwrap();
        assert_eq!(blue, "#dde7ff");
    }

    #[test]
    fn test_customized_slot_keeps_toggle_semantics() {
        let mut colors = QuickColors::new();
        colors.set_color(3, "#333333");
        let once = colors.apply(3, CLEAR_BACKGROUND).unwrap();
        assert_eq!(once, "#333333");
        assert_eq!(colors.apply(3, &once).as_deref(), Some(CLEAR_BACKGROUND));
    }

    #[test]
    fn test_out_of_range_slot_is_none() {
        let colors = QuickColors::new();
        assert_eq!(colors.apply(SLOT_COUNT, "white"), None);
        assert_eq!(colors.color(99), None);
    }
}
