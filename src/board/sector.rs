use serde::{Deserialize, Serialize};

/// Free-text annotation blocks below the grid. Append-and-remove-last only;
/// at least one sector always exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorList {
    sectors: Vec<String>,
}

impl Default for SectorList {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorList {
    pub fn new() -> Self {
        Self {
            sectors: vec![String::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.sectors
    }

    pub fn add(&mut self) {
        self.sectors.push(String::new());
    }

    /// Remove the most recently added sector; refuses to go below one
    pub fn remove_last(&mut self) -> bool {
        if self.sectors.len() <= 1 {
            return false;
        }
        self.sectors.pop();
        true
    }

    pub fn set_text(&mut self, index: usize, text: String) {
        if let Some(sector) = self.sectors.get_mut(index) {
            *sector = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_sector() {
        assert_eq!(SectorList::new().len(), 1);
    }

    #[test]
    fn test_remove_takes_most_recent() {
        let mut sectors = SectorList::new();
        sectors.set_text(0, "first".to_string());
        sectors.add();
        sectors.set_text(1, "second".to_string());

        assert!(sectors.remove_last());
        assert_eq!(sectors.texts(), ["first".to_string()]);
    }

    #[test]
    fn test_never_drops_below_one() {
        let mut sectors = SectorList::new();
        assert!(!sectors.remove_last());
        assert_eq!(sectors.len(), 1);
    }

    #[test]
    fn test_set_text_out_of_range_is_ignored() {
        let mut sectors = SectorList::new();
        sectors.set_text(5, "nope".to_string());
        assert_eq!(sectors.texts(), [String::new()]);
    }
}
