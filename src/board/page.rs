use serde::{Deserialize, Serialize};

/// Opaque encoded capture of the drawing surface's pixel content.
///
/// The model only stores and compares snapshots; encoding and decoding live
/// behind the canvas component so the format can change without touching
/// anything here. Today the payload is a data-URL raster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of the notes column: its text plus the last drawing capture
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub text: String,
    pub drawing: Option<Snapshot>,
}

/// Ordered list of pages with a current-index pointer.
///
/// The list only ever grows: advancing past the last page lazily appends a
/// blank one, and retreating from page 0 is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBook {
    pages: Vec<Page>,
    current: usize,
}

impl Default for PageBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBook {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based label for the page indicator
    pub fn label(&self) -> String {
        format!("Page {}", self.current + 1)
    }

    pub fn current(&self) -> &Page {
        &self.pages[self.current]
    }

    pub fn set_text(&mut self, text: String) {
        self.pages[self.current].text = text;
    }

    pub fn set_drawing(&mut self, drawing: Option<Snapshot>) {
        self.pages[self.current].drawing = drawing;
    }

    /// Move forward, creating a blank page past the end
    pub fn advance(&mut self) {
        self.current += 1;
        if self.current == self.pages.len() {
            self.pages.push(Page::default());
        }
    }

    /// Move back one page; returns false (and does nothing) at page 0
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_blank_page() {
        let book = PageBook::new();
        assert_eq!(book.len(), 1);
        assert_eq!(book.current_index(), 0);
        assert_eq!(*book.current(), Page::default());
    }

    #[test]
    fn test_advance_past_end_creates_blank_page() {
        let mut book = PageBook::new();
        book.set_text("first".to_string());
        book.advance();
        assert_eq!(book.len(), 2);
        assert_eq!(book.current_index(), 1);
        assert_eq!(book.current().text, "");
    }

    #[test]
    fn test_retreat_at_zero_is_noop() {
        let mut book = PageBook::new();
        assert!(!book.retreat());
        assert_eq!(book.current_index(), 0);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_pages_keep_content_across_navigation() {
        let mut book = PageBook::new();
        book.set_text("page one".to_string());
        book.set_drawing(Some(Snapshot::new("data:image/png;base64,AAAA".to_string())));
        book.advance();
        book.set_text("page two".to_string());

        assert!(book.retreat());
        assert_eq!(book.current().text, "page one");
        assert_eq!(
            book.current().drawing.as_ref().map(Snapshot::as_str),
            Some("data:image/png;base64,AAAA")
        );

        book.advance();
        assert_eq!(book.current().text, "page two");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_advance_into_existing_page_does_not_append() {
        let mut book = PageBook::new();
        book.advance();
        book.retreat();
        book.advance();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_label_is_one_based() {
        let mut book = PageBook::new();
        assert_eq!(book.label(), "Page 1");
        book.advance();
        assert_eq!(book.label(), "Page 2");
    }

    #[test]
    fn test_page_serde_round_trip() {
        let mut book = PageBook::new();
        book.set_text("hello".to_string());
        book.set_drawing(Some(Snapshot::new("data:,x".to_string())));
        let json = serde_json::to_string(&book).unwrap();
        let back: PageBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
