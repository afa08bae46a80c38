//! Single-choice crop selection with a list cursor

use drcrop_core::Crop;

/// Current crop choice plus the cursor over [`Crop::SELECTABLE`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropSelector {
    selected: Option<Crop>,
    cursor: usize,
}

impl CropSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection. Auto-detect is just another value.
    pub fn select(&mut self, crop: Crop) {
        self.selected = Some(crop);
        if let Some(pos) = Crop::SELECTABLE.iter().position(|c| *c == crop) {
            self.cursor = pos;
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Crop> {
        self.selected
    }

    pub fn is_selected(&self, crop: Crop) -> bool {
        self.selected == Some(crop)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Crop under the cursor
    pub fn highlighted(&self) -> Crop {
        Crop::SELECTABLE[self.cursor.min(Crop::SELECTABLE.len() - 1)]
    }

    pub fn cursor_up(&mut self) {
        let len = Crop::SELECTABLE.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % Crop::SELECTABLE.len();
    }

    /// Select whatever is under the cursor
    pub fn select_highlighted(&mut self) {
        self.select(self.highlighted());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_unset() {
        let selector = CropSelector::new();
        assert_eq!(selector.selected(), None);
        assert_eq!(selector.highlighted(), Crop::Auto);
    }

    #[test]
    fn test_reselect_overwrites() {
        let mut selector = CropSelector::new();
        selector.select(Crop::Tomato);
        selector.select(Crop::Potato);

        assert_eq!(selector.selected(), Some(Crop::Potato));
        assert!(!selector.is_selected(Crop::Tomato));
    }

    #[test]
    fn test_auto_is_a_regular_choice() {
        let mut selector = CropSelector::new();
        selector.select(Crop::Rice);
        selector.select(Crop::Auto);
        assert_eq!(selector.selected(), Some(Crop::Auto));
    }

    #[test]
    fn test_clear() {
        let mut selector = CropSelector::new();
        selector.select(Crop::Apple);
        selector.clear();
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut selector = CropSelector::new();
        selector.cursor_up();
        assert_eq!(selector.highlighted(), Crop::Rice);
        selector.cursor_down();
        assert_eq!(selector.highlighted(), Crop::Auto);
    }

    #[test]
    fn test_select_highlighted_follows_cursor() {
        let mut selector = CropSelector::new();
        selector.cursor_down();
        selector.cursor_down();
        selector.select_highlighted();
        assert_eq!(selector.selected(), Some(Crop::Potato));
    }

    #[test]
    fn test_select_moves_cursor() {
        let mut selector = CropSelector::new();
        selector.select(Crop::Cotton);
        assert_eq!(selector.highlighted(), Crop::Cotton);
    }
}
