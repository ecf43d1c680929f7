//! FAQ accordion state.
//!
//! At most one question is expanded: opening one closes the rest. The outer
//! list toggle hides or shows the whole list and closes every item when it
//! hides.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqState {
    /// Whether the list is visible. Always true when the outer toggle is
    /// disabled.
    pub list_open: bool,
    pub open_item: Option<usize>,
}

impl FaqState {
    /// Initial state; the list starts hidden only behind an outer toggle.
    pub fn new(list_toggle: bool) -> Self {
        Self { list_open: !list_toggle, open_item: None }
    }

    /// Toggle item `index`, closing any other open item.
    pub fn toggle_item(&mut self, index: usize) {
        self.open_item = if self.open_item == Some(index) { None } else { Some(index) };
    }

    pub fn toggle_list(&mut self) {
        self.list_open = !self.list_open;
        if !self.list_open {
            self.open_item = None;
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_item == Some(index)
    }

    /// Close all items. Used when the list is re-rendered for a new language.
    pub fn collapse(&mut self) {
        self.open_item = None;
    }
}

impl Default for FaqState {
    fn default() -> Self {
        Self::new(true)
    }
}
