//! The currently inspected book

use crate::identity::BookId;

/// At most one selected book
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Option<BookId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<BookId> {
        self.current
    }

    pub fn is_selected(&self, id: BookId) -> bool {
        self.current == Some(id)
    }

    /// Select a book, returning the previous selection
    pub fn select(&mut self, id: BookId) -> Option<BookId> {
        self.current.replace(id)
    }

    pub fn clear(&mut self) -> Option<BookId> {
        self.current.take()
    }

    /// Clear the selection only if it points at `id`
    pub fn evict(&mut self, id: BookId) -> bool {
        if self.is_selected(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = Selection::new();
        assert_eq!(selection.select(BookId::new(1)), None);
        assert_eq!(selection.select(BookId::new(2)), Some(BookId::new(1)));
        assert!(selection.is_selected(BookId::new(2)));
    }

    #[test]
    fn test_evict_only_matching() {
        let mut selection = Selection::new();
        selection.select(BookId::new(3));
        assert!(!selection.evict(BookId::new(4)));
        assert_eq!(selection.current(), Some(BookId::new(3)));
        assert!(selection.evict(BookId::new(3)));
        assert_eq!(selection.current(), None);
    }
}
