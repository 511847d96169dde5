//! Presentation capability consumed by the orchestrator
//!
//! The core never renders anything. It asks a [`Presenter`] to create, update and
//! remove display artifacts and only keeps the opaque [`Handle`]s it gets back.

use crate::book::Book;
use crate::error::PresentationError;
use crate::identity::BookId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Opaque reference to a presentation artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(Uuid);

impl Handle {
    /// Mint a fresh handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities a presentation layer offers to the orchestrator
pub trait Presenter {
    /// Produce a display artifact for a book.
    ///
    /// Fails with [`PresentationError::DisplayExists`] when the book already has one.
    fn create_display(&mut self, book: &Book) -> Result<Handle, PresentationError>;

    /// Detach and destroy an artifact; no-op when it is already gone
    fn remove_display(&mut self, handle: Handle);

    /// Reflect the read state of a displayed book
    fn update_read_state(&mut self, handle: Handle, is_read: bool);

    /// Produce the full-description artifact, or the empty sentinel for `None`
    fn request_detail(&mut self, book: Option<&Book>) -> Handle;
}

/// Presenter that renders nothing but still honours the display contract
#[derive(Debug, Default)]
pub struct NullPresenter {
    displays: HashMap<BookId, Handle>,
}

impl NullPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live display artifacts
    pub fn live_displays(&self) -> usize {
        self.displays.len()
    }
}

impl Presenter for NullPresenter {
    fn create_display(&mut self, book: &Book) -> Result<Handle, PresentationError> {
        if self.displays.contains_key(&book.id()) {
            return Err(PresentationError::DisplayExists(book.id()));
        }
        let handle = Handle::new();
        self.displays.insert(book.id(), handle);
        Ok(handle)
    }

    fn remove_display(&mut self, handle: Handle) {
        self.displays.retain(|_, h| *h != handle);
    }

    fn update_read_state(&mut self, _handle: Handle, _is_read: bool) {}

    fn request_detail(&mut self, _book: Option<&Book>) -> Handle {
        Handle::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_presenter_refuses_second_display() {
        let book = Book::new(BookId::new(3), "Dune", "Herbert", "desc", "SciFi", 1965).unwrap();
        let mut presenter = NullPresenter::new();

        let handle = presenter.create_display(&book).unwrap();
        assert_eq!(
            presenter.create_display(&book).unwrap_err(),
            PresentationError::DisplayExists(BookId::new(3))
        );

        presenter.remove_display(handle);
        presenter.remove_display(handle);
        assert_eq!(presenter.live_displays(), 0);
        assert!(presenter.create_display(&book).is_ok());
    }

    #[test]
    fn test_handles_are_distinct() {
        assert_ne!(Handle::new(), Handle::new());
    }
}
