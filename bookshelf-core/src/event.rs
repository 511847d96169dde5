//! Lifecycle events published by the orchestrator

use crate::identity::BookId;
use serde::Serialize;

/// Something that happened to the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// A new book was put on the shelf
    BookShelved { id: BookId, title: String },

    /// A book with an existing id overwrote the shelved one
    BookReplaced { id: BookId, title: String },

    /// A book was refused because the shelf is full
    ShelfFull { capacity: usize },

    /// A book was evicted from the shelf
    BookRemoved { id: BookId },

    /// A book's read state flipped
    ReadToggled { id: BookId, read: bool },

    /// The selection moved (or was cleared)
    SelectionChanged { id: Option<BookId> },

    /// Every book was removed
    ShelfCleared,
}

/// Callback registered with [`crate::Library::subscribe`]
pub type Listener = Box<dyn FnMut(&LibraryEvent)>;
