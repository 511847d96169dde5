//! Text presenter: renders shelf cards and the detail view as lines of text

use bookshelf_core::{Book, BookId, Handle, MissingFieldError, PresentationError, Presenter};
use std::collections::HashMap;

/// Placeholder shown in place of a field a book does not carry
const MISSING: &str = "<missing>";

/// Presenter that queues rendered lines for the session to print
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    cards: HashMap<Handle, BookId>,
    pending: Vec<String>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every line rendered since the last call
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    fn id_for(&self, handle: Handle) -> Option<BookId> {
        self.cards.get(&handle).copied()
    }
}

impl Presenter for TerminalPresenter {
    fn create_display(&mut self, book: &Book) -> Result<Handle, PresentationError> {
        if self.cards.values().any(|id| *id == book.id()) {
            return Err(PresentationError::DisplayExists(book.id()));
        }
        let handle = Handle::new();
        self.cards.insert(handle, book.id());
        self.pending.push(format!("shelved {}", card(book)));
        Ok(handle)
    }

    fn remove_display(&mut self, handle: Handle) {
        if let Some(id) = self.cards.remove(&handle) {
            self.pending.push(format!("removed #{}", id));
        }
    }

    fn update_read_state(&mut self, handle: Handle, is_read: bool) {
        if let Some(id) = self.id_for(handle) {
            self.pending
                .push(format!("#{} marked as {}", id, status(is_read).to_lowercase()));
        }
    }

    fn request_detail(&mut self, book: Option<&Book>) -> Handle {
        match book {
            Some(book) => self.pending.extend(detail(book)),
            None => self.pending.push("Select A Book".to_string()),
        }
        Handle::new()
    }
}

/// One-line shelf card: `#id [genre] title - author (year) status`
pub fn card(book: &Book) -> String {
    format!(
        "#{} [{}] {} - {} ({}) {}",
        book.id(),
        text(book.genre()),
        text(book.title()),
        text(book.author()),
        year(book),
        if book.is_read() { "[read]" } else { "[unread]" }
    )
}

/// Full description, one heading and one value per pair of lines
pub fn detail(book: &Book) -> Vec<String> {
    let sections = [
        ("Title", text(book.title()).to_string()),
        ("Description", text(book.description()).to_string()),
        ("Author", text(book.author()).to_string()),
        ("Genre", text(book.genre()).to_string()),
        ("Published Year", year(book)),
        ("Status", status(book.is_read()).to_string()),
    ];

    sections
        .into_iter()
        .flat_map(|(heading, value)| [heading.to_string(), format!("  {}", value)])
        .collect()
}

fn text(value: Result<&str, MissingFieldError>) -> &str {
    value.unwrap_or(MISSING)
}

fn year(book: &Book) -> String {
    book.year()
        .map(|y| y.to_string())
        .unwrap_or_else(|_| MISSING.to_string())
}

fn status(is_read: bool) -> &'static str {
    if is_read {
        "Read"
    } else {
        "Unread"
    }
}
