//! The lifecycle coordinator
//!
//! [`Library`] is the only component that talks to both the data layer (shelf,
//! selection, ids) and the presentation collaborator. A book moves through
//! `pending input -> validated -> shelved -> (selected) -> removed`, and every step
//! that changes state notifies the subscribed listeners in order.

use crate::book::Book;
use crate::config::{LibraryConfig, SessionContext};
use crate::error::{LibraryError, NotFoundError, Result, ValidationError};
use crate::event::{LibraryEvent, Listener};
use crate::identity::{BookId, IdAllocator};
use crate::input::BookInput;
use crate::presenter::{Handle, Presenter};
use crate::recent::{RecentActivity, RecentList};
use crate::selection::Selection;
use crate::shelf::{Insertion, Rejection, Shelf};

/// A library session bound to one presenter
pub struct Library<P: Presenter> {
    config: LibraryConfig,
    shelf: Shelf,
    ids: IdAllocator,
    selection: Selection,
    recent: RecentActivity,
    detail: Option<Handle>,
    presenter: P,
    listeners: Vec<Listener>,
}

impl<P: Presenter> Library<P> {
    pub fn new(context: SessionContext, presenter: P) -> Self {
        let SessionContext { config, shelf, ids } = context;
        Self {
            config,
            shelf,
            ids,
            selection: Selection::new(),
            recent: RecentActivity::new(config.recent_limit),
            detail: None,
            presenter,
            listeners: Vec::new(),
        }
    }

    /// Register a callback for lifecycle events
    pub fn subscribe(&mut self, listener: impl FnMut(&LibraryEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Validate raw input into a book with a freshly allocated id.
    ///
    /// The id is consumed even when validation fails.
    pub fn create_from_input(&mut self, input: BookInput) -> std::result::Result<Book, ValidationError> {
        let id = self.ids.next();
        Book::from_input(input, Some(id)).inspect_err(|e| {
            tracing::debug!("Book {} failed validation: {}", id, e);
        })
    }

    /// Put a book on the shelf and ask the presenter for its display
    pub fn add_to_shelf(&mut self, book: Book) -> Result<BookId> {
        let id = book.id();
        if !book.is_complete() {
            tracing::warn!("Book {} is incomplete, not shelving it", id);
            return Err(LibraryError::Rejected(id));
        }
        if self.shelf.is_full() && !self.shelf.contains(id) {
            let capacity = self.shelf.capacity();
            tracing::warn!("Shelf is full ({} books), refusing book {}", capacity, id);
            self.emit(LibraryEvent::ShelfFull { capacity });
            return Err(LibraryError::CapacityExceeded { capacity });
        }

        let previous = self.shelf.detach_handle(id);
        if let Some(previous) = previous {
            self.presenter.remove_display(previous);
        }
        let handle = match self.presenter.create_display(&book) {
            Ok(handle) => handle,
            Err(e) => {
                if previous.is_some() {
                    self.restore_display(id);
                }
                return Err(e.into());
            }
        };
        let title = book.title()?.to_string();

        let event = match self.shelf.add(book) {
            Insertion::Inserted => LibraryEvent::BookShelved { id, title },
            Insertion::Replaced(_) => LibraryEvent::BookReplaced { id, title },
            Insertion::Rejected(rejection) => {
                self.presenter.remove_display(handle);
                return Err(match rejection {
                    Rejection::Full { capacity } => LibraryError::CapacityExceeded { capacity },
                    Rejection::Incomplete => LibraryError::Rejected(id),
                });
            }
        };
        self.shelf.attach_handle(id, handle)?;
        self.recent.added.record(id);
        tracing::debug!("Shelved book {} ({} of {})", id, self.shelf.len(), self.shelf.capacity());
        self.emit(event);

        if self.selection.is_selected(id) {
            self.refresh_detail();
        }
        Ok(id)
    }

    /// The form-submission flow: validate, then shelve
    pub fn submit(&mut self, input: BookInput) -> Result<BookId> {
        let book = self.create_from_input(input)?;
        self.add_to_shelf(book)
    }

    /// Inspect a book
    pub fn select(&mut self, id: BookId) -> Result<()> {
        let book = self.shelf.get(id)?;
        self.selection.select(id);
        self.detail = Some(self.presenter.request_detail(Some(book)));
        self.recent.viewed.record(id);
        self.emit(LibraryEvent::SelectionChanged { id: Some(id) });
        Ok(())
    }

    /// Inspect the book shown by a display artifact
    pub fn select_by_handle(&mut self, handle: Handle) -> Result<()> {
        let id = self.resolve(handle)?;
        self.select(id)
    }

    pub fn deselect(&mut self) {
        if self.selection.clear().is_some() {
            self.emit(LibraryEvent::SelectionChanged { id: None });
        }
        self.detail = Some(self.presenter.request_detail(None));
    }

    /// Map a display handle back to the book it shows
    pub fn resolve(&self, handle: Handle) -> std::result::Result<BookId, NotFoundError> {
        self.shelf
            .find_by_handle(handle)
            .ok_or(NotFoundError::Handle(handle))
    }

    /// Evict a book. Returns whether anything was removed; absent ids are a no-op.
    pub fn remove(&mut self, id: BookId) -> bool {
        if let Some(handle) = self.shelf.handle_of(id) {
            self.presenter.remove_display(handle);
        }
        if self.shelf.remove(id).is_none() {
            tracing::debug!("Book {} is not shelved, nothing to remove", id);
            return false;
        }
        self.recent.forget(id);
        self.emit(LibraryEvent::BookRemoved { id });

        if self.selection.evict(id) {
            self.detail = Some(self.presenter.request_detail(None));
            self.emit(LibraryEvent::SelectionChanged { id: None });
        }
        true
    }

    /// Remove whichever book is selected
    pub fn remove_selected(&mut self) -> Option<BookId> {
        let id = self.selection.current()?;
        self.remove(id);
        Some(id)
    }

    /// Flip a book's read state, returning the new state
    pub fn toggle_read(&mut self, id: BookId) -> Result<bool> {
        let book = self.shelf.get_mut(id)?;
        book.toggle_read();
        let read = book.is_read();

        if let Some(handle) = self.shelf.handle_of(id) {
            self.presenter.update_read_state(handle, read);
        }
        if self.selection.is_selected(id) {
            self.refresh_detail();
        }
        self.emit(LibraryEvent::ReadToggled { id, read });
        Ok(read)
    }

    /// Remove every book and display
    pub fn clear(&mut self) {
        for id in self.shelf.ids() {
            if let Some(handle) = self.shelf.handle_of(id) {
                self.presenter.remove_display(handle);
            }
        }
        self.shelf.clear();
        self.recent.clear();
        if self.selection.clear().is_some() {
            self.detail = Some(self.presenter.request_detail(None));
            self.emit(LibraryEvent::SelectionChanged { id: None });
        }
        self.emit(LibraryEvent::ShelfCleared);
    }

    pub fn book(&self, id: BookId) -> std::result::Result<&Book, NotFoundError> {
        self.shelf.get(id)
    }

    /// Shelved books, most recently added first
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.shelf.iter()
    }

    pub fn selected(&self) -> Option<BookId> {
        self.selection.current()
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selection.current().and_then(|id| self.shelf.get(id).ok())
    }

    pub fn recent_added(&self) -> &RecentList {
        &self.recent.added
    }

    pub fn recent_viewed(&self) -> &RecentList {
        &self.recent.viewed
    }

    /// Handle of the last detail artifact the presenter produced
    pub fn detail_handle(&self) -> Option<Handle> {
        self.detail
    }

    pub fn handle_of(&self, id: BookId) -> Option<Handle> {
        self.shelf.handle_of(id)
    }

    pub fn len(&self) -> usize {
        self.shelf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.shelf.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.shelf.capacity()
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Give the shelved book `id` a display again after a failed replacement
    fn restore_display(&mut self, id: BookId) {
        let Ok(book) = self.shelf.get(id) else {
            return;
        };
        match self.presenter.create_display(book) {
            Ok(handle) => {
                if let Err(e) = self.shelf.attach_handle(id, handle) {
                    tracing::warn!("Could not reattach display for book {}: {}", id, e);
                }
            }
            Err(e) => tracing::warn!("Book {} is shelved without a display: {}", id, e),
        }
    }

    fn refresh_detail(&mut self) {
        let book = self
            .selection
            .current()
            .and_then(|id| self.shelf.get(id).ok());
        self.detail = Some(self.presenter.request_detail(book));
    }

    fn emit(&mut self, event: LibraryEvent) {
        tracing::debug!("{:?}", event);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
