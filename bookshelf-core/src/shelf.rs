//! The Shelf - keyed, bounded store of books

use crate::book::Book;
use crate::error::NotFoundError;
use crate::identity::BookId;
use crate::presenter::Handle;
use std::collections::HashMap;

/// Default number of books a shelf holds
pub const DEFAULT_CAPACITY: usize = 10;

/// Outcome of [`Shelf::add`]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The book took a new slot
    Inserted,

    /// The id was already shelved; the previous book is handed back
    Replaced(Book),

    /// Nothing changed
    Rejected(Rejection),
}

impl Insertion {
    /// Whether the book is now on the shelf
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Insertion::Rejected(_))
    }
}

/// Why a book was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Full { capacity: usize },
    Incomplete,
}

#[derive(Debug)]
struct Slot {
    book: Book,
    handle: Option<Handle>,
}

/// Collection of books keyed by id
#[derive(Debug)]
pub struct Shelf {
    slots: HashMap<BookId, Slot>,
    /// Ids oldest first
    order: Vec<BookId>,
    capacity: usize,
}

impl Default for Shelf {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::new(),
            order: Vec::new(),
            capacity,
        }
    }

    /// Look up a book by id
    pub fn get(&self, id: BookId) -> Result<&Book, NotFoundError> {
        self.slots
            .get(&id)
            .map(|slot| &slot.book)
            .ok_or(NotFoundError::Id(id))
    }

    pub fn get_mut(&mut self, id: BookId) -> Result<&mut Book, NotFoundError> {
        self.slots
            .get_mut(&id)
            .map(|slot| &mut slot.book)
            .ok_or(NotFoundError::Id(id))
    }

    /// Insert a book.
    ///
    /// Incomplete books are refused. An id that is already shelved is overwritten
    /// even when the shelf is full, since the size does not grow. Otherwise a full
    /// shelf refuses the book.
    pub fn add(&mut self, book: Book) -> Insertion {
        if !book.is_complete() {
            tracing::warn!("Refusing incomplete book {}", book.id());
            return Insertion::Rejected(Rejection::Incomplete);
        }

        let id = book.id();
        if let Some(slot) = self.slots.get_mut(&id) {
            tracing::warn!("Book {} is already shelved, overwriting it", id);
            let previous = std::mem::replace(&mut slot.book, book);
            slot.handle = None;
            self.order.retain(|existing| *existing != id);
            self.order.push(id);
            return Insertion::Replaced(previous);
        }

        if self.is_full() {
            return Insertion::Rejected(Rejection::Full {
                capacity: self.capacity,
            });
        }

        self.slots.insert(id, Slot { book, handle: None });
        self.order.push(id);
        Insertion::Inserted
    }

    /// Remove a book, returning it if it was shelved
    pub fn remove(&mut self, id: BookId) -> Option<Book> {
        let slot = self.slots.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(slot.book)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Remember which display artifact belongs to a shelved book
    pub fn attach_handle(&mut self, id: BookId, handle: Handle) -> Result<(), NotFoundError> {
        let slot = self.slots.get_mut(&id).ok_or(NotFoundError::Id(id))?;
        slot.handle = Some(handle);
        Ok(())
    }

    /// Forget the display handle of a shelved book
    pub fn detach_handle(&mut self, id: BookId) -> Option<Handle> {
        self.slots.get_mut(&id).and_then(|slot| slot.handle.take())
    }

    pub fn handle_of(&self, id: BookId) -> Option<Handle> {
        self.slots.get(&id).and_then(|slot| slot.handle)
    }

    /// Reverse lookup from a display handle to the book it shows
    pub fn find_by_handle(&self, handle: Handle) -> Option<BookId> {
        self.slots
            .iter()
            .find(|(_, slot)| slot.handle == Some(handle))
            .map(|(id, _)| *id)
    }

    /// Books, most recently added first
    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.slots.get(id))
            .map(|slot| &slot.book)
    }

    /// Ids, most recently added first
    pub fn ids(&self) -> Vec<BookId> {
        self.order.iter().rev().copied().collect()
    }
}
