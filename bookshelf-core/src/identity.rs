//! Book identity and the per-session id allocator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque book identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for BookId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Monotonic id generator scoped to one session.
///
/// Every call to [`IdAllocator::next`] consumes a value, whether or not the book
/// built from it passes validation, so ids are unique but not dense.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> BookId {
        let id = BookId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `next` will return
    pub fn peek(&self) -> BookId {
        BookId(self.next)
    }
}
