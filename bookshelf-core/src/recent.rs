//! Recently added / recently viewed tracking

use crate::identity::BookId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Default length of each recent-activity list
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// One entry in a recent-activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: BookId,
    pub at: DateTime<Utc>,
}

/// Bounded list of ids, newest first
#[derive(Debug, Clone)]
pub struct RecentList {
    entries: VecDeque<Activity>,
    limit: usize,
}

impl RecentList {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Prepend an id, dropping the oldest entry past the limit.
    /// An id already in the list moves to the front.
    pub fn record(&mut self, id: BookId) {
        self.entries.retain(|entry| entry.id != id);
        self.entries.push_front(Activity { id, at: Utc::now() });
        self.entries.truncate(self.limit);
    }

    pub fn forget(&mut self, id: BookId) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn ids(&self) -> Vec<BookId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The "added" and "viewed" lists kept by the orchestrator
#[derive(Debug, Clone)]
pub struct RecentActivity {
    pub added: RecentList,
    pub viewed: RecentList,
}

impl RecentActivity {
    pub fn new(limit: usize) -> Self {
        Self {
            added: RecentList::new(limit),
            viewed: RecentList::new(limit),
        }
    }

    /// Drop an evicted book from both lists
    pub fn forget(&mut self, id: BookId) {
        self.added.forget(id);
        self.viewed.forget(id);
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.viewed.clear();
    }
}

impl Default for RecentActivity {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_LIMIT)
    }
}
