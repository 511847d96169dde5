//! Bookshelf Core Library
//!
//! This crate provides the data model and lifecycle coordination for a personal
//! book library: validated [`Book`] entities, a bounded [`Shelf`], per-session id
//! allocation, selection state and the [`Library`] orchestrator. Rendering is left
//! to an implementation of the [`Presenter`] trait.

pub mod book;
pub mod config;
pub mod error;
pub mod event;
pub mod identity;
pub mod input;
pub mod library;
pub mod presenter;
pub mod recent;
pub mod selection;
pub mod shelf;

pub use book::{Book, MAX_YEAR, MIN_YEAR};
pub use config::{LibraryConfig, SessionContext};
pub use error::{
    ConfigError, LibraryError, MissingFieldError, NotFoundError, PresentationError, Result,
    ValidationError,
};
pub use event::LibraryEvent;
pub use identity::{BookId, IdAllocator};
pub use input::{BookInput, YearInput};
pub use library::Library;
pub use presenter::{Handle, NullPresenter, Presenter};
pub use recent::{Activity, RecentActivity, RecentList};
pub use selection::Selection;
pub use shelf::{Insertion, Rejection, Shelf};
