//! Error types for Bookshelf Core

use crate::identity::BookId;
use crate::presenter::Handle;
use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Top-level error type for all orchestrator operations
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing field: {0}")]
    MissingField(#[from] MissingFieldError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),

    #[error("The bookshelf is full ({capacity} books). Remove one to add another.")]
    CapacityExceeded { capacity: usize },

    #[error("Book {0} is missing required fields and cannot be shelved")]
    Rejected(BookId),
}

/// Bad field value at construction or mutation time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Book id cannot be null")]
    MissingId,

    #[error("Bad {field}: value must be a non-empty string")]
    EmptyField { field: &'static str },

    #[error("Year is required")]
    MissingYear,

    #[error("Not an integer: {value}")]
    NotAnInteger { value: String },

    #[error("Year out of range: {year} (expected 1900..=2040)")]
    YearOutOfRange { year: i64 },
}

/// Read of a required field that was never set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} field is undefined")]
pub struct MissingFieldError {
    pub field: &'static str,
}

/// Id or handle resolution failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("Cannot find book with specified id: {0}")]
    Id(BookId),

    #[error("No book is displayed by handle {0}")]
    Handle(Handle),
}

/// Errors raised by a presentation collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("Book {0} already has a display")]
    DisplayExists(BookId),
}

/// Errors while assembling the session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Shelf capacity must be at least 1")]
    InvalidCapacity,

    #[error("Recent activity limit must be at least 1")]
    InvalidRecentLimit,

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
