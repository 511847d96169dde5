//! The Book entity - a validated value holder for one book

use crate::error::{MissingFieldError, ValidationError};
use crate::identity::BookId;
use crate::input::BookInput;
use serde::{Deserialize, Serialize};

/// Earliest accepted publication year
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted publication year
pub const MAX_YEAR: i64 = 2040;

/// A single book on the shelf
///
/// Books built through [`Book::new`] or [`Book::from_input`] always carry every
/// field. The fields are still stored as options because a book deserialized from
/// an incomplete record may lack some of them; reading such a field fails with
/// [`MissingFieldError`] instead of inventing a value. Fields that are present
/// go through the same validation as [`Book::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    id: BookId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<i64>,

    #[serde(default)]
    read: bool,
}

/// Wire shape of a book before validation
#[derive(Deserialize)]
struct BookRecord {
    id: BookId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    year: Option<i64>,
    #[serde(default)]
    read: bool,
}

impl TryFrom<BookRecord> for Book {
    type Error = ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            title: record.title.map(|v| validate_text(v, "title")).transpose()?,
            author: record.author.map(|v| validate_text(v, "author")).transpose()?,
            description: record
                .description
                .map(|v| validate_text(v, "description"))
                .transpose()?,
            genre: record.genre.map(|v| validate_text(v, "genre")).transpose()?,
            year: record.year.map(validate_year).transpose()?,
            read: record.read,
        })
    }
}

impl Book {
    /// Create a fully-populated book, validating every field
    pub fn new(
        id: BookId,
        title: impl ToString,
        author: impl ToString,
        description: impl ToString,
        genre: impl ToString,
        year: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: Some(validate_text(title, "title")?),
            author: Some(validate_text(author, "author")?),
            description: Some(validate_text(description, "description")?),
            genre: Some(validate_text(genre, "genre")?),
            year: Some(validate_year(year)?),
            read: false,
        })
    }

    /// Build a book from raw, nullable form data
    pub fn from_input(input: BookInput, id: Option<BookId>) -> Result<Self, ValidationError> {
        let id = id.ok_or(ValidationError::MissingId)?;
        let title = required_text(input.title, "title")?;
        let author = required_text(input.author, "author")?;
        let description = required_text(input.description, "description")?;
        let genre = required_text(input.genre, "genre")?;
        let year = input
            .year
            .ok_or(ValidationError::MissingYear)?
            .to_integer()?;

        Self::new(id, title, author, description, genre, year)
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> Result<&str, MissingFieldError> {
        present(&self.title, "Title")
    }

    pub fn author(&self) -> Result<&str, MissingFieldError> {
        present(&self.author, "Author")
    }

    pub fn description(&self) -> Result<&str, MissingFieldError> {
        present(&self.description, "Description")
    }

    pub fn genre(&self) -> Result<&str, MissingFieldError> {
        present(&self.genre, "Genre")
    }

    pub fn year(&self) -> Result<i64, MissingFieldError> {
        self.year.ok_or(MissingFieldError { field: "Year" })
    }

    pub fn set_title(&mut self, value: impl ToString) -> Result<(), ValidationError> {
        self.title = Some(validate_text(value, "title")?);
        Ok(())
    }

    pub fn set_author(&mut self, value: impl ToString) -> Result<(), ValidationError> {
        self.author = Some(validate_text(value, "author")?);
        Ok(())
    }

    pub fn set_description(&mut self, value: impl ToString) -> Result<(), ValidationError> {
        self.description = Some(validate_text(value, "description")?);
        Ok(())
    }

    pub fn set_genre(&mut self, value: impl ToString) -> Result<(), ValidationError> {
        self.genre = Some(validate_text(value, "genre")?);
        Ok(())
    }

    pub fn set_year(&mut self, value: i64) -> Result<(), ValidationError> {
        self.year = Some(validate_year(value)?);
        Ok(())
    }

    /// Flip the read state
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Whether every required field is readable
    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.author.is_some()
            && self.description.is_some()
            && self.genre.is_some()
            && self.year.is_some()
    }
}

fn present<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, MissingFieldError> {
    value.as_deref().ok_or(MissingFieldError { field })
}

fn validate_text(value: impl ToString, field: &'static str) -> Result<String, ValidationError> {
    let value = value.to_string();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value)
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    validate_text(value.ok_or(ValidationError::EmptyField { field })?, field)
}

fn validate_year(year: i64) -> Result<i64, ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::YearOutOfRange { year });
    }
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::YearInput;

    fn dune() -> Book {
        Book::new(BookId::new(0), "Dune", "Herbert", "desc", "SciFi", 1965).unwrap()
    }

    #[test]
    fn test_book_creation() {
        let book = dune();
        assert_eq!(book.id(), BookId::new(0));
        assert_eq!(book.title().unwrap(), "Dune");
        assert_eq!(book.author().unwrap(), "Herbert");
        assert_eq!(book.description().unwrap(), "desc");
        assert_eq!(book.genre().unwrap(), "SciFi");
        assert_eq!(book.year().unwrap(), 1965);
        assert!(!book.is_read());
        assert!(book.is_complete());
    }

    #[test]
    fn test_text_fields_are_coerced() {
        let book = Book::new(BookId::new(7), 1984, "Orwell", 'x', true, 1949).unwrap();
        assert_eq!(book.title().unwrap(), "1984");
        assert_eq!(book.description().unwrap(), "x");
        assert_eq!(book.genre().unwrap(), "true");
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = Book::new(BookId::new(0), "Dune", "", "desc", "SciFi", 1965).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "author" });
    }

    #[test]
    fn test_year_bounds() {
        assert!(Book::new(BookId::new(0), "a", "b", "c", "d", 1900).is_ok());
        assert!(Book::new(BookId::new(0), "a", "b", "c", "d", 2040).is_ok());
        assert_eq!(
            Book::new(BookId::new(0), "a", "b", "c", "d", 1899).unwrap_err(),
            ValidationError::YearOutOfRange { year: 1899 }
        );
        assert_eq!(
            Book::new(BookId::new(0), "a", "b", "c", "d", 2041).unwrap_err(),
            ValidationError::YearOutOfRange { year: 2041 }
        );
    }

    #[test]
    fn test_failed_setter_keeps_prior_value() {
        let mut book = dune();
        assert!(book.set_title("").is_err());
        assert_eq!(book.title().unwrap(), "Dune");

        assert!(book.set_year(3000).is_err());
        assert_eq!(book.year().unwrap(), 1965);

        book.set_year(1966).unwrap();
        assert_eq!(book.year().unwrap(), 1966);
    }

    #[test]
    fn test_toggle_read() {
        let mut book = dune();
        book.toggle_read();
        assert!(book.is_read());
        book.toggle_read();
        assert!(!book.is_read());
    }

    #[test]
    fn test_from_input_requires_id() {
        let input = BookInput::new("Dune", "Herbert", "desc", "SciFi", YearInput::Int(1965));
        assert_eq!(
            Book::from_input(input, None).unwrap_err(),
            ValidationError::MissingId
        );
    }

    #[test]
    fn test_from_input_missing_year() {
        let mut input = BookInput::new("Dune", "Herbert", "desc", "SciFi", YearInput::Int(1965));
        input.year = None;
        assert_eq!(
            Book::from_input(input, Some(BookId::new(1))).unwrap_err(),
            ValidationError::MissingYear
        );
    }

    #[test]
    fn test_deserialize_validates_present_fields() {
        let empty_title = r#"{"id": 1, "title": "", "author": "a", "description": "d", "genre": "g", "year": 2000}"#;
        let err = serde_json::from_str::<Book>(empty_title).unwrap_err();
        assert!(err.to_string().contains("Bad title"));

        let late = r#"{"id": 1, "title": "t", "author": "a", "description": "d", "genre": "g", "year": 3000}"#;
        let err = serde_json::from_str::<Book>(late).unwrap_err();
        assert!(err.to_string().contains("Year out of range: 3000"));

        let early = r#"{"id": 1, "title": "t", "author": "a", "description": "d", "genre": "g", "year": 1066}"#;
        assert!(serde_json::from_str::<Book>(early).is_err());
    }

    #[test]
    fn test_from_input_missing_text() {
        let mut input = BookInput::new("Dune", "Herbert", "desc", "SciFi", YearInput::Int(1965));
        input.genre = None;
        assert_eq!(
            Book::from_input(input, Some(BookId::new(1))).unwrap_err(),
            ValidationError::EmptyField { field: "genre" }
        );
    }

    #[test]
    fn test_partial_record_reports_missing_field() {
        let book: Book = serde_json::from_str(r#"{"id": 4, "title": "Dune"}"#).unwrap();
        assert_eq!(book.title().unwrap(), "Dune");
        assert_eq!(book.author().unwrap_err(), MissingFieldError { field: "Author" });
        assert_eq!(book.year().unwrap_err().to_string(), "Year field is undefined");
        assert!(!book.is_complete());
    }
}
