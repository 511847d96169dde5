//! Check command implementation

use anyhow::{bail, Result};
use bookshelf_core::{Book, BookId, BookInput};

/// Validate one book entry without shelving it
pub fn check(input: BookInput, json: bool) -> Result<()> {
    match Book::from_input(input, Some(BookId::new(0))) {
        Ok(book) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&book)?);
            } else {
                println!("Valid book");
                for line in crate::terminal::detail(&book) {
                    println!("  {}", line);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Invalid book: {}", e);
            bail!("Validation failed");
        }
    }
}
