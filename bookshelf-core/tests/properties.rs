//! Property tests for the book and shelf invariants

use bookshelf_core::{Book, BookId, IdAllocator, Shelf, ValidationError, MAX_YEAR, MIN_YEAR};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,24}"
}

fn out_of_range_year() -> impl Strategy<Value = i64> {
    prop_oneof![-10_000i64..MIN_YEAR, (MAX_YEAR + 1)..10_000i64]
}

proptest! {
    #[test]
    fn valid_fields_read_back_unchanged(
        title in text(),
        author in text(),
        description in text(),
        genre in text(),
        year in MIN_YEAR..=MAX_YEAR,
        id in any::<u64>(),
    ) {
        let book = Book::new(BookId::new(id), &title, &author, &description, &genre, year).unwrap();
        prop_assert_eq!(book.id(), BookId::new(id));
        prop_assert_eq!(book.title().unwrap(), title.as_str());
        prop_assert_eq!(book.author().unwrap(), author.as_str());
        prop_assert_eq!(book.description().unwrap(), description.as_str());
        prop_assert_eq!(book.genre().unwrap(), genre.as_str());
        prop_assert_eq!(book.year().unwrap(), year);
    }

    #[test]
    fn numeric_titles_are_coerced(title in any::<i32>()) {
        let book = Book::new(BookId::new(0), title, "a", "b", "c", 2000).unwrap();
        prop_assert_eq!(book.title().unwrap(), title.to_string());
    }

    #[test]
    fn out_of_range_years_fail(year in out_of_range_year()) {
        let err = Book::new(BookId::new(0), "a", "b", "c", "d", year).unwrap_err();
        prop_assert_eq!(err, ValidationError::YearOutOfRange { year });

        let mut book = Book::new(BookId::new(0), "a", "b", "c", "d", 1950).unwrap();
        prop_assert!(book.set_year(year).is_err());
        prop_assert_eq!(book.year().unwrap(), 1950);
    }

    #[test]
    fn toggle_read_twice_is_identity(start_read in any::<bool>()) {
        let mut book = Book::new(BookId::new(0), "a", "b", "c", "d", 2000).unwrap();
        if start_read {
            book.toggle_read();
        }
        let before = book.is_read();
        book.toggle_read();
        book.toggle_read();
        prop_assert_eq!(book.is_read(), before);
    }

    #[test]
    fn shelf_never_exceeds_capacity(capacity in 1usize..16, attempts in 0u64..40) {
        let mut shelf = Shelf::with_capacity(capacity);
        for id in 0..attempts {
            let book = Book::new(BookId::new(id), "a", "b", "c", "d", 2000).unwrap();
            let accepted = shelf.add(book).is_accepted();
            prop_assert_eq!(accepted, (id as usize) < capacity);
        }
        prop_assert_eq!(shelf.len(), capacity.min(attempts as usize));
    }

    #[test]
    fn allocated_ids_are_strictly_increasing(count in 2usize..100) {
        let mut ids = IdAllocator::new();
        let mut previous = ids.next();
        for _ in 1..count {
            let next = ids.next();
            prop_assert!(next > previous);
            previous = next;
        }
    }
}

#[test]
fn boundary_years_accepted() {
    for year in [MIN_YEAR, MAX_YEAR] {
        let mut book = Book::new(BookId::new(0), "a", "b", "c", "d", year).unwrap();
        assert_eq!(book.year().unwrap(), year);
        book.set_year(year).unwrap();
    }
}

#[test]
fn shelf_add_get_remove() {
    let mut shelf = Shelf::new();
    let book = Book::new(BookId::new(1), "Dune", "Herbert", "desc", "SciFi", 1965).unwrap();
    assert!(shelf.add(book.clone()).is_accepted());
    assert_eq!(shelf.get(BookId::new(1)).unwrap(), &book);

    assert!(shelf.remove(BookId::new(1)).is_some());
    assert!(shelf.get(BookId::new(1)).is_err());
    assert!(shelf.remove(BookId::new(1)).is_none());
}
