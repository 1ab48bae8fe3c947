//! Domain entities - Books and the mutable handle stores lend out

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Isbn, LoanState, require_text, require_year};
use serde::Serialize;
use std::ops::Deref;

/// A single-copy book record
///
/// All text fields are non-empty and the publication year is never
/// negative. Every setter re-runs the same rule as the constructor and
/// leaves the book untouched when the rule fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
    author: String,
    year_published: i32,
    available: bool,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, DomainError> {
        let isbn = Isbn::new(isbn)?;
        let title = title.into();
        let author = author.into();
        require_text("Title", &title)?;
        require_text("Author", &author)?;
        require_year(year_published)?;

        Ok(Self {
            isbn,
            title,
            author,
            year_published,
            available: true,
        })
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    pub fn availability(&self) -> bool {
        self.available
    }

    pub fn loan_state(&self) -> LoanState {
        LoanState::from_availability(self.available)
    }

    pub fn set_isbn(&mut self, isbn: impl Into<String>) -> Result<(), DomainError> {
        self.isbn = Isbn::new(isbn)?;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        let title = title.into();
        require_text("Title", &title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<(), DomainError> {
        let author = author.into();
        require_text("Author", &author)?;
        self.author = author;
        Ok(())
    }

    pub fn set_year_published(&mut self, year_published: i32) -> Result<(), DomainError> {
        require_year(year_published)?;
        self.year_published = year_published;
        Ok(())
    }

    /// Unchecked write of the loan flag.
    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }
}

/// Mutable view of a book that is owned by a store
///
/// Reads go through `Deref<Target = Book>`; the only write is the
/// availability flag, so a stored book can never change its ISBN behind
/// the store's back.
#[derive(Debug)]
pub struct BookHandle<'a> {
    book: &'a mut Book,
}

impl<'a> BookHandle<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book }
    }

    pub fn set_availability(&mut self, available: bool) {
        self.book.set_availability(available);
    }
}

impl Deref for BookHandle<'_> {
    type Target = Book;

    fn deref(&self) -> &Book {
        self.book
    }
}
