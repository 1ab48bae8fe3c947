//! Domain repository traits - Abstraction over book storage

use crate::domain::entities::{Book, BookHandle};
use crate::domain::errors::DomainError;

/// Contract for an in-memory book store
///
/// Implementations own the books they hold and keep at most one book per
/// ISBN. Nothing here promises a particular lookup complexity, so a
/// hash-indexed store can replace the linear ones without changing callers.
///
/// Stores hold no internal locks. Sharing one across threads needs an
/// external guard such as a `Mutex` around the whole store.
pub trait BookRepository {
    /// Add a book, rejecting an ISBN that is already present
    fn add_book(&mut self, book: Book) -> Result<(), DomainError>;

    /// Remove the book with `isbn` and hand it back to the caller
    fn remove_book(&mut self, isbn: &str) -> Result<Book, DomainError>;

    /// Look up a book; `Ok(None)` when the ISBN is absent
    fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<&Book>, DomainError>;

    /// Look up a book for an availability update
    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Result<Option<BookHandle<'_>>, DomainError>;

    /// All books in insertion order
    fn list_all(&self) -> Box<dyn Iterator<Item = &Book> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, isbn: &str) -> Result<bool, DomainError> {
        Ok(self.find_book_by_isbn(isbn)?.is_some())
    }

    /// Maximum number of books, `None` for unbounded stores
    fn capacity(&self) -> Option<usize> {
        None
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Box<R> {
    fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        (**self).add_book(book)
    }

    fn remove_book(&mut self, isbn: &str) -> Result<Book, DomainError> {
        (**self).remove_book(isbn)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<&Book>, DomainError> {
        (**self).find_book_by_isbn(isbn)
    }

    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Result<Option<BookHandle<'_>>, DomainError> {
        (**self).find_book_by_isbn_mut(isbn)
    }

    fn list_all(&self) -> Box<dyn Iterator<Item = &Book> + '_> {
        (**self).list_all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for &mut R {
    fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        (**self).add_book(book)
    }

    fn remove_book(&mut self, isbn: &str) -> Result<Book, DomainError> {
        (**self).remove_book(isbn)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<&Book>, DomainError> {
        (**self).find_book_by_isbn(isbn)
    }

    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Result<Option<BookHandle<'_>>, DomainError> {
        (**self).find_book_by_isbn_mut(isbn)
    }

    fn list_all(&self) -> Box<dyn Iterator<Item = &Book> + '_> {
        (**self).list_all()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn capacity(&self) -> Option<usize> {
        (**self).capacity()
    }
}
