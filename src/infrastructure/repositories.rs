//! Infrastructure implementations of the book repository trait

use crate::domain::entities::{Book, BookHandle};
use crate::domain::errors::DomainError;
use crate::domain::repositories::BookRepository;
use crate::domain::value_objects::require_isbn_key;

/// Upper bound used by [`FixedCapacityBookRepository::new`]
pub const DEFAULT_CAPACITY: usize = 100;

fn duplicate_isbn(isbn: &str) -> DomainError {
    DomainError::invalid_argument(format!("A book with ISBN {isbn} already exists"))
}

fn missing_isbn(isbn: &str) -> DomainError {
    DomainError::invalid_argument(format!("The book with ISBN {isbn} does not exist"))
}

/// Growable store backed by a `Vec`
#[derive(Debug, Default, Clone)]
pub struct VecBookRepository {
    books: Vec<Book>,
}

impl VecBookRepository {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|book| book.isbn() == isbn)
    }
}

impl BookRepository for VecBookRepository {
    fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        let isbn = book.isbn().as_str();
        require_isbn_key(isbn)?;
        if self.position(isbn).is_some() {
            return Err(duplicate_isbn(isbn));
        }

        log::debug!("Adding book {isbn} to dynamic store");
        self.books.push(book);
        Ok(())
    }

    fn remove_book(&mut self, isbn: &str) -> Result<Book, DomainError> {
        require_isbn_key(isbn)?;
        let index = self.position(isbn).ok_or_else(|| missing_isbn(isbn))?;

        log::debug!("Removing book {isbn} from dynamic store");
        Ok(self.books.remove(index))
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<&Book>, DomainError> {
        require_isbn_key(isbn)?;
        log::trace!("Looking up {isbn} in {} books", self.books.len());
        Ok(self.books.iter().find(|book| book.isbn() == isbn))
    }

    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Result<Option<BookHandle<'_>>, DomainError> {
        require_isbn_key(isbn)?;
        Ok(self
            .books
            .iter_mut()
            .find(|book| book.isbn() == isbn)
            .map(BookHandle::new))
    }

    fn list_all(&self) -> Box<dyn Iterator<Item = &Book> + '_> {
        Box::new(self.books.iter())
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

/// Store backed by a pre-sized slot array and a logical size counter
///
/// Slots `0..size` are always occupied and slots `size..` are always
/// empty. Removal shifts the trailing books one slot to the left and
/// clears the slot that falls off the end.
#[derive(Debug, Clone)]
pub struct FixedCapacityBookRepository {
    slots: Box<[Option<Book>]>,
    size: usize,
}

impl FixedCapacityBookRepository {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            size: 0,
        }
    }

    fn occupied(&self) -> impl Iterator<Item = &Book> + '_ {
        self.slots[..self.size].iter().flatten()
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.occupied().position(|book| book.isbn() == isbn)
    }
}

impl Default for FixedCapacityBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for FixedCapacityBookRepository {
    fn add_book(&mut self, book: Book) -> Result<(), DomainError> {
        let isbn = book.isbn().as_str();
        require_isbn_key(isbn)?;
        if self.size >= self.slots.len() {
            return Err(DomainError::capacity_exceeded(self.slots.len()));
        }
        if self.position(isbn).is_some() {
            return Err(duplicate_isbn(isbn));
        }

        log::debug!(
            "Adding book {isbn} to fixed store ({}/{})",
            self.size + 1,
            self.slots.len()
        );
        self.slots[self.size] = Some(book);
        self.size += 1;
        Ok(())
    }

    fn remove_book(&mut self, isbn: &str) -> Result<Book, DomainError> {
        require_isbn_key(isbn)?;
        let index = self.position(isbn).ok_or_else(|| missing_isbn(isbn))?;
        let removed = self.slots[index].take().ok_or_else(|| missing_isbn(isbn))?;

        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;

        log::debug!("Removed book {isbn} from fixed store");
        Ok(removed)
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<&Book>, DomainError> {
        require_isbn_key(isbn)?;
        log::trace!("Looking up {isbn} in {} slots", self.size);
        Ok(self.occupied().find(|book| book.isbn() == isbn))
    }

    fn find_book_by_isbn_mut(&mut self, isbn: &str) -> Result<Option<BookHandle<'_>>, DomainError> {
        require_isbn_key(isbn)?;
        Ok(self.slots[..self.size]
            .iter_mut()
            .flatten()
            .find(|book| book.isbn() == isbn)
            .map(BookHandle::new))
    }

    fn list_all(&self) -> Box<dyn Iterator<Item = &Book> + '_> {
        Box::new(self.occupied())
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;

    fn book(isbn: &str) -> Book {
        Book::new(isbn, format!("Title {isbn}"), "Author", 2000).unwrap()
    }

    fn isbns(repository: &dyn BookRepository) -> Vec<String> {
        repository
            .list_all()
            .map(|book| book.isbn().to_string())
            .collect()
    }

    #[test]
    fn vec_store_preserves_insertion_order() {
        let mut repository = VecBookRepository::new();
        for isbn in ["003", "001", "002"] {
            repository.add_book(book(isbn)).unwrap();
        }
        assert_eq!(isbns(&repository), ["003", "001", "002"]);
        assert_eq!(repository.capacity(), None);
    }

    #[test]
    fn fixed_store_shifts_left_on_remove() {
        let mut repository = FixedCapacityBookRepository::with_capacity(4);
        for isbn in ["001", "002", "003", "004"] {
            repository.add_book(book(isbn)).unwrap();
        }

        let removed = repository.remove_book("002").unwrap();
        assert_eq!(removed.isbn().as_str(), "002");
        assert_eq!(isbns(&repository), ["001", "003", "004"]);
        assert_eq!(repository.len(), 3);
        assert!(repository.slots[3].is_none());

        // the freed slot is usable again
        repository.add_book(book("005")).unwrap();
        assert_eq!(isbns(&repository), ["001", "003", "004", "005"]);
    }

    #[test]
    fn fixed_store_removes_last_and_only_entries() {
        let mut repository = FixedCapacityBookRepository::with_capacity(2);
        repository.add_book(book("001")).unwrap();
        repository.add_book(book("002")).unwrap();

        repository.remove_book("002").unwrap();
        repository.remove_book("001").unwrap();
        assert!(repository.is_empty());
        assert!(repository.slots.iter().all(Option::is_none));
    }

    #[test]
    fn fixed_store_fails_closed_at_capacity() {
        let mut repository = FixedCapacityBookRepository::with_capacity(DEFAULT_CAPACITY);
        for n in 0..DEFAULT_CAPACITY {
            repository.add_book(book(&format!("{n:03}"))).unwrap();
        }

        let err = repository.add_book(book("extra")).unwrap_err();
        assert_eq!(err, DomainError::capacity_exceeded(DEFAULT_CAPACITY));
        assert_eq!(repository.len(), DEFAULT_CAPACITY);
    }

    #[test]
    fn fixed_store_checks_capacity_before_duplicates() {
        let mut repository = FixedCapacityBookRepository::with_capacity(1);
        repository.add_book(book("001")).unwrap();
        assert_eq!(
            repository.add_book(book("001")).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
    }

    #[test]
    fn zero_capacity_store_rejects_everything() {
        let mut repository = FixedCapacityBookRepository::with_capacity(0);
        assert_eq!(
            repository.add_book(book("001")).unwrap_err().kind(),
            ErrorKind::CapacityExceeded
        );
        assert_eq!(repository.capacity(), Some(0));
    }

    #[test]
    fn default_fixed_store_has_default_capacity() {
        assert_eq!(
            FixedCapacityBookRepository::default().capacity(),
            Some(DEFAULT_CAPACITY)
        );
    }
}
