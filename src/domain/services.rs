//! Domain services - Loan and return transitions on top of a book store

use crate::domain::entities::Book;
use crate::domain::errors::DomainError;
use crate::domain::repositories::BookRepository;
use crate::domain::value_objects::LoanState;

/// Lends and takes back books held by exactly one store
///
/// The service drives the per-book `LoanState` machine. It mutates the
/// availability flag through the handle the store returns; the store
/// itself is not told about the change.
pub struct LoanService<R> {
    repository: R,
}

impl<R: BookRepository> LoanService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Available -> OnLoan
    pub fn lend_book(&mut self, isbn: &str) -> Result<(), DomainError> {
        self.transition(isbn, LoanState::lend)?;
        log::debug!("Lent book {isbn}");
        Ok(())
    }

    /// OnLoan -> Available
    pub fn return_book(&mut self, isbn: &str) -> Result<(), DomainError> {
        self.transition(isbn, LoanState::give_back)?;
        log::debug!("Returned book {isbn}");
        Ok(())
    }

    pub fn loan_state(&self, isbn: &str) -> Result<LoanState, DomainError> {
        Ok(self.find(isbn)?.loan_state())
    }

    pub fn is_available(&self, isbn: &str) -> Result<bool, DomainError> {
        Ok(self.loan_state(isbn)?.is_available())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    fn find(&self, isbn: &str) -> Result<&Book, DomainError> {
        self.repository
            .find_book_by_isbn(isbn)?
            .ok_or_else(|| DomainError::not_found(isbn))
    }

    fn transition(
        &mut self,
        isbn: &str,
        step: fn(LoanState, &str) -> Result<LoanState, DomainError>,
    ) -> Result<(), DomainError> {
        let mut book = self
            .repository
            .find_book_by_isbn_mut(isbn)?
            .ok_or_else(|| DomainError::not_found(isbn))?;

        let next = step(book.loan_state(), isbn)?;
        book.set_availability(next.is_available());
        Ok(())
    }
}

impl<R: BookRepository> std::fmt::Debug for LoanService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoanService")
            .field("books", &self.repository.len())
            .field("capacity", &self.repository.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::infrastructure::repositories::VecBookRepository;

    fn service_with_clean_code() -> LoanService<VecBookRepository> {
        let mut repository = VecBookRepository::new();
        repository
            .add_book(Book::new("001", "Clean Code", "Robert Martin", 2008).unwrap())
            .unwrap();
        LoanService::new(repository)
    }

    #[test]
    fn lend_then_lend_again_fails_without_side_effects() {
        let mut service = service_with_clean_code();

        service.lend_book("001").unwrap();
        let after_first = service
            .repository()
            .find_book_by_isbn("001")
            .unwrap()
            .cloned();

        let err = service.lend_book("001").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let after_second = service
            .repository()
            .find_book_by_isbn("001")
            .unwrap()
            .cloned();
        assert_eq!(after_first, after_second);
        assert_eq!(service.loan_state("001").unwrap(), LoanState::OnLoan);
    }

    #[test]
    fn return_restores_availability_only() {
        let mut service = service_with_clean_code();
        let before = service
            .repository()
            .find_book_by_isbn("001")
            .unwrap()
            .cloned();

        service.lend_book("001").unwrap();
        service.return_book("001").unwrap();

        let after = service
            .repository()
            .find_book_by_isbn("001")
            .unwrap()
            .cloned();
        assert_eq!(before, after);
        assert!(service.is_available("001").unwrap());
    }

    #[test]
    fn return_of_available_book_is_invalid_state() {
        let mut service = service_with_clean_code();
        assert_eq!(
            service.return_book("001").unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn unknown_isbn_is_not_found() {
        let mut service = LoanService::new(VecBookRepository::new());
        assert_eq!(
            service.lend_book("999").unwrap_err(),
            DomainError::not_found("999")
        );
        assert_eq!(
            service.return_book("999").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            service.loan_state("999").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn empty_isbn_is_invalid_argument() {
        let mut service = service_with_clean_code();
        assert_eq!(
            service.lend_book("").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn borrows_a_store_the_caller_keeps() {
        let mut repository = VecBookRepository::new();
        repository
            .add_book(Book::new("002", "Effective Java", "Joshua Bloch", 2017).unwrap())
            .unwrap();

        {
            let mut service = LoanService::new(&mut repository);
            service.lend_book("002").unwrap();
        }

        let book = repository.find_book_by_isbn("002").unwrap().unwrap();
        assert!(!book.availability());
    }

    #[test]
    fn debug_reports_store_size_for_boxed_stores() {
        let repository: Box<dyn BookRepository> = Box::new(VecBookRepository::new());
        let service = LoanService::new(repository);
        assert_eq!(
            format!("{service:?}"),
            "LoanService { books: 0, capacity: None }"
        );
    }
}
