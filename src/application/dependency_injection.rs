//! Explicit wiring of a book store into a loan service
//!
//! There is no process-wide registry. Each container is built by the
//! caller, holds at most one store, and is consumed when the loan service
//! is created, so the service keeps the same store for its whole life.
//!
//! ```rust
//! use library_loans::application::LibraryContainer;
//! use library_loans::config::LibraryConfig;
//! use library_loans::domain::{Book, BookRepository};
//!
//! # fn main() -> Result<(), library_loans::domain::DomainError> {
//! let mut service = LibraryContainer::from_config(&LibraryConfig::default()).loan_service()?;
//! service
//!     .repository_mut()
//!     .add_book(Book::new("001", "Clean Code", "Robert Martin", 2008)?)?;
//! service.lend_book("001")?;
//! assert!(!service.is_available("001")?);
//! # Ok(())
//! # }
//! ```

use crate::config::LibraryConfig;
use crate::domain::errors::DomainError;
use crate::domain::repositories::BookRepository;
use crate::domain::services::LoanService;

/// Store handle the container hands to the loan service
pub type DynBookRepository = Box<dyn BookRepository>;

/// Holds the store a loan service will be bound to
#[derive(Default)]
pub struct LibraryContainer {
    repository: Option<DynBookRepository>,
}

impl LibraryContainer {
    pub fn new() -> Self {
        Self { repository: None }
    }

    /// Container pre-loaded with an empty store built from `config`
    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new().register_book_repository(config.build_repository())
    }

    /// Register the book store, replacing any earlier one
    pub fn register_book_repository(mut self, repository: DynBookRepository) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn has_book_repository(&self) -> bool {
        self.repository.is_some()
    }

    /// Bind the registered store to a new loan service
    pub fn loan_service(self) -> Result<LoanService<DynBookRepository>, DomainError> {
        let repository = self
            .repository
            .ok_or_else(|| DomainError::invalid_argument("Book repository cannot be absent"))?;
        Ok(LoanService::new(repository))
    }
}

impl std::fmt::Debug for LibraryContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryContainer")
            .field("book_repository", &self.repository.as_ref().map(|r| r.len()))
            .finish()
    }
}
