//! # library-loans
//!
//! A minimal library circulation model: validated book records, two
//! interchangeable in-memory stores, and a loan service that moves each
//! book between *available* and *on loan*.
//!
//! ## Quick Start
//!
//! ```rust
//! use library_loans::domain::{Book, BookRepository, DomainError, LoanService};
//! use library_loans::infrastructure::VecBookRepository;
//!
//! # fn main() -> Result<(), DomainError> {
//! let mut store = VecBookRepository::new();
//! store.add_book(Book::new("001", "Clean Code", "Robert Martin", 2008)?)?;
//!
//! let mut loans = LoanService::new(&mut store);
//! loans.lend_book("001")?;
//! assert!(matches!(loans.lend_book("001"), Err(DomainError::InvalidState { .. })));
//! loans.return_book("001")?;
//!
//! let book = store.find_book_by_isbn("001")?.expect("book is stored");
//! assert!(book.availability());
//! # Ok(())
//! # }
//! ```
//!
//! ## Bounded Stores
//!
//! ```rust
//! use library_loans::domain::{Book, BookRepository, DomainError};
//! use library_loans::infrastructure::FixedCapacityBookRepository;
//!
//! # fn main() -> Result<(), DomainError> {
//! let mut store = FixedCapacityBookRepository::with_capacity(1);
//! store.add_book(Book::new("001", "Clean Code", "Robert Martin", 2008)?)?;
//!
//! let overflow = store.add_book(Book::new("002", "Effective Java", "Joshua Bloch", 2017)?);
//! assert_eq!(overflow, Err(DomainError::CapacityExceeded { capacity: 1 }));
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::LibraryContainer;
pub use config::{LibraryConfig, StoreKind};
pub use domain::{Book, BookRepository, DomainError, ErrorKind, LoanService, LoanState};
pub use infrastructure::{FixedCapacityBookRepository, VecBookRepository};
