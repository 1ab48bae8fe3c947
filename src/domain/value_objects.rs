//! Domain value objects - Validated identifiers, loan states and field rules

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Rejects empty required text fields.
///
/// Shared by the `Book` constructor and every text setter so that the
/// two paths cannot drift apart.
pub fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{field} is required"
        )));
    }
    Ok(())
}

/// Rejects negative publication years.
pub fn require_year(year: i32) -> Result<(), DomainError> {
    if year < 0 {
        return Err(DomainError::invalid_argument(format!(
            "Year of publication cannot be negative (got {year})"
        )));
    }
    Ok(())
}

/// Rejects an empty ISBN used as a lookup key.
pub fn require_isbn_key(isbn: &str) -> Result<(), DomainError> {
    if isbn.is_empty() {
        return Err(DomainError::invalid_argument("ISBN cannot be empty"));
    }
    Ok(())
}

/// Unique identifier for a book within a store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Result<Self, DomainError> {
        let isbn = isbn.into();
        require_text("ISBN", &isbn)?;
        Ok(Self(isbn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl PartialEq<str> for Isbn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loan state of a single book, derived from its availability flag
///
/// The machine has no terminal state: a book cycles between
/// `Available` and `OnLoan` for as long as it stays in a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanState {
    #[default]
    Available,
    OnLoan,
}

impl LoanState {
    pub fn from_availability(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::OnLoan
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Available -> OnLoan
    pub fn lend(self, isbn: &str) -> Result<Self, DomainError> {
        match self {
            Self::Available => Ok(Self::OnLoan),
            Self::OnLoan => Err(DomainError::invalid_state(format!(
                "Book with ISBN {isbn} is already on loan"
            ))),
        }
    }

    /// OnLoan -> Available
    pub fn give_back(self, isbn: &str) -> Result<Self, DomainError> {
        match self {
            Self::OnLoan => Ok(Self::Available),
            Self::Available => Err(DomainError::invalid_state(format!(
                "Book with ISBN {isbn} was not on loan"
            ))),
        }
    }
}

impl std::fmt::Display for LoanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::OnLoan => write!(f, "on loan"),
        }
    }
}
