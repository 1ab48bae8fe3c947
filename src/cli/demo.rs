//! Demo harness exercising the loan cycle end to end

use crate::{
    application::LibraryContainer,
    cli::catalog::{CatalogFormat, render_catalog},
    config::LibraryConfig,
    domain::{Book, BookRepository, DomainError},
};
use anyhow::Context;
use std::io::Write;

/// Outcome of each demo step, in the order they ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub steps: Vec<(String, Result<(), DomainError>)>,
}

/// Seed two books, then lend, lend again, and return the first one
pub fn run_demo<W: Write>(
    config: &LibraryConfig,
    format: CatalogFormat,
    out: &mut W,
) -> anyhow::Result<DemoReport> {
    let mut service = LibraryContainer::from_config(config).loan_service()?;

    let seed = [
        ("001", "Clean Code", "Robert Martin", 2008),
        ("002", "Effective Java", "Joshua Bloch", 2017),
    ];
    for (isbn, title, author, year) in seed {
        service
            .repository_mut()
            .add_book(Book::new(isbn, title, author, year)?)
            .with_context(|| format!("Failed to add book {isbn}"))?;
    }

    writeln!(out, "=== Catalog ===")?;
    writeln!(
        out,
        "{}",
        render_catalog(service.repository().list_all(), format)?
    )?;
    writeln!(out)?;

    let mut steps = Vec::new();
    for (label, result) in [
        ("lend 001", service.lend_book("001")),
        ("lend 001 again", service.lend_book("001")),
        ("return 001", service.return_book("001")),
    ] {
        match &result {
            Ok(()) => writeln!(out, "[OK] {label}")?,
            Err(err) => writeln!(out, "[ERROR] {label}: {err}")?,
        }
        steps.push((label.to_string(), result));
    }

    let available = service.is_available("001")?;
    writeln!(out, "001 available: {available}")?;

    Ok(DemoReport { steps })
}
