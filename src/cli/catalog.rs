//! Catalog rendering for the terminal
//!
//! Stores only hand out books; turning them into text happens here.

use crate::domain::entities::Book;

const SEPARATOR: &str = "-------------------------------------";

/// Output format for catalog listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogFormat {
    #[default]
    Text,
    Json,
}

/// Render one book as a text block
pub fn render_book(book: &Book) -> String {
    format!(
        "ISBN: {}\nTitle: {}\nAuthor: {}\nYear of publication: {}\nAvailable: {}\n{SEPARATOR}",
        book.isbn(),
        book.title(),
        book.author(),
        book.year_published(),
        book.availability(),
    )
}

/// Render every book in order
pub fn render_catalog<'a>(
    books: impl Iterator<Item = &'a Book>,
    format: CatalogFormat,
) -> anyhow::Result<String> {
    match format {
        CatalogFormat::Text => Ok(books.map(render_book).collect::<Vec<_>>().join("\n")),
        CatalogFormat::Json => {
            let books: Vec<&Book> = books.collect();
            Ok(serde_json::to_string_pretty(&books)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        vec![
            Book::new("001", "Clean Code", "Robert Martin", 2008).unwrap(),
            Book::new("002", "Effective Java", "Joshua Bloch", 2017).unwrap(),
        ]
    }

    #[test]
    fn text_block_lists_every_field() {
        let text = render_book(&books()[0]);
        assert_eq!(
            text,
            "ISBN: 001\nTitle: Clean Code\nAuthor: Robert Martin\nYear of publication: 2008\nAvailable: true\n-------------------------------------"
        );
    }

    #[test]
    fn text_catalog_keeps_order() {
        let books = books();
        let text = render_catalog(books.iter(), CatalogFormat::Text).unwrap();
        let first = text.find("ISBN: 001").unwrap();
        let second = text.find("ISBN: 002").unwrap();
        assert!(first < second);
    }

    #[test]
    fn json_catalog_is_an_array() {
        let books = books();
        let json = render_catalog(books.iter(), CatalogFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["title"], "Effective Java");
    }

    #[test]
    fn empty_catalog_renders_empty() {
        assert_eq!(
            render_catalog(std::iter::empty(), CatalogFormat::Text).unwrap(),
            ""
        );
        assert_eq!(
            render_catalog(std::iter::empty(), CatalogFormat::Json).unwrap(),
            "[]"
        );
    }
}
