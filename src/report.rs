//! Human-readable renderings of catalog entities.
//!
//! Presentation only: these strings are for display and debugging, not for
//! parsing. Machine consumers get the JSON envelope from `output` instead.

use crate::author::Author;
use crate::book::{Book, BookCopy, CopyStatus};
use crate::catalog::Library;
use crate::patron::Patron;

/// Status word for a copy, with the checkout date when one exists.
pub fn copy_line(copy: &BookCopy) -> String {
    match (copy.status(), copy.checkout_date()) {
        (CopyStatus::CheckedOut, Some(date)) => format!("CHECKED_OUT <{date}>"),
        (status, _) => status.as_str().to_string(),
    }
}

/// Full description of a book: metadata, copy counts, and per-copy status.
pub fn book_summary(library: &Library, book: &Book) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Title:\t\t{}", book.title()));
    lines.push(format!("Author:\t\t{}", library.author(book.author()).name()));
    lines.push(format!("ISBN:\t\t{}", book.isbn()));
    lines.push(format!("Publisher:\t{}", book.publisher()));
    lines.push(format!(
        "{} total copies, {} available",
        book.total_copies(),
        book.available_count()
    ));
    for copy in book.copies() {
        lines.push(format!("  #{}: {}", copy.serial(), copy_line(copy)));
    }
    lines.join("\n")
}

pub fn author_summary(author: &Author) -> String {
    format!(
        "{} ({})\nBibliography: {} works",
        author.name(),
        author.date_of_birth(),
        author.bibliography().len()
    )
}

/// Patron identity plus the titles and dates of everything they hold.
pub fn patron_summary(library: &Library, patron: &Patron) -> String {
    let mut lines = vec![format!(
        "Patron[name:'{}', address:'{}', phone:'{}']",
        patron.name(),
        patron.address(),
        patron.phone()
    )];
    lines.push("Checked out:".to_string());
    for id in patron.checked_out() {
        let title = library.book(id.book).title();
        match library.copy(*id).and_then(|copy| copy.checkout_date()) {
            Some(date) => lines.push(format!("  {title} <{date}>")),
            None => lines.push(format!("  {title}")),
        }
    }
    lines.join("\n")
}

/// Every book in the library, in registration order.
pub fn library_report(library: &Library) -> String {
    let mut sections = vec!["Books in this Library:".to_string()];
    for book in library.books() {
        sections.push(book_summary(library, book));
    }
    sections.join("\n\n")
}
