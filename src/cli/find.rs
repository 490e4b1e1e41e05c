//! biblio find command implementation
//!
//! Lookups against the loaded catalog: author by name, book by title or
//! ISBN, books by author, patron by name and address. A miss is a user
//! error with exit code 2.

use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::report;

use super::report::BookReport;

/// Options for the single-query find subcommands
pub struct FindOptions {
    pub data: DataConfig,
    pub query: String,
    pub json: bool,
    pub quiet: bool,
}

/// Options for `biblio find patron`
pub struct FindPatronOptions {
    pub data: DataConfig,
    pub name: String,
    pub address: String,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AuthorReport {
    name: String,
    date_of_birth: chrono::NaiveDate,
    works: usize,
}

#[derive(serde::Serialize)]
struct PatronReport {
    name: String,
    address: String,
    phone: String,
    checked_out: usize,
}

pub fn run_author(options: FindOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!("biblio find author: {}", options.query));
    let (library, _summary) = super::build_library(&options.data, &mut human);

    let id = library
        .find_author_by_name(&options.query)
        .ok_or_else(|| Error::AuthorNotFound(options.query.clone()))?;
    let author = library.author(id);

    let report = AuthorReport {
        name: author.name().to_string(),
        date_of_birth: author.date_of_birth(),
        works: author.bibliography().len(),
    };

    for line in report::author_summary(author).lines() {
        human.push_detail(line.to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "find author",
        &report,
        Some(&human),
    )
}

pub fn run_book(options: FindOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!("biblio find book: {}", options.query));
    let (library, _summary) = super::build_library(&options.data, &mut human);

    let id = library
        .find_book_by_title(&options.query)
        .ok_or_else(|| Error::BookNotFound(options.query.clone()))?;

    emit_book(&library, id, &mut human, &options)
}

pub fn run_isbn(options: FindOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!("biblio find isbn: {}", options.query));
    let (library, _summary) = super::build_library(&options.data, &mut human);

    let id = library
        .find_book_by_isbn(&options.query)
        .ok_or_else(|| Error::BookNotFound(options.query.clone()))?;

    emit_book(&library, id, &mut human, &options)
}

pub fn run_by_author(options: FindOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!("biblio find by-author: {}", options.query));
    let (library, _summary) = super::build_library(&options.data, &mut human);

    let books: Vec<BookReport> = library
        .find_books_by_author(&options.query)
        .into_iter()
        .map(|id| BookReport::new(&library, id))
        .collect();

    human.push_summary("matches", books.len().to_string());
    for book in &books {
        human.push_detail(format!("{} ({})", book.title, book.isbn));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "find by-author",
        &books,
        Some(&human),
    )
}

pub fn run_patron(options: FindPatronOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!("biblio find patron: {}", options.name));
    let (library, _summary) = super::build_library(&options.data, &mut human);

    let id = library
        .find_patron(&options.name, &options.address)
        .ok_or_else(|| Error::PatronNotFound {
            name: options.name.clone(),
            address: options.address.clone(),
        })?;
    let patron = library.patron(id);

    let report = PatronReport {
        name: patron.name().to_string(),
        address: patron.address().to_string(),
        phone: patron.phone().to_string(),
        checked_out: patron.checked_out().len(),
    };

    for line in report::patron_summary(&library, patron).lines() {
        human.push_detail(line.to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "find patron",
        &report,
        Some(&human),
    )
}

fn emit_book(
    library: &crate::catalog::Library,
    id: crate::catalog::BookId,
    human: &mut HumanOutput,
    options: &FindOptions,
) -> Result<()> {
    let report_data = BookReport::new(library, id);

    for line in report::book_summary(library, library.book(id)).lines() {
        human.push_detail(line.to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "find book",
        &report_data,
        Some(&*human),
    )
}
