//! biblio report command implementation
//!
//! Prints the canonical rendering of every book in the catalog.

use crate::catalog::{BookId, Library};
use crate::config::DataConfig;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::report;

/// Options for `biblio report`
pub struct ReportOptions {
    pub data: DataConfig,
    pub json: bool,
    pub quiet: bool,
}

/// JSON shape for one book; shared with the find subcommands.
#[derive(serde::Serialize)]
pub(crate) struct BookReport {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publisher: String,
    pub total_copies: usize,
    pub available: usize,
}

impl BookReport {
    pub(crate) fn new(library: &Library, id: BookId) -> Self {
        let book = library.book(id);
        Self {
            title: book.title().to_string(),
            author: library.author(book.author()).name().to_string(),
            isbn: book.isbn().to_string(),
            publisher: book.publisher().to_string(),
            total_copies: book.total_copies(),
            available: book.available_count(),
        }
    }
}

pub fn run(options: ReportOptions) -> Result<()> {
    let mut human = HumanOutput::new("biblio report");
    let (library, _summary) = super::build_library(&options.data, &mut human);

    if options.json {
        let books: Vec<BookReport> = library
            .books()
            .iter()
            .map(|book| BookReport::new(&library, book.id()))
            .collect();
        return emit_success(
            OutputOptions {
                json: true,
                quiet: options.quiet,
            },
            "report",
            &books,
            Some(&human),
        );
    }

    if !options.quiet {
        println!("{}", report::library_report(&library));
    }

    Ok(())
}
