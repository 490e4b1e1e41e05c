//! biblio checkout command implementation
//!
//! Exercises the lending cycle end to end inside one invocation: seed
//! copies on the requested book, borrow for the named patron, optionally
//! return the first copy, then print the resulting book and patron state.
//! Nothing persists afterwards.

use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::report;

/// Options for `biblio checkout`
pub struct CheckoutOptions {
    pub data: DataConfig,
    pub title: String,
    pub patron: String,
    pub address: String,
    pub count: usize,
    pub copies: usize,
    pub return_first: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct CheckoutReport {
    title: String,
    patron: String,
    borrowed: usize,
    returned: usize,
    available: usize,
    total_copies: usize,
}

pub fn run(options: CheckoutOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!(
        "biblio checkout: {} x{} for {}",
        options.title, options.count, options.patron
    ));
    let (mut library, _summary) = super::build_library(&options.data, &mut human);

    let book = library
        .find_book_by_title(&options.title)
        .ok_or_else(|| Error::BookNotFound(options.title.clone()))?;
    let patron = library
        .find_patron(&options.patron, &options.address)
        .ok_or_else(|| Error::PatronNotFound {
            name: options.patron.clone(),
            address: options.address.clone(),
        })?;

    library.add_copies(book, options.copies);
    let borrowed = library.borrow_copies(book, patron, options.count)?;

    let mut returned = 0;
    if options.return_first {
        if let Some(first) = borrowed.first() {
            library.return_copy(*first)?;
            returned = 1;
        }
    }

    let report_data = CheckoutReport {
        title: library.book(book).title().to_string(),
        patron: library.patron(patron).name().to_string(),
        borrowed: borrowed.len(),
        returned,
        available: library.book(book).available_count(),
        total_copies: library.book(book).total_copies(),
    };

    human.push_summary("borrowed", report_data.borrowed.to_string());
    if options.return_first {
        human.push_summary("returned", returned.to_string());
    }
    human.push_summary("available", report_data.available.to_string());
    for line in report::book_summary(&library, library.book(book)).lines() {
        human.push_detail(line.to_string());
    }
    for line in report::patron_summary(&library, library.patron(patron)).lines() {
        human.push_detail(line.to_string());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "checkout",
        &report_data,
        Some(&human),
    )?;

    Ok(())
}
