//! biblio load command implementation
//!
//! Reads the three data files and reports per-file record counts. File
//! failures surface as warnings; whatever loaded before a failure is kept.

use crate::config::DataConfig;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `biblio load`
pub struct LoadOptions {
    pub data: DataConfig,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct LoadReport {
    authors: usize,
    patrons: usize,
    books: usize,
}

pub fn run(options: LoadOptions) -> Result<()> {
    let mut human = HumanOutput::new(format!(
        "biblio load: {}",
        options.data.dir.display()
    ));
    let (_library, summary) = super::build_library(&options.data, &mut human);

    let report = LoadReport {
        authors: summary.authors,
        patrons: summary.patrons,
        books: summary.books,
    };

    human.push_summary("authors", summary.authors.to_string());
    human.push_summary("patrons", summary.patrons.to_string());
    human.push_summary("books", summary.books.to_string());
    human.push_next_step("biblio report");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "load",
        &report,
        Some(&human),
    )?;

    Ok(())
}
