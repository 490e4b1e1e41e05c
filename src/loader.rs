//! Bulk loading of catalog data from comma-delimited files.
//!
//! One record per line. A read failure or malformed record aborts the rest
//! of that file but keeps everything already loaded from it; the caller
//! decides whether to continue with other files (the CLI does).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::catalog::Library;
use crate::config::DataConfig;
use crate::error::{Error, Result};

/// Outcome of loading all three data files. Per-file failures are collected
/// as warnings instead of failing the whole load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadSummary {
    pub authors: usize,
    pub patrons: usize,
    pub books: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Loads authors, then patrons, then books. Authors must come before books
/// because book records name their author.
///
/// Counts reflect what the library retained, including lines read before a
/// failure aborted the rest of a file.
pub fn load_catalog(library: &mut Library, data: &DataConfig) -> LoadSummary {
    let mut summary = LoadSummary::default();

    let authors_before = library.authors().len();
    match load_authors(library, &data.authors_path()) {
        Ok(count) => summary.authors = count,
        Err(err) => {
            warn!(file = %data.authors_path().display(), error = %err, "author load aborted");
            summary.authors = library.authors().len() - authors_before;
            summary.warnings.push(err.to_string());
        }
    }
    let patrons_before = library.patrons().len();
    match load_patrons(library, &data.patrons_path()) {
        Ok(count) => summary.patrons = count,
        Err(err) => {
            warn!(file = %data.patrons_path().display(), error = %err, "patron load aborted");
            summary.patrons = library.patrons().len() - patrons_before;
            summary.warnings.push(err.to_string());
        }
    }
    let books_before = library.books().len();
    match load_books(library, &data.books_path()) {
        Ok(count) => summary.books = count,
        Err(err) => {
            warn!(file = %data.books_path().display(), error = %err, "book load aborted");
            summary.books = library.books().len() - books_before;
            summary.warnings.push(err.to_string());
        }
    }

    summary
}

/// Loads author records: `name,birthYear,birthMonth,birthDay`.
pub fn load_authors(library: &mut Library, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)?;
    let mut loaded = 0;

    for (index, line) in records(&contents) {
        let fields = split_record(path, index, line, 4)?;
        let year = parse_number(path, index, fields[1], "birth year")?;
        let month = parse_number(path, index, fields[2], "birth month")?;
        let day = parse_number(path, index, fields[3], "birth day")?;
        let date_of_birth = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
            malformed(path, index, format!("invalid date {year}-{month}-{day}"))
        })?;

        library.add_author(fields[0], date_of_birth);
        loaded += 1;
    }

    Ok(loaded)
}

/// Loads patron records: `name,address,phoneNumber`.
pub fn load_patrons(library: &mut Library, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)?;
    let mut loaded = 0;

    for (index, line) in records(&contents) {
        let fields = split_record(path, index, line, 3)?;
        library.add_patron(fields[0], fields[1], fields[2]);
        loaded += 1;
    }

    Ok(loaded)
}

/// Loads book records: `title,authorName,isbn,publisher`. The author is
/// resolved by name, so the authors file must already be loaded.
pub fn load_books(library: &mut Library, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path)?;
    let mut loaded = 0;

    for (index, line) in records(&contents) {
        let fields = split_record(path, index, line, 4)?;
        let author = library.find_author_by_name(fields[1]).ok_or_else(|| {
            malformed(path, index, format!("unknown author '{}'", fields[1]))
        })?;

        library.add_book(fields[0], author, fields[2], fields[3]);
        loaded += 1;
    }

    Ok(loaded)
}

/// Non-empty lines paired with their 1-based line numbers.
fn records(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn split_record<'a>(
    path: &Path,
    line: usize,
    record: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(malformed(
            path,
            line,
            format!("expected {expected} fields, got {}", fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_number(path: &Path, line: usize, field: &str, what: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .map_err(|_| malformed(path, line, format!("{what} is not a number: '{field}'")))
}

fn malformed(path: &Path, line: usize, reason: String) -> Error {
    Error::MalformedRecord {
        file: PathBuf::from(path),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn loads_well_formed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let authors = write_file(
            dir.path(),
            "authors.csv",
            "Frank Herbert,1920,10,8\nJane Doe,1970,1,15\n",
        );
        let patrons = write_file(dir.path(), "patrons.csv", "Leif Eldrett,221 Lullaby Lane,555-0100\n");
        let books = write_file(
            dir.path(),
            "books.csv",
            "Dune,Frank Herbert,978-0441013593,Chilton\n",
        );

        let mut library = Library::new();
        assert_eq!(load_authors(&mut library, &authors).expect("authors"), 2);
        assert_eq!(load_patrons(&mut library, &patrons).expect("patrons"), 1);
        assert_eq!(load_books(&mut library, &books).expect("books"), 1);

        let book = library.find_book_by_title("Dune").expect("book");
        let author = library.find_author_by_name("Frank Herbert").expect("author");
        assert_eq!(library.book(book).author(), author);
    }

    #[test]
    fn malformed_record_aborts_file_but_keeps_earlier_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let authors = write_file(
            dir.path(),
            "authors.csv",
            "Frank Herbert,1920,10,8\nBroken Author,not-a-year,1,1\nJane Doe,1970,1,15\n",
        );

        let mut library = Library::new();
        let err = load_authors(&mut library, &authors).expect_err("malformed");
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));

        // The first line made it in; the line after the bad one did not.
        assert_eq!(library.authors().len(), 1);
        assert!(library.find_author_by_name("Frank Herbert").is_some());
        assert!(library.find_author_by_name("Jane Doe").is_none());
    }

    #[test]
    fn book_with_unknown_author_is_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let books = write_file(dir.path(), "books.csv", "Dune,Nobody,111,Chilton\n");

        let mut library = Library::new();
        let err = load_books(&mut library, &books).expect_err("unknown author");
        assert!(matches!(err, Error::MalformedRecord { .. }));
        assert!(library.books().is_empty());
    }

    #[test]
    fn load_catalog_collects_per_file_warnings() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "authors.csv", "Frank Herbert,1920,10,8\n");
        write_file(
            dir.path(),
            "books.csv",
            "Dune,Frank Herbert,978-0441013593,Chilton\n",
        );
        // No patrons file at all.

        let data = DataConfig::with_dir(dir.path());
        let mut library = Library::new();
        let summary = load_catalog(&mut library, &data);

        assert_eq!(summary.authors, 1);
        assert_eq!(summary.books, 1);
        assert_eq!(summary.patrons, 0);
        assert_eq!(summary.warnings.len(), 1);
    }
}
