//! Command-line interface for biblio
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule. Every invocation builds
//! the catalog fresh from the data files; nothing persists between runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::Library;
use crate::config::{Config, DataConfig};
use crate::error::Result;
use crate::loader::{self, LoadSummary};
use crate::output::HumanOutput;

mod checkout;
mod find;
mod load;
mod report;

/// biblio - Library Catalog
///
/// A CLI over an in-memory library catalog: load authors, patrons, and
/// books from comma-delimited files, look them up, and exercise the
/// lending cycle.
#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a biblio.toml config file (defaults to ./biblio.toml)
    #[arg(long, global = true, env = "BIBLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the data files (overrides config)
    #[arg(long, global = true, env = "BIBLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the data files and report what was read
    Load,

    /// Print the full catalog
    Report,

    /// Look up authors, books, and patrons
    #[command(subcommand)]
    Find(FindCommands),

    /// Borrow copies of a book for a patron (in-memory demo of the
    /// lending cycle)
    Checkout {
        /// Title of the book to borrow
        title: String,

        /// Name of the borrowing patron
        #[arg(long)]
        patron: String,

        /// Address of the borrowing patron
        #[arg(long)]
        address: String,

        /// Number of copies to borrow
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Copies to put on the shelf before borrowing (data files carry
        /// no copy records)
        #[arg(long, default_value = "3")]
        copies: usize,

        /// Return the first borrowed copy afterwards
        #[arg(long)]
        return_first: bool,
    },
}

/// Find subcommands
#[derive(Subcommand, Debug)]
pub enum FindCommands {
    /// Find an author by exact name
    Author {
        /// Author name (case-insensitive)
        name: String,
    },

    /// Find a book by exact title
    Book {
        /// Book title (case-insensitive)
        title: String,
    },

    /// Find a book by ISBN
    Isbn {
        /// ISBN to look up
        isbn: String,
    },

    /// List every book by an author
    ByAuthor {
        /// Author name (case-insensitive)
        name: String,
    },

    /// Find a patron by name and address
    Patron {
        /// Patron name (case-insensitive)
        name: String,

        /// Patron address (case-insensitive)
        address: String,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let data = resolve_data_config(self.config.as_deref(), self.data_dir.clone())?;

        match self.command {
            Commands::Load => load::run(load::LoadOptions {
                data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Report => report::run(report::ReportOptions {
                data,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Find(cmd) => match cmd {
                FindCommands::Author { name } => find::run_author(find::FindOptions {
                    data,
                    query: name,
                    json: self.json,
                    quiet: self.quiet,
                }),
                FindCommands::Book { title } => find::run_book(find::FindOptions {
                    data,
                    query: title,
                    json: self.json,
                    quiet: self.quiet,
                }),
                FindCommands::Isbn { isbn } => find::run_isbn(find::FindOptions {
                    data,
                    query: isbn,
                    json: self.json,
                    quiet: self.quiet,
                }),
                FindCommands::ByAuthor { name } => find::run_by_author(find::FindOptions {
                    data,
                    query: name,
                    json: self.json,
                    quiet: self.quiet,
                }),
                FindCommands::Patron { name, address } => {
                    find::run_patron(find::FindPatronOptions {
                        data,
                        name,
                        address,
                        json: self.json,
                        quiet: self.quiet,
                    })
                }
            },
            Commands::Checkout {
                title,
                patron,
                address,
                count,
                copies,
                return_first,
            } => checkout::run(checkout::CheckoutOptions {
                data,
                title,
                patron,
                address,
                count,
                copies,
                return_first,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Config file if given (or present), CLI data dir winning over both.
fn resolve_data_config(
    config: Option<&std::path::Path>,
    data_dir: Option<PathBuf>,
) -> Result<DataConfig> {
    let mut data = match config {
        Some(path) => Config::load_file(path)?.data,
        None => Config::load_or_default().data,
    };
    if let Some(dir) = data_dir {
        data.dir = dir;
    }
    Ok(data)
}

/// Builds the in-memory catalog from the data files and forwards the load
/// warnings to the command's human output.
fn build_library(data: &DataConfig, human: &mut HumanOutput) -> (Library, LoadSummary) {
    let mut library = Library::new();
    let summary = loader::load_catalog(&mut library, data);
    for warning in &summary.warnings {
        human.push_warning(warning.clone());
    }
    (library, summary)
}
