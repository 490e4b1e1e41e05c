//! biblio - Library Catalog Library
//!
//! This library provides the core functionality for the biblio CLI tool:
//! an in-memory catalog of authors, books, physical copies, and the patrons
//! who borrow them.
//!
//! # Core Concepts
//!
//! - **Catalog**: one `Library` value owning every author, book, and patron
//! - **Handles**: typed ids cross-referencing entities instead of shared
//!   ownership
//! - **Lending**: the `Available -> CheckedOut -> Available` copy cycle,
//!   always updating the copy and the borrower's held-set together
//! - **Bulk load**: comma-delimited data files for authors, patrons, books
//!
//! # Module Organization
//!
//! - `catalog`: the `Library` aggregate, handles, registration, lookups
//! - `author`, `book`, `patron`: the entity records
//! - `lending`: borrow/return/remove operations on the library
//! - `loader`: CSV bulk loading
//! - `report`: human-readable renderings
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `biblio.toml`
//! - `error`: error types and result aliases
//! - `output`: shared CLI output formatting

pub mod author;
pub mod book;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod lending;
pub mod loader;
pub mod output;
pub mod patron;
pub mod report;

pub use catalog::{AuthorId, BookId, CopyId, Library, PatronId};
pub use error::{Error, Result};
