//! Author records and their bibliographies.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{AuthorId, BookId};

/// An author known to the library. Every book in the catalog is attributed
/// to exactly one of these.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    date_of_birth: NaiveDate,
    bibliography: Vec<BookId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            date_of_birth,
            bibliography: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Books attributed to this author, in catalog registration order.
    pub fn bibliography(&self) -> &[BookId] {
        &self.bibliography
    }

    // A birthday never changes; a name might.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append-only; called exactly once per book, during book registration.
    pub(crate) fn add_work(&mut self, book: BookId) {
        self.bibliography.push(book);
    }
}
