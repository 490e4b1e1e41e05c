//! Patron records and held-copy queries.

use serde::Serialize;

use crate::catalog::{BookId, CopyId, PatronId};

/// A registered library member. The held-set tracks copies by handle; the
/// copies themselves are owned by their books.
#[derive(Debug, Clone, Serialize)]
pub struct Patron {
    id: PatronId,
    name: String,
    address: String,
    phone: String,
    checked_out: Vec<CopyId>,
}

impl Patron {
    pub(crate) fn new(
        id: PatronId,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            checked_out: Vec::new(),
        }
    }

    pub fn id(&self) -> PatronId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Copies currently checked out by this patron, oldest first.
    pub fn checked_out(&self) -> &[CopyId] {
        &self.checked_out
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// First held copy of the given book, if any.
    pub fn find_copy_of(&self, book: BookId) -> Option<CopyId> {
        self.checked_out.iter().copied().find(|copy| copy.book == book)
    }

    /// All held copies of the given book.
    pub fn find_copies_of(&self, book: BookId) -> Vec<CopyId> {
        self.checked_out
            .iter()
            .copied()
            .filter(|copy| copy.book == book)
            .collect()
    }

    pub(crate) fn add_copy(&mut self, copy: CopyId) {
        self.checked_out.push(copy);
    }

    pub(crate) fn remove_copy(&mut self, copy: CopyId) {
        self.checked_out.retain(|held| *held != copy);
    }
}
