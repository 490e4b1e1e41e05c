//! Book records and the physical copies that can be lent out.
//!
//! A `Book` is catalog metadata plus an insertion-ordered list of its
//! `BookCopy` instances. Copy handles stay stable across removals because
//! each copy gets a monotonic per-book serial.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{AuthorId, BookId, CopyId, PatronId};

/// Lending status of a single copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    /// On the shelf, free to borrow.
    Available,
    /// Held by a patron.
    CheckedOut,
    /// Defined for parity with checkout records, but unreachable: due dates
    /// are not implemented, so no operation ever sets it. Counts as
    /// unavailable.
    Overdue,
}

impl CopyStatus {
    /// Canonical status word used by reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyStatus::Available => "AVAILABLE",
            CopyStatus::CheckedOut => "CHECKED_OUT",
            CopyStatus::Overdue => "OVERDUE",
        }
    }
}

/// One physical copy of a book.
///
/// Invariant: `status == CheckedOut` exactly when both `borrower` and
/// `checkout_date` are set; an available copy has neither.
#[derive(Debug, Clone, Serialize)]
pub struct BookCopy {
    book: BookId,
    serial: u32,
    status: CopyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    borrower: Option<PatronId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkout_date: Option<NaiveDate>,
}

impl BookCopy {
    fn new(book: BookId, serial: u32) -> Self {
        Self {
            book,
            serial,
            status: CopyStatus::Available,
            borrower: None,
            checkout_date: None,
        }
    }

    pub fn id(&self) -> CopyId {
        CopyId {
            book: self.book,
            serial: self.serial,
        }
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn borrower(&self) -> Option<PatronId> {
        self.borrower
    }

    pub fn checkout_date(&self) -> Option<NaiveDate> {
        self.checkout_date
    }

    pub(crate) fn check_out(&mut self, borrower: PatronId, date: NaiveDate) {
        self.status = CopyStatus::CheckedOut;
        self.borrower = Some(borrower);
        self.checkout_date = Some(date);
    }

    pub(crate) fn check_in(&mut self) {
        self.status = CopyStatus::Available;
        self.borrower = None;
        self.checkout_date = None;
    }
}

/// A book in the catalog: title/author/ISBN/publisher metadata plus its
/// physical copies.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: AuthorId,
    isbn: String,
    publisher: String,
    copies: Vec<BookCopy>,
    #[serde(skip)]
    next_serial: u32,
}

impl Book {
    pub(crate) fn new(
        id: BookId,
        title: impl Into<String>,
        author: AuthorId,
        isbn: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author,
            isbn: isbn.into(),
            publisher: publisher.into(),
            copies: Vec::new(),
            next_serial: 1,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = publisher.into();
    }

    /// All copies, in the order they were added.
    pub fn copies(&self) -> &[BookCopy] {
        &self.copies
    }

    pub fn copy(&self, id: CopyId) -> Option<&BookCopy> {
        self.copies.iter().find(|copy| copy.id() == id)
    }

    pub(crate) fn copy_mut(&mut self, id: CopyId) -> Option<&mut BookCopy> {
        self.copies.iter_mut().find(|copy| copy.id() == id)
    }

    /// Adds one new available copy and returns its handle.
    pub(crate) fn add_copy(&mut self) -> CopyId {
        let copy = BookCopy::new(self.id, self.next_serial);
        self.next_serial += 1;
        let id = copy.id();
        self.copies.push(copy);
        id
    }

    pub(crate) fn take_copy(&mut self, id: CopyId) -> Option<BookCopy> {
        let index = self.copies.iter().position(|copy| copy.id() == id)?;
        Some(self.copies.remove(index))
    }

    pub fn total_copies(&self) -> usize {
        self.copies.len()
    }

    pub fn available_count(&self) -> usize {
        self.copies
            .iter()
            .filter(|copy| copy.status() == CopyStatus::Available)
            .count()
    }

    /// Checked-out and overdue copies alike.
    pub fn unavailable_count(&self) -> usize {
        self.total_copies() - self.available_count()
    }

    /// Earliest-added copy that is still available. Deterministic: always
    /// the first match in insertion order.
    pub fn next_available_copy(&self) -> Option<CopyId> {
        self.copies
            .iter()
            .find(|copy| copy.status() == CopyStatus::Available)
            .map(|copy| copy.id())
    }
}
