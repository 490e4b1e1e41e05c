//! The lending state machine.
//!
//! A copy cycles `Available -> CheckedOut -> Available`. Every transition
//! touches two aggregates at once (the copy inside its book, and the
//! borrower's held-set), so all mutations live here as `Library` operations;
//! there is no API that updates one side without the other.

use chrono::{NaiveDate, Utc};
use tracing::warn;

use crate::book::CopyStatus;
use crate::catalog::{BookId, CopyId, Library, PatronId};
use crate::error::{Error, Result};

impl Library {
    /// Adds one new available copy of a book.
    pub fn add_copy(&mut self, book: BookId) -> CopyId {
        self.book_mut(book).add_copy()
    }

    /// Adds `count` copies, in order.
    pub fn add_copies(&mut self, book: BookId, count: usize) -> Vec<CopyId> {
        (0..count).map(|_| self.add_copy(book)).collect()
    }

    /// Removes a copy from its book.
    ///
    /// Removing a copy that is not available is allowed but logged as a
    /// warning, and the copy is detached from its borrower's held-set so no
    /// patron is left holding a handle to a copy the catalog no longer owns.
    pub fn remove_copy(&mut self, copy: CopyId) -> Result<()> {
        let removed = self
            .book_mut(copy.book)
            .take_copy(copy)
            .ok_or_else(|| self.copy_not_found(copy))?;

        if removed.status() != CopyStatus::Available {
            warn!(
                title = self.book(copy.book).title(),
                serial = copy.serial,
                status = removed.status().as_str(),
                "removed a copy that was not on the shelf"
            );
            if let Some(borrower) = removed.borrower() {
                self.patron_mut(borrower).remove_copy(copy);
            }
        }
        Ok(())
    }

    /// Checks out the earliest-added available copy of `book` to `patron`,
    /// dated today. Fails with [`Error::NoCopyAvailable`] and no state change
    /// if every copy is out.
    pub fn borrow_copy(&mut self, book: BookId, patron: PatronId) -> Result<CopyId> {
        self.borrow_copy_dated(book, patron, Utc::now().date_naive())
    }

    /// Borrows exactly `count` copies, all-or-nothing: the available count is
    /// checked once up front, and on shortfall nothing is borrowed.
    ///
    /// The single up-front check is sound only because the library is
    /// mutated from one thread of control; nothing can change availability
    /// between the check and the loop.
    pub fn borrow_copies(
        &mut self,
        book: BookId,
        patron: PatronId,
        count: usize,
    ) -> Result<Vec<CopyId>> {
        let available = self.book(book).available_count();
        if available < count {
            return Err(Error::InsufficientCopies {
                title: self.book(book).title().to_string(),
                requested: count,
                available,
            });
        }

        let mut borrowed = Vec::with_capacity(count);
        for _ in 0..count {
            borrowed.push(self.borrow_copy(book, patron)?);
        }
        Ok(borrowed)
    }

    /// Returns a checked-out copy: clears borrower and checkout date, drops
    /// the copy from the former borrower's held-set, and puts it back on the
    /// shelf. Returning a copy that is not checked out is an error and
    /// changes nothing.
    pub fn return_copy(&mut self, copy: CopyId) -> Result<()> {
        let current = self.copy(copy).ok_or_else(|| self.copy_not_found(copy))?;
        let borrower = current.borrower().ok_or_else(|| Error::CopyNotCheckedOut {
            title: self.book(copy.book).title().to_string(),
            serial: copy.serial,
        })?;

        self.patron_mut(borrower).remove_copy(copy);
        if let Some(held) = self.book_mut(copy.book).copy_mut(copy) {
            held.check_in();
        }
        Ok(())
    }

    fn borrow_copy_dated(
        &mut self,
        book: BookId,
        patron: PatronId,
        date: NaiveDate,
    ) -> Result<CopyId> {
        let next = self
            .book(book)
            .next_available_copy()
            .ok_or_else(|| Error::NoCopyAvailable(self.book(book).title().to_string()))?;

        if let Some(copy) = self.book_mut(book).copy_mut(next) {
            copy.check_out(patron, date);
        }
        self.patron_mut(patron).add_copy(next);
        Ok(next)
    }

    fn copy_not_found(&self, copy: CopyId) -> Error {
        Error::CopyNotFound {
            title: self.book(copy.book).title().to_string(),
            serial: copy.serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn library_with_book(copies: usize) -> (Library, BookId, PatronId) {
        let mut library = Library::new();
        let author = library.add_author(
            "Frank Herbert",
            NaiveDate::from_ymd_opt(1920, 10, 8).expect("date"),
        );
        let book = library.add_book("Dune", author, "978-0441013593", "Chilton");
        library.add_copies(book, copies);
        let patron = library.add_patron("Alyse Clover", "1 Packers Trail", "555-0102");
        (library, book, patron)
    }

    #[test]
    fn borrow_sets_copy_and_held_set_together() {
        let (mut library, book, patron) = library_with_book(2);
        let copy = library.borrow_copy(book, patron).expect("borrow");

        let held = library.copy(copy).expect("copy");
        assert_eq!(held.status(), CopyStatus::CheckedOut);
        assert_eq!(held.borrower(), Some(patron));
        assert!(held.checkout_date().is_some());
        assert!(library.patron(patron).checked_out().contains(&copy));
    }

    #[test]
    fn borrow_fails_when_nothing_available() {
        let (mut library, book, patron) = library_with_book(1);
        library.borrow_copy(book, patron).expect("borrow");

        let err = library.borrow_copy(book, patron).expect_err("exhausted");
        assert!(matches!(err, Error::NoCopyAvailable(_)));
        assert_eq!(library.book(book).available_count(), 0);
        assert_eq!(library.patron(patron).checked_out().len(), 1);
    }

    #[test]
    fn return_restores_availability_and_clears_state() {
        let (mut library, book, patron) = library_with_book(2);
        let before = library.book(book).available_count();
        let copy = library.borrow_copy(book, patron).expect("borrow");
        library.return_copy(copy).expect("return");

        let returned = library.copy(copy).expect("copy");
        assert_eq!(returned.status(), CopyStatus::Available);
        assert!(returned.borrower().is_none());
        assert!(returned.checkout_date().is_none());
        assert!(!library.patron(patron).checked_out().contains(&copy));
        assert_eq!(library.book(book).available_count(), before);
    }

    #[test]
    fn return_of_idle_copy_is_an_error() {
        let (mut library, book, _patron) = library_with_book(1);
        let copy = library.book(book).next_available_copy().expect("copy");

        let err = library.return_copy(copy).expect_err("not checked out");
        assert!(matches!(err, Error::CopyNotCheckedOut { .. }));
    }

    #[test]
    fn borrow_copies_is_all_or_nothing() {
        let (mut library, book, patron) = library_with_book(2);
        let err = library.borrow_copies(book, patron, 3).expect_err("shortfall");
        assert!(matches!(
            err,
            Error::InsufficientCopies {
                requested: 3,
                available: 2,
                ..
            }
        ));
        assert_eq!(library.book(book).available_count(), 2);
        assert!(library.patron(patron).checked_out().is_empty());

        let borrowed = library.borrow_copies(book, patron, 2).expect("borrow");
        assert_eq!(borrowed.len(), 2);
        assert_eq!(library.book(book).available_count(), 0);
    }

    #[test]
    fn borrowing_consumes_copies_in_insertion_order() {
        let (mut library, book, patron) = library_with_book(0);
        let first = library.add_copy(book);
        let second = library.add_copy(book);

        assert_eq!(library.borrow_copy(book, patron).expect("borrow"), first);
        assert_eq!(library.book(book).next_available_copy(), Some(second));
    }

    #[test]
    fn removing_checked_out_copy_detaches_borrower() {
        let (mut library, book, patron) = library_with_book(1);
        let copy = library.borrow_copy(book, patron).expect("borrow");

        library.remove_copy(copy).expect("remove");
        assert_eq!(library.book(book).total_copies(), 0);
        assert!(library.patron(patron).checked_out().is_empty());
        assert!(library.copy(copy).is_none());
    }

    #[test]
    fn removing_missing_copy_is_reported() {
        let (mut library, book, _patron) = library_with_book(1);
        let copy = library.book(book).next_available_copy().expect("copy");
        library.remove_copy(copy).expect("remove");

        let err = library.remove_copy(copy).expect_err("already gone");
        assert!(matches!(err, Error::CopyNotFound { .. }));
    }

    #[test]
    fn held_set_queries_see_borrowed_copies() {
        let (mut library, dune, patron) = library_with_book(3);
        let author = library.find_author_by_name("Frank Herbert").expect("author");
        let other = library.add_book("Children of Dune", author, "978-0425043639", "Putnam");
        library.add_copies(other, 1);

        library.borrow_copy(other, patron).expect("borrow other");
        let first_dune = library.borrow_copy(dune, patron).expect("borrow dune");
        let second_dune = library.borrow_copy(dune, patron).expect("borrow dune again");

        // The match must respect the requested book even when another
        // book's copy sits first in the held-set.
        assert_eq!(library.patron(patron).find_copy_of(dune), Some(first_dune));
        assert_eq!(
            library.patron(patron).find_copies_of(dune),
            vec![first_dune, second_dune]
        );
        assert!(library
            .patron(patron)
            .find_copies_of(BookId(99))
            .is_empty());
    }
}
