//! End-to-end lending scenarios against the library crate.

use biblio::book::CopyStatus;
use biblio::error::Error;
use biblio::Library;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("date")
}

#[test]
fn dune_three_copy_scenario() {
    let mut library = Library::new();
    let herbert = library.add_author("Frank Herbert", date(1920, 10, 8));
    let dune = library.add_book("Dune", herbert, "978-0441013593", "Chilton");
    library.add_copies(dune, 3);

    let a = library.add_patron("Alyse Clover", "1 Packers Trail", "555-0102");
    let b = library.add_patron("Leland Sanper", "71630 Mcguire Circle", "555-0103");
    let c = library.add_patron("Leif Eldrett", "221 Lullaby Lane", "555-0104");

    // Patron A borrows 2.
    library.borrow_copies(dune, a, 2).expect("borrow two");
    assert_eq!(library.book(dune).available_count(), 1);
    let held = library.patron(a).checked_out();
    assert_eq!(held.len(), 2);
    assert!(held.iter().all(|copy| copy.book == dune));

    // Patron B borrows the last one.
    library.borrow_copy(dune, b).expect("borrow last");
    assert_eq!(library.book(dune).available_count(), 0);

    // Patron C is out of luck, and nothing changes.
    let err = library.borrow_copy(dune, c).expect_err("exhausted");
    assert!(matches!(err, Error::NoCopyAvailable(_)));
    assert_eq!(library.book(dune).available_count(), 0);
    assert_eq!(library.book(dune).unavailable_count(), 3);
    assert!(library.patron(c).checked_out().is_empty());
}

#[test]
fn borrow_then_return_round_trip() {
    let mut library = Library::new();
    let author = library.add_author("Jane Doe", date(1970, 1, 15));
    let book = library.add_book("First", author, "111", "Press");
    library.add_copies(book, 2);
    let patron = library.add_patron("Leif Eldrett", "221 Lullaby Lane", "555-0104");

    let before = library.book(book).available_count();
    let copy = library.borrow_copy(book, patron).expect("borrow");
    assert_eq!(
        library.copy(copy).expect("copy").status(),
        CopyStatus::CheckedOut
    );

    library.return_copy(copy).expect("return");
    assert_eq!(library.book(book).available_count(), before);
    assert!(library.patron(patron).checked_out().is_empty());
}

#[test]
fn patron_returns_via_held_set_lookup() {
    // The original demo flow: find the patron's copy of a book, return it.
    let mut library = Library::new();
    let author = library.add_author("Jane Doe", date(1970, 1, 15));
    let fifth = library.add_book("This is the Fifth Book", author, "555", "Press");
    library.add_copies(fifth, 4);
    let patron = library.add_patron("Alyse Clover", "1 Packers Trail", "555-0102");

    library.borrow_copies(fifth, patron, 2).expect("borrow");
    let held = library
        .patron(patron)
        .find_copy_of(fifth)
        .expect("held copy");
    library.return_copy(held).expect("return");

    assert_eq!(library.book(fifth).available_count(), 3);
    assert_eq!(library.patron(patron).checked_out().len(), 1);
}

#[test]
fn bibliography_tracks_both_books() {
    let mut library = Library::new();
    let doe = library.add_author("Jane Doe", date(1970, 1, 15));
    library.add_book("First", doe, "111", "Press");
    library.add_book("Second", doe, "222", "Press");

    let bibliography = library.author(doe).bibliography();
    assert_eq!(bibliography.len(), 2);
    for book in bibliography {
        assert_eq!(library.book(*book).author(), doe);
    }
}

#[test]
fn counts_always_partition_total() {
    let mut library = Library::new();
    let author = library.add_author("Jane Doe", date(1970, 1, 15));
    let book = library.add_book("First", author, "111", "Press");
    library.add_copies(book, 5);
    let patron = library.add_patron("Leif Eldrett", "221 Lullaby Lane", "555-0104");

    for borrowed in 0..=3 {
        assert_eq!(
            library.book(book).available_count() + library.book(book).unavailable_count(),
            library.book(book).total_copies()
        );
        assert_eq!(library.book(book).unavailable_count(), borrowed);
        library.borrow_copy(book, patron).expect("borrow");
    }
}
