//! The library aggregate: canonical entity collections, registration, and
//! lookups.
//!
//! All cross-references between entities are typed handles into the
//! collections owned here. Authors, books, and patrons are append-only, so
//! an `AuthorId`/`BookId`/`PatronId` issued by a `Library` never goes stale.
//! Copies can be removed from a book, so `CopyId` lookups return `Option`.
//!
//! Lookups are deliberately linear scans with first-match-wins tie-breaks;
//! at catalog scale an index would only complicate duplicate-name behavior.

use chrono::NaiveDate;
use serde::Serialize;

use crate::author::Author;
use crate::book::{Book, BookCopy};
use crate::patron::Patron;

/// Handle to an [`Author`] registered in a [`Library`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AuthorId(pub(crate) usize);

/// Handle to a [`Book`] registered in a [`Library`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BookId(pub(crate) usize);

/// Handle to a [`Patron`] registered in a [`Library`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PatronId(pub(crate) usize);

/// Stable handle to one physical copy: the owning book plus the copy's
/// per-book serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CopyId {
    pub book: BookId,
    pub serial: u32,
}

/// The full library system. Owns every author, book, and patron; everything
/// else refers to them by handle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Library {
    authors: Vec<Author>,
    books: Vec<Book>,
    patrons: Vec<Patron>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    /// Ids are only issued by this library and entities are never
    /// deregistered, so these direct accessors cannot dangle.
    pub fn author(&self, id: AuthorId) -> &Author {
        &self.authors[id.0]
    }

    pub fn book(&self, id: BookId) -> &Book {
        &self.books[id.0]
    }

    pub fn patron(&self, id: PatronId) -> &Patron {
        &self.patrons[id.0]
    }

    pub fn author_mut(&mut self, id: AuthorId) -> &mut Author {
        &mut self.authors[id.0]
    }

    pub fn book_mut(&mut self, id: BookId) -> &mut Book {
        &mut self.books[id.0]
    }

    pub fn patron_mut(&mut self, id: PatronId) -> &mut Patron {
        &mut self.patrons[id.0]
    }

    /// Resolves a copy handle, if the copy is still owned by its book.
    pub fn copy(&self, id: CopyId) -> Option<&BookCopy> {
        self.book(id.book).copy(id)
    }

    /// Registers a new author and returns its handle.
    pub fn add_author(&mut self, name: impl Into<String>, date_of_birth: NaiveDate) -> AuthorId {
        let id = AuthorId(self.authors.len());
        self.authors.push(Author::new(id, name, date_of_birth));
        id
    }

    /// Registers a new patron and returns its handle.
    pub fn add_patron(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> PatronId {
        let id = PatronId(self.patrons.len());
        self.patrons.push(Patron::new(id, name, address, phone));
        id
    }

    /// Registers a new book and appends it to its author's bibliography.
    /// This is the only place a bibliography grows; a book's author is fixed
    /// at registration.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: AuthorId,
        isbn: impl Into<String>,
        publisher: impl Into<String>,
    ) -> BookId {
        let id = BookId(self.books.len());
        self.books.push(Book::new(id, title, author, isbn, publisher));
        self.author_mut(author).add_work(id);
        id
    }

    /// First author whose name matches, ignoring ASCII case.
    pub fn find_author_by_name(&self, name: &str) -> Option<AuthorId> {
        self.authors
            .iter()
            .find(|author| author.name().eq_ignore_ascii_case(name))
            .map(|author| author.id())
    }

    /// First book whose title matches, ignoring ASCII case.
    pub fn find_book_by_title(&self, title: &str) -> Option<BookId> {
        self.books
            .iter()
            .find(|book| book.title().eq_ignore_ascii_case(title))
            .map(|book| book.id())
    }

    /// First book whose ISBN matches, ignoring ASCII case.
    pub fn find_book_by_isbn(&self, isbn: &str) -> Option<BookId> {
        self.books
            .iter()
            .find(|book| book.isbn().eq_ignore_ascii_case(isbn))
            .map(|book| book.id())
    }

    /// Every book whose author's name matches, ignoring ASCII case.
    pub fn find_books_by_author(&self, author_name: &str) -> Vec<BookId> {
        self.books
            .iter()
            .filter(|book| {
                self.author(book.author())
                    .name()
                    .eq_ignore_ascii_case(author_name)
            })
            .map(|book| book.id())
            .collect()
    }

    /// Two-stage patron lookup: all patrons matching the name, then the
    /// first of those matching the address. Both comparisons ignore ASCII
    /// case; either stage coming up empty yields `None`.
    pub fn find_patron(&self, name: &str, address: &str) -> Option<PatronId> {
        let by_name: Vec<&Patron> = self
            .patrons
            .iter()
            .filter(|patron| patron.name().eq_ignore_ascii_case(name))
            .collect();

        by_name
            .into_iter()
            .find(|patron| patron.address().eq_ignore_ascii_case(address))
            .map(|patron| patron.id())
    }
}
