//! The [`Shelf`]: an insertion-ordered, in-memory book container.
//!
//! The shelf owns its records and hands out three kinds of read access:
//!
//! - [`Shelf::books`] — the contents exactly as they were added, as a
//!   read-only slice. Insertion order is the one stored order; nothing
//!   reorders it.
//! - [`Shelf::arrange`] / [`Shelf::arrange_by`] — freshly ordered copies
//!   under the natural (title) criterion or a caller-supplied one. Sorting
//!   is stable: criterion-equal books keep their insertion order.
//! - [`Shelf::group_by_publication_year`] / [`Shelf::group_by`] —
//!   partitions of the contents under a derived key, each bucket in
//!   insertion order.
//!
//! Arranging and grouping are projections. They never write back into the
//! shelf; `books()` reports the same sequence before and after.

use crate::model::Book;
use chrono::Datelike;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// An in-memory catalog of [`Book`] records in insertion order.
///
/// A shelf starts empty, grows only through [`Shelf::add`], and is owned
/// and mutated by a single caller at a time: `add` takes `&mut self`, so
/// exclusive mutation is enforced at compile time. The books it holds are
/// immutable values and freely shareable.
#[derive(Debug, Default)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    /// Creates an empty shelf.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Appends zero or more books, in the given order, to the end of the
    /// shelf.
    ///
    /// Accepts anything iterable over [`Book`], which covers the single,
    /// the bulk, and the empty call alike; adding an empty batch is a
    /// no-op. Books with identical fields are kept as distinct entries —
    /// the shelf is a sequence, not a set.
    pub fn add<I>(&mut self, books: I)
    where
        I: IntoIterator<Item = Book>,
    {
        self.books.extend(books);
    }

    /// The current contents in strict insertion order.
    ///
    /// The returned slice is a read-only view of the shelf's own storage.
    /// Mutating through it does not compile, so internal state is never
    /// observable as mutable:
    ///
    /// ```compile_fail
    /// use chrono::NaiveDate;
    /// use shelfz::{Book, Shelf};
    ///
    /// let mut shelf = Shelf::new();
    /// let date = NaiveDate::from_ymd_opt(2008, 5, 8).unwrap();
    /// shelf.add([Book::new("Effective Java", "Joshua Bloch", date)]);
    ///
    /// let books = shelf.books();
    /// books[0] = Book::new("Hijacked", "Nobody", date); // E0594
    /// ```
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use shelfz::{Book, Shelf};
    ///
    /// let mut shelf = Shelf::new();
    /// shelf.add([
    ///     Book::new("Effective Java", "Joshua Bloch", NaiveDate::from_ymd_opt(2008, 5, 8).unwrap()),
    ///     Book::new("Code Complete", "Steve McConnell", NaiveDate::from_ymd_opt(2004, 6, 9).unwrap()),
    /// ]);
    ///
    /// let titles: Vec<_> = shelf.books().iter().map(Book::title).collect();
    /// assert_eq!(titles, ["Effective Java", "Code Complete"]);
    /// ```
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// A new sequence of all current books arranged by the natural
    /// criterion: title, ascending. Equal titles keep their insertion
    /// order.
    ///
    /// The shelf itself is untouched — [`Shelf::books`] still reports
    /// insertion order afterwards.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use shelfz::{Book, Shelf};
    /// # let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let mut shelf = Shelf::new();
    /// shelf.add([
    ///     Book::new("Effective Java", "Joshua Bloch", date(2008, 5, 8)),
    ///     Book::new("Code Complete", "Steve McConnell", date(2004, 6, 9)),
    /// ]);
    ///
    /// let arranged = shelf.arrange();
    /// assert_eq!(arranged[0].title(), "Code Complete");
    /// assert_eq!(shelf.books()[0].title(), "Effective Java");
    /// ```
    #[must_use]
    pub fn arrange(&self) -> Vec<Book> {
        self.arrange_by(Book::by_title)
    }

    /// A new sequence of all current books arranged by a caller-supplied
    /// criterion.
    ///
    /// The sort is stable — books the criterion considers equal keep their
    /// relative insertion order, which is what makes derived-key
    /// arrangements (by author, by year) deterministic. The shelf itself
    /// is untouched.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use shelfz::{Book, Shelf};
    /// # let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let mut shelf = Shelf::new();
    /// shelf.add([
    ///     Book::new("Effective Java", "Joshua Bloch", date(2008, 5, 8)),
    ///     Book::new("Code Complete", "Steve McConnell", date(2004, 6, 9)),
    /// ]);
    ///
    /// let newest_first =
    ///     shelf.arrange_by(|a, b| b.published_on().cmp(&a.published_on()));
    /// assert_eq!(newest_first[0].title(), "Effective Java");
    /// ```
    #[must_use]
    pub fn arrange_by<F>(&self, criterion: F) -> Vec<Book>
    where
        F: FnMut(&Book, &Book) -> Ordering,
    {
        let mut arranged = self.books.clone();
        // sort_by is stable; equal-criterion books stay in insertion order.
        arranged.sort_by(criterion);
        arranged
    }

    /// Partitions the current contents by calendar year of publication.
    ///
    /// Keys are exactly the distinct years present; no bucket is empty,
    /// and within a bucket books appear in insertion order.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use shelfz::{Book, Shelf};
    /// # let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let mut shelf = Shelf::new();
    /// shelf.add([
    ///     Book::new("Effective Java", "Joshua Bloch", date(2008, 5, 8)),
    ///     Book::new("Code Complete", "Steve McConnell", date(2004, 6, 9)),
    ///     Book::new("Clean Code", "Robert C. Martin", date(2008, 8, 1)),
    /// ]);
    ///
    /// let by_year = shelf.group_by_publication_year();
    /// assert_eq!(by_year[&2008].len(), 2);
    /// assert_eq!(by_year[&2004][0].title(), "Code Complete");
    /// ```
    #[must_use]
    pub fn group_by_publication_year(&self) -> BTreeMap<i32, Vec<Book>> {
        self.group_by(|book| book.published_on().year())
    }

    /// Partitions the current contents by an arbitrary derived key.
    ///
    /// Same guarantees as [`Shelf::group_by_publication_year`]: every book
    /// lands in exactly one bucket, buckets preserve insertion order, and
    /// only keys that actually occur are present.
    #[must_use]
    pub fn group_by<K, F>(&self, mut key_fn: F) -> BTreeMap<K, Vec<Book>>
    where
        K: Ord,
        F: FnMut(&Book) -> K,
    {
        let mut groups: BTreeMap<K, Vec<Book>> = BTreeMap::new();
        for book in &self.books {
            groups.entry(key_fn(book)).or_default().push(book.clone());
        }
        groups
    }
}
