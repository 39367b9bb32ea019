//! Core data type for the catalog: the [`Book`] record.
//!
//! A book is a plain immutable value. It carries no identity beyond its
//! fields, so two records with identical fields compare equal yet still
//! occupy two slots when both are shelved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An immutable bibliographic record: title, author, publication date.
///
/// Equality is structural over all three fields. Ordering is a separate
/// concern: the natural arrangement criterion compares titles only, via
/// [`Book::by_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    published_on: NaiveDate,
}

impl Book {
    /// Creates a book record.
    ///
    /// `title` and `author` are expected to be non-empty and `published_on`
    /// a real calendar date; the constructor does not police its callers.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_on: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_on,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    /// The natural arrangement criterion: case-sensitive lexicographic
    /// comparison of titles, ascending.
    ///
    /// This is a named comparator rather than an `Ord` impl on purpose.
    /// Equality covers all fields, and an `Ord` that reports `Equal` for
    /// books differing in author or date would break the `Ord`/`Eq`
    /// contract. Compose reversals and tie-breaks at the call site:
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use shelfz::Book;
    ///
    /// let date = NaiveDate::from_ymd_opt(2008, 5, 8).unwrap();
    /// let a = Book::new("Code Complete", "Steve McConnell", date);
    /// let b = Book::new("Effective Java", "Joshua Bloch", date);
    ///
    /// assert!(Book::by_title(&a, &b).is_lt());
    /// assert!(Book::by_title(&a, &b).reverse().is_gt());
    /// ```
    pub fn by_title(a: &Book, b: &Book) -> Ordering {
        a.title.cmp(&b.title)
    }
}
