//! # Shelfz - An Insertion-Ordered Bookshelf
//!
//! A small in-memory catalog: a [`Shelf`] holds [`Book`] records in the
//! order they were added and answers three kinds of questions about them:
//!
//! - **What's on the shelf?** [`Shelf::books`] — the contents in strict
//!   insertion order, as a read-only view.
//! - **What would it look like sorted?** [`Shelf::arrange`] /
//!   [`Shelf::arrange_by`] — a fresh, stably-sorted copy under the natural
//!   title order or any caller-supplied criterion.
//! - **What goes together?** [`Shelf::group_by_publication_year`] /
//!   [`Shelf::group_by`] — partitions under a derived key, each bucket in
//!   insertion order.
//!
//! Arranging and grouping never touch the stored order; they are
//! projections, and `books()` reports the same sequence before and after.
//!
//! ## Quick Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shelfz::{Book, Shelf};
//!
//! let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//!
//! let mut shelf = Shelf::new();
//! shelf.add([
//!     Book::new("Effective Java", "Joshua Bloch", date(2008, 5, 8)),
//!     Book::new("Code Complete", "Steve McConnell", date(2004, 6, 9)),
//!     Book::new("Clean Code", "Robert C. Martin", date(2008, 8, 1)),
//! ]);
//!
//! // Insertion order is the stored order.
//! assert_eq!(shelf.books()[0].title(), "Effective Java");
//!
//! // Arranged copies leave it untouched.
//! let by_title = shelf.arrange();
//! assert_eq!(by_title[0].title(), "Clean Code");
//! assert_eq!(shelf.books()[0].title(), "Effective Java");
//!
//! // Grouping partitions by a derived key.
//! let by_year = shelf.group_by_publication_year();
//! assert_eq!(by_year[&2008].len(), 2);
//! ```
//!
//! ## Ownership Model
//!
//! A shelf is exclusively owned by one caller: `add` takes `&mut self`, so
//! aliased mutation is rejected at compile time, and the view returned by
//! `books()` is a shared slice that cannot be written through. Books
//! themselves are immutable values and freely shareable.

pub mod model;
pub mod shelf;

pub use model::Book;
pub use shelf::Shelf;
