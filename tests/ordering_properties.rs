//! Property-based coverage of the shelf's ordering and grouping contracts.
//!
//! The stability oracle decorates each book with its insertion index and
//! sorts by `(key, index)`; a stable sort must produce exactly that order.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use shelfz::{Book, Shelf};

fn arb_book() -> impl Strategy<Value = Book> {
    // Titles and authors drawn from small pools so that criterion ties and
    // shared group keys actually occur.
    let title = prop::sample::select(vec![
        "Refactoring",
        "Clean Code",
        "Effective Java",
        "Code Complete",
        "The Mythical Man-Month",
        "Domain-Driven Design",
    ]);
    let author = prop::sample::select(vec![
        "Martin Fowler",
        "Robert C. Martin",
        "Joshua Bloch",
        "Steve McConnell",
        "Frederick Phillips Brooks",
        "Eric Evans",
    ]);
    let date = (1970i32..2026, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());

    (title, author, date).prop_map(|(t, a, d)| Book::new(t, a, d))
}

fn arb_batches() -> impl Strategy<Value = Vec<Vec<Book>>> {
    prop::collection::vec(prop::collection::vec(arb_book(), 0..6), 0..6)
}

/// Reference order for a stable title sort: decorate with insertion index,
/// sort by `(title, index)`.
fn stable_title_oracle(books: &[Book]) -> Vec<Book> {
    let mut decorated: Vec<(usize, &Book)> = books.iter().enumerate().collect();
    decorated.sort_by(|(i, a), (j, b)| a.title().cmp(b.title()).then(i.cmp(j)));
    decorated.into_iter().map(|(_, b)| b.clone()).collect()
}

proptest! {
    #[test]
    fn books_is_the_concatenation_of_all_adds(batches in arb_batches()) {
        let mut shelf = Shelf::new();
        let mut expected = Vec::new();
        for batch in batches {
            expected.extend(batch.iter().cloned());
            shelf.add(batch);
            // Projections between adds must not disturb the stored order.
            let _ = shelf.arrange();
            let _ = shelf.group_by_publication_year();
        }
        prop_assert_eq!(shelf.books(), expected.as_slice());
    }

    #[test]
    fn adding_an_empty_batch_changes_nothing(books in prop::collection::vec(arb_book(), 0..12)) {
        let mut shelf = Shelf::new();
        shelf.add(books.clone());
        shelf.add([]);
        prop_assert_eq!(shelf.books(), books.as_slice());
    }

    #[test]
    fn arrange_is_a_stable_sorted_permutation(books in prop::collection::vec(arb_book(), 0..12)) {
        let mut shelf = Shelf::new();
        shelf.add(books.clone());

        let arranged = shelf.arrange();
        prop_assert_eq!(&arranged, &stable_title_oracle(&books));

        // Non-mutation: the stored order is untouched.
        prop_assert_eq!(shelf.books(), books.as_slice());
    }

    #[test]
    fn arrange_by_respects_any_criterion(books in prop::collection::vec(arb_book(), 0..12)) {
        let mut shelf = Shelf::new();
        shelf.add(books.clone());

        let arranged = shelf.arrange_by(|a, b| {
            a.published_on().year().cmp(&b.published_on().year())
        });

        // Sorted under the criterion, and stable: a year-decorated oracle
        // must agree exactly.
        let mut decorated: Vec<(usize, &Book)> = books.iter().enumerate().collect();
        decorated.sort_by(|(i, a), (j, b)| {
            a.published_on()
                .year()
                .cmp(&b.published_on().year())
                .then(i.cmp(j))
        });
        let oracle: Vec<Book> = decorated.into_iter().map(|(_, b)| b.clone()).collect();

        prop_assert_eq!(arranged, oracle);
        prop_assert_eq!(shelf.books(), books.as_slice());
    }

    #[test]
    fn group_buckets_partition_the_shelf(books in prop::collection::vec(arb_book(), 0..12)) {
        let mut shelf = Shelf::new();
        shelf.add(books.clone());

        let by_year = shelf.group_by_publication_year();

        // No bucket is empty, and every bucket is exactly the
        // insertion-order subsequence of books with that key.
        for (year, bucket) in &by_year {
            prop_assert!(!bucket.is_empty());
            let expected: Vec<Book> = books
                .iter()
                .filter(|b| b.published_on().year() == *year)
                .cloned()
                .collect();
            prop_assert_eq!(bucket, &expected);
        }

        // Union covers the contents with no omission or duplication.
        let total: usize = by_year.values().map(Vec::len).sum();
        prop_assert_eq!(total, books.len());

        // Keys are exactly the distinct years present.
        for book in &books {
            prop_assert!(by_year.contains_key(&book.published_on().year()));
        }
    }

    #[test]
    fn group_by_arbitrary_key_preserves_per_bucket_order(books in prop::collection::vec(arb_book(), 0..12)) {
        let mut shelf = Shelf::new();
        shelf.add(books.clone());

        let by_author = shelf.group_by(|b| b.author().to_owned());

        for (author, bucket) in &by_author {
            let expected: Vec<Book> = books
                .iter()
                .filter(|b| b.author() == author)
                .cloned()
                .collect();
            prop_assert_eq!(bucket, &expected);
        }

        let total: usize = by_author.values().map(Vec::len).sum();
        prop_assert_eq!(total, books.len());
    }
}
