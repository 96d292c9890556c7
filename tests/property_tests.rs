// Property Tests for shelfdb
// Randomized checks of the ordering invariant, lookup and persistence

use proptest::prelude::*;
use shelfdb::search::binary_search_by_key;
use shelfdb::sort::{is_sorted_by_key, quicksort_by_key};
use shelfdb::{Book, Catalog};
use std::collections::HashSet;
use tempfile::TempDir;

fn book_strategy() -> impl Strategy<Value = (i64, String, String)> {
    (-50i64..50, "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}")
}

proptest! {
    #[test]
    fn prop_sort_matches_std_stable_sort(items in prop::collection::vec((-20i32..20, any::<u8>()), 0..200)) {
        let mut expected = items.clone();
        expected.sort_by_key(|&(k, _)| k);

        let sorted = quicksort_by_key(items, |&(k, _)| k);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sort_idempotent(items in prop::collection::vec((-20i32..20, any::<u8>()), 0..200)) {
        let once = quicksort_by_key(items, |&(k, _)| k);
        let twice = quicksort_by_key(once.clone(), |&(k, _)| k);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_search_finds_present_keys(mut keys in prop::collection::vec(-1000i64..1000, 0..200), probe in -1000i64..1000) {
        keys.sort();
        match binary_search_by_key(&keys, &probe, |&k| k) {
            Some(idx) => prop_assert_eq!(keys[idx], probe),
            None => prop_assert!(!keys.contains(&probe)),
        }
    }

    #[test]
    fn prop_sorted_after_every_add(books in prop::collection::vec(book_strategy(), 0..60)) {
        let mut catalog = Catalog::new();
        for (id, title, author) in books {
            catalog.add(id, title, author);
            prop_assert!(is_sorted_by_key(catalog.books(), Book::book_id));
        }
    }

    #[test]
    fn prop_find_by_id_iff_added(books in prop::collection::vec(book_strategy(), 0..60), probe in -60i64..60) {
        let mut catalog = Catalog::new();
        let mut added = HashSet::new();
        for (id, title, author) in books {
            added.insert(id);
            catalog.add(id, title, author);
        }

        let found = catalog.find_by_id(probe);
        prop_assert_eq!(found.is_some(), added.contains(&probe));
        if let Some(book) = found {
            prop_assert_eq!(book.book_id(), probe);
        }
    }

    #[test]
    fn prop_save_load_round_trip(books in prop::collection::vec(book_strategy(), 0..40)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");

        let catalog = Catalog::from_books(books.into_iter().map(|(id, t, a)| Book::new(id, t, a)));
        catalog.save(&path).unwrap();

        let mut loaded = Catalog::new();
        loaded.load(&path).unwrap();
        prop_assert_eq!(loaded.books(), catalog.books());
    }
}
