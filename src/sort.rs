//! Three-way quicksort.
//!
//! The pivot is the middle element of the current sequence. Every element is
//! routed into a `less`, `equal` or `greater` partition in its original
//! relative order, the outer two are sorted recursively, and the three are
//! concatenated. Equal keys therefore keep their input order.
//!
//! The partitions are fresh vectors, so the sort needs O(n) extra space.
//! Average time is O(n log n), worst case O(n²). Recursion depth is bounded by
//! the number of distinct keys, which can reach n on unlucky pivots, so this
//! is meant for catalogs small enough that such a stack is harmless.

/// Sorts `items` ascending by the key returned from `key`.
///
/// # Example
///
/// ```rust
/// use shelfdb::sort::quicksort_by_key;
///
/// let sorted = quicksort_by_key(vec![(3, 'c'), (1, 'a'), (3, 'b')], |&(k, _)| k);
/// assert_eq!(sorted, vec![(1, 'a'), (3, 'c'), (3, 'b')]);
/// ```
pub fn quicksort_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_recursive(items, &key)
}

fn sort_recursive<T, K, F>(items: Vec<T>, key: &F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let pivot = key(&items[items.len() / 2]);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in items {
        match key(&item).cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(item),
            std::cmp::Ordering::Equal => equal.push(item),
            std::cmp::Ordering::Greater => greater.push(item),
        }
    }

    let mut sorted = sort_recursive(less, key);
    sorted.append(&mut equal);
    sorted.append(&mut sort_recursive(greater, key));
    sorted
}

/// Returns true if `items` is ascending by `key`.
pub fn is_sorted_by_key<T, K, F>(items: &[T], key: F) -> bool
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.windows(2).all(|pair| key(&pair[0]) <= key(&pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<i32> = Vec::new();
        assert!(quicksort_by_key(empty, |&x| x).is_empty());
        assert_eq!(quicksort_by_key(vec![42], |&x| x), vec![42]);
    }

    #[test]
    fn test_sorts_ascending() {
        let sorted = quicksort_by_key(vec![5, 3, 9, 1, 7, 2, 8], |&x| x);
        assert_eq!(sorted, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_reverse_and_sorted_input() {
        let reversed: Vec<i64> = (0..200).rev().collect();
        let sorted = quicksort_by_key(reversed, |&x| x);
        assert_eq!(sorted, (0..200).collect::<Vec<_>>());

        let again = quicksort_by_key(sorted.clone(), |&x| x);
        assert_eq!(again, sorted);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let items = vec![(2, "first"), (1, "a"), (2, "second"), (0, "z"), (2, "third")];
        let sorted = quicksort_by_key(items, |&(k, _)| k);
        assert_eq!(sorted, vec![(0, "z"), (1, "a"), (2, "first"), (2, "second"), (2, "third")]);
    }

    #[test]
    fn test_negative_keys() {
        let sorted = quicksort_by_key(vec![0, -5, 3, i64::MIN, i64::MAX], |&x| x);
        assert_eq!(sorted, vec![i64::MIN, -5, 0, 3, i64::MAX]);
    }

    #[test]
    fn test_is_sorted_by_key() {
        assert!(is_sorted_by_key(&[1, 1, 2, 3], |&x| x));
        assert!(is_sorted_by_key::<i32, i32, _>(&[], |&x| x));
        assert!(!is_sorted_by_key(&[2, 1], |&x| x));
    }
}
