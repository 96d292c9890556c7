//! Binary search over a sequence sorted ascending by key.

use std::cmp::Ordering;

/// Finds the index of an element whose key equals `target`.
///
/// `items` must be sorted ascending by `key`; on unsorted input the result is
/// unspecified. The search halves an inclusive `[lo, hi]` range at
/// `(lo + hi) / 2`. When several elements share the target key, the index
/// returned is whichever one the halving lands on first, not necessarily the
/// first or last of the run.
///
/// # Example
///
/// ```rust
/// use shelfdb::search::binary_search_by_key;
///
/// let ids = [1, 4, 9, 16];
/// assert_eq!(binary_search_by_key(&ids, &9, |&x| x), Some(2));
/// assert_eq!(binary_search_by_key(&ids, &5, |&x| x), None);
/// ```
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = items.len() - 1;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match key(&items[mid]).cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
        }
    }

    None
}
