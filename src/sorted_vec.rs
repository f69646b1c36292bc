//! Sorted, duplicate-free vector algebra.
//!
//! The relation containers store each key's counterparts as an ordered,
//! duplicate-free `Vec`. The free functions here are the only way those
//! buckets are manipulated: binary-searched point operations, plus linear
//! two-pointer merge and difference used by the batched multi-pair paths.
//!
//! All functions are stateless and deterministic. Point operations are
//! `O(log n)`; [`merge_sorted`] and [`subtract_sorted`] are `O(n + m)`.

use std::cmp::Ordering;

/// Returns true if `value` occurs in `sorted`.
///
/// # Examples
/// ```rust
/// use binary_relations::sorted_vec::contains_sorted;
///
/// let vec = vec![1, 3, 5];
/// assert!(contains_sorted(&vec, &3));
/// assert!(!contains_sorted(&vec, &4));
/// ```
pub fn contains_sorted<T: Ord>(sorted: &[T], value: &T) -> bool {
    sorted.binary_search(value).is_ok()
}

/// Returns the position of `value` in `sorted`, or `None` if it is absent.
pub fn find_sorted<T: Ord>(sorted: &[T], value: &T) -> Option<usize> {
    sorted.binary_search(value).ok()
}

/// Inserts `value` into `sorted` at its ordered position.
///
/// Returns false (and leaves the vector untouched) if the value is already
/// present.
///
/// # Examples
/// ```rust
/// use binary_relations::sorted_vec::insert_sorted;
///
/// let mut vec = vec![1, 5];
/// assert!(insert_sorted(&mut vec, 3));
/// assert!(!insert_sorted(&mut vec, 3));
/// assert_eq!(vec, vec![1, 3, 5]);
/// ```
pub fn insert_sorted<T: Ord>(sorted: &mut Vec<T>, value: T) -> bool {
    match sorted.binary_search(&value) {
        Ok(_) => false,
        Err(pos) => {
            sorted.insert(pos, value);
            true
        }
    }
}

/// Removes `value` from `sorted`.
///
/// Returns false if the value is absent.
pub fn erase_sorted<T: Ord>(sorted: &mut Vec<T>, value: &T) -> bool {
    match sorted.binary_search(value) {
        Ok(pos) => {
            sorted.remove(pos);
            true
        }
        Err(_) => false,
    }
}

/// Merges two sorted, duplicate-free slices into one sorted, duplicate-free
/// vector in a single linear pass.
///
/// A value occurring in both inputs appears once in the output.
///
/// # Examples
/// ```rust
/// use binary_relations::sorted_vec::merge_sorted;
///
/// let merged = merge_sorted(&[1, 3, 5], &[2, 3, 6]);
/// assert_eq!(merged, vec![1, 2, 3, 5, 6]);
/// ```
pub fn merge_sorted<T: Ord + Clone>(source: &[T], to_insert: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(source.len() + to_insert.len());
    let mut s = 0;
    let mut i = 0;
    while s < source.len() && i < to_insert.len() {
        match source[s].cmp(&to_insert[i]) {
            Ordering::Equal => {
                merged.push(source[s].clone());
                s += 1;
                i += 1;
            }
            Ordering::Less => {
                merged.push(source[s].clone());
                s += 1;
            }
            Ordering::Greater => {
                merged.push(to_insert[i].clone());
                i += 1;
            }
        }
    }
    merged.extend_from_slice(&source[s..]);
    merged.extend_from_slice(&to_insert[i..]);
    merged
}

/// Subtracts one sorted, duplicate-free slice from another in a single linear
/// pass.
///
/// Elements of `source` that occur in `to_erase` are dropped; elements of
/// `to_erase` with no match in `source` are ignored.
///
/// # Examples
/// ```rust
/// use binary_relations::sorted_vec::subtract_sorted;
///
/// let remainder = subtract_sorted(&[1, 3, 5], &[3, 4]);
/// assert_eq!(remainder, vec![1, 5]);
/// ```
pub fn subtract_sorted<T: Ord + Clone>(source: &[T], to_erase: &[T]) -> Vec<T> {
    let mut remainder = Vec::with_capacity(source.len());
    let mut s = 0;
    let mut e = 0;
    while s < source.len() && e < to_erase.len() {
        match source[s].cmp(&to_erase[e]) {
            Ordering::Equal => {
                s += 1;
                e += 1;
            }
            Ordering::Less => {
                remainder.push(source[s].clone());
                s += 1;
            }
            Ordering::Greater => {
                e += 1;
            }
        }
    }
    remainder.extend_from_slice(&source[s..]);
    remainder
}
