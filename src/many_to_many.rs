use std::{
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
    slice,
};

use hashbrown::{
    hash_map::{self, DefaultHashBuilder},
    HashMap,
};

use crate::sorted_vec::{
    contains_sorted, erase_sorted, find_sorted, insert_sorted, merge_sorted, subtract_sorted,
};

/// A set of `(left, right)` pairs with no restriction on either side.
///
/// Both indexes map a value to the sorted vector of its counterparts, and the
/// two are kept in permanent agreement. Unlike [`OneToMany`] and [`OneToOne`],
/// inserting never evicts anything: adding a pair that is already present is
/// simply a no-op.
///
/// Pair lookups binary-search the smaller of the two candidate buckets, so
/// `contains` stays cheap even when one side is heavily connected.
///
/// [`OneToMany`]: crate::OneToMany
/// [`OneToOne`]: crate::OneToOne
///
/// # Examples
/// ```
/// use binary_relations::ManyToMany;
///
/// let mut tags: ManyToMany<u64, &str> = ManyToMany::new();
///
/// tags.insert(1, "x");
/// tags.insert(2, "x");
///
/// // Both pairs coexist
/// assert!(tags.contains(&1, &"x"));
/// assert!(tags.contains(&2, &"x"));
/// assert_eq!(tags.len(), 2);
///
/// assert_eq!(tags.get_left(&"x"), &[1, 2]);
/// ```
#[derive(Clone)]
pub struct ManyToMany<L, R, S = DefaultHashBuilder> {
    left_index: HashMap<L, Vec<R>, S>,
    right_index: HashMap<R, Vec<L>, S>,
    pair_count: usize,
}

impl<L, R> ManyToMany<L, R, DefaultHashBuilder> {
    /// Creates a new, empty ManyToMany
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new ManyToMany whose indexes each have the given capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<L, R, S> ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    /// Adds a pair to the set.
    ///
    /// Returns false (and changes nothing) if the pair is already present.
    pub fn insert(&mut self, left: L, right: R) -> bool {
        if self.contains(&left, &right) {
            return false;
        }
        let l_bucket = self.left_index.entry(left.clone()).or_default();
        insert_sorted(l_bucket, right.clone());
        let r_bucket = self.right_index.entry(right).or_default();
        insert_sorted(r_bucket, left);
        self.pair_count += 1;
        true
    }

    /// Adds multiple pairs to the set in two batched passes.
    ///
    /// The input is processed once sorted by (left, right) to merge right
    /// values into the left buckets, and once sorted by (right, left) to merge
    /// left values into the right buckets, touching each key once instead of
    /// once per pair. Pairs already present are ignored.
    pub fn insert_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut to_insert: Vec<(L, R)> = pairs.into_iter().collect();
        if to_insert.is_empty() {
            return;
        }
        to_insert.sort_unstable();
        to_insert.dedup();

        // Left pass; the pair count moves by the bucket growth.
        let mut idx = 0;
        while idx < to_insert.len() {
            let left = &to_insert[idx].0;
            let start = idx;
            while idx < to_insert.len() && to_insert[idx].0 == *left {
                idx += 1;
            }
            let rights: Vec<R> = to_insert[start..idx].iter().map(|(_, r)| r.clone()).collect();
            match self.left_index.get_mut(left) {
                Some(bucket) => {
                    let merged = merge_sorted(bucket, &rights);
                    self.pair_count += merged.len() - bucket.len();
                    *bucket = merged;
                }
                None => {
                    self.pair_count += rights.len();
                    self.left_index.insert(left.clone(), rights);
                }
            }
        }

        // Right pass.
        to_insert.sort_unstable_by(|a, b| (&a.1, &a.0).cmp(&(&b.1, &b.0)));
        let mut idx = 0;
        while idx < to_insert.len() {
            let right = &to_insert[idx].1;
            let start = idx;
            while idx < to_insert.len() && to_insert[idx].1 == *right {
                idx += 1;
            }
            let lefts: Vec<L> = to_insert[start..idx].iter().map(|(l, _)| l.clone()).collect();
            match self.right_index.get_mut(right) {
                Some(bucket) => {
                    let merged = merge_sorted(bucket, &lefts);
                    *bucket = merged;
                }
                None => {
                    self.right_index.insert(right.clone(), lefts);
                }
            }
        }
    }

    /// Removes a pair from the set and returns it.
    ///
    /// Nothing happens if the pair is not in the set.
    pub fn erase(&mut self, left: &L, right: &R) -> Option<(L, R)> {
        if !self.contains(left, right) {
            return None;
        }
        let l_bucket = self.left_index.get_mut(left).unwrap();
        let pos = find_sorted(l_bucket, right).unwrap();
        let right_owned = l_bucket.remove(pos);
        if l_bucket.is_empty() {
            self.left_index.remove(left);
        }
        let r_bucket = self.right_index.get_mut(right).unwrap();
        let pos = find_sorted(r_bucket, left).unwrap();
        let left_owned = r_bucket.remove(pos);
        if r_bucket.is_empty() {
            self.right_index.remove(right);
        }
        self.pair_count -= 1;
        Some((left_owned, right_owned))
    }

    /// Removes every pair with the given left value and returns the right
    /// values it was paired with.
    pub fn erase_left(&mut self, left: &L) -> Option<Vec<R>> {
        let rights = self.left_index.remove(left)?;
        self.pair_count -= rights.len();
        for right in &rights {
            let bucket = self.right_index.get_mut(right).unwrap();
            erase_sorted(bucket, left);
            if bucket.is_empty() {
                self.right_index.remove(right);
            }
        }
        Some(rights)
    }

    /// Removes every pair with the given right value and returns the left
    /// values it was paired with.
    pub fn erase_right(&mut self, right: &R) -> Option<Vec<L>> {
        let lefts = self.right_index.remove(right)?;
        self.pair_count -= lefts.len();
        for left in &lefts {
            let bucket = self.left_index.get_mut(left).unwrap();
            erase_sorted(bucket, right);
            if bucket.is_empty() {
                self.left_index.remove(left);
            }
        }
        Some(lefts)
    }

    /// Removes multiple pairs from the set in two batched passes, symmetric
    /// to [`insert_many`]. Pairs not in the set are ignored.
    ///
    /// [`insert_many`]: ManyToMany::insert_many
    pub fn erase_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut to_erase: Vec<(L, R)> = pairs.into_iter().collect();
        if to_erase.is_empty() {
            return;
        }
        to_erase.sort_unstable();
        to_erase.dedup();

        // Left pass; only pairs actually present shrink a bucket, so the
        // count delta falls out of the bucket lengths.
        let mut idx = 0;
        while idx < to_erase.len() {
            let left = &to_erase[idx].0;
            let start = idx;
            while idx < to_erase.len() && to_erase[idx].0 == *left {
                idx += 1;
            }
            let rights: Vec<R> = to_erase[start..idx].iter().map(|(_, r)| r.clone()).collect();
            if let Some(bucket) = self.left_index.get_mut(left) {
                let remainder = subtract_sorted(bucket, &rights);
                self.pair_count -= bucket.len() - remainder.len();
                *bucket = remainder;
            }
            if self.left_index.get(left).map_or(false, Vec::is_empty) {
                self.left_index.remove(left);
            }
        }

        // Right pass. A left value sits in a right bucket exactly when the
        // pair is present, so subtracting is safe without a membership check.
        to_erase.sort_unstable_by(|a, b| (&a.1, &a.0).cmp(&(&b.1, &b.0)));
        let mut idx = 0;
        while idx < to_erase.len() {
            let right = &to_erase[idx].1;
            let start = idx;
            while idx < to_erase.len() && to_erase[idx].1 == *right {
                idx += 1;
            }
            let lefts: Vec<L> = to_erase[start..idx].iter().map(|(l, _)| l.clone()).collect();
            if let Some(bucket) = self.right_index.get_mut(right) {
                let remainder = subtract_sorted(bucket, &lefts);
                *bucket = remainder;
            }
            if self.right_index.get(right).map_or(false, Vec::is_empty) {
                self.right_index.remove(right);
            }
        }
    }

    /// Removes every pair of `other` from this set.
    ///
    /// # Examples
    /// ```rust
    /// use binary_relations::ManyToMany;
    ///
    /// let mut map: ManyToMany<u64, u64> = (0..4).map(|i| (i, i * 10)).collect();
    /// let other: ManyToMany<u64, u64> = (0..2).map(|i| (i, i * 10)).collect();
    /// map.erase_all(&other);
    /// assert_eq!(map.len(), 2);
    /// assert!(!map.contains(&0, &0));
    /// assert!(map.contains(&2, &20));
    /// ```
    pub fn erase_all(&mut self, other: &ManyToMany<L, R, S>) {
        self.erase_many(other.iter().map(|(l, r)| (l.clone(), r.clone())));
    }

    /// Returns `true` if the pair is in the set.
    ///
    /// The smaller of the two candidate buckets is searched.
    pub fn contains(&self, left: &L, right: &R) -> bool {
        match (self.left_index.get(left), self.right_index.get(right)) {
            (Some(l_bucket), Some(r_bucket)) => {
                if l_bucket.len() < r_bucket.len() {
                    contains_sorted(l_bucket, right)
                } else {
                    contains_sorted(r_bucket, left)
                }
            }
            _ => false,
        }
    }

    /// Returns `true` if any pair in the set has this left value.
    pub fn contains_left(&self, left: &L) -> bool {
        self.left_index.contains_key(left)
    }

    /// Returns `true` if any pair in the set has this right value.
    pub fn contains_right(&self, right: &R) -> bool {
        self.right_index.contains_key(right)
    }

    /// Returns all right values paired with the given left value, in
    /// ascending order. The slice is empty if the left value is absent.
    pub fn get_right(&self, left: &L) -> &[R] {
        self.left_index.get(left).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all left values paired with the given right value, in
    /// ascending order. The slice is empty if the right value is absent.
    pub fn get_left(&self, right: &R) -> &[L] {
        self.right_index.get(right).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns an iterator over the pairs in the set.
    ///
    /// Left values come in index order (arbitrary); right values within one
    /// left value come in ascending order.
    pub fn iter(&self) -> Iter<'_, L, R> {
        Iter {
            outer: self.left_index.iter(),
            inner: None,
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the left values in the set
    pub fn iter_left(&self) -> LeftIter<'_, L, R> {
        LeftIter {
            iter: self.left_index.keys(),
        }
    }

    /// Returns an iterator over the right values in the set
    pub fn iter_right(&self) -> RightIter<'_, L, R> {
        RightIter {
            iter: self.right_index.keys(),
        }
    }
}

impl<L, R, S> ManyToMany<L, R, S>
where
    S: Clone,
{
    /// Creates a ManyToMany that uses the given hasher for both indexes
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_hasher(hash_builder.clone()),
            right_index: HashMap::with_hasher(hash_builder),
            pair_count: 0,
        }
    }

    /// Creates a ManyToMany with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_capacity_and_hasher(capacity, hash_builder.clone()),
            right_index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            pair_count: 0,
        }
    }
}

impl<L, R, S> ManyToMany<L, R, S> {
    /// Returns a reference to the [`BuildHasher`] used by the indexes
    pub fn hasher(&self) -> &S {
        self.left_index.hasher()
    }

    /// Returns the number of pairs in the set
    pub fn len(&self) -> usize {
        self.pair_count
    }

    /// Returns the number of distinct left values in the set
    pub fn len_left(&self) -> usize {
        self.left_index.len()
    }

    /// Returns the number of distinct right values in the set
    pub fn len_right(&self) -> usize {
        self.right_index.len()
    }

    /// Returns true if the set holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pair_count == 0
    }

    /// Returns the number of left values the set can hold without reallocation
    pub fn capacity_left(&self) -> usize {
        self.left_index.capacity()
    }

    /// Returns the number of right values the set can hold without reallocation
    pub fn capacity_right(&self) -> usize {
        self.right_index.capacity()
    }

    /// Removes all pairs while keeping the backing memory allocated for reuse
    pub fn clear(&mut self) {
        self.left_index.clear();
        self.right_index.clear();
        self.pair_count = 0;
    }
}

impl<L, R, S> Default for ManyToMany<L, R, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            left_index: HashMap::default(),
            right_index: HashMap::default(),
            pair_count: 0,
        }
    }
}

impl<L, R, S> fmt::Debug for ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone + fmt::Debug,
    R: Hash + Ord + Clone + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<L, R, S> PartialEq for ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(l, r)| other.contains(l, r))
    }
}

impl<L, R, S> Eq for ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
}

impl<L, R, S> Extend<(L, R)> for ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (L, R)>>(&mut self, iter: T) {
        self.insert_many(iter);
    }
}

impl<L, R> FromIterator<(L, R)> for ManyToMany<L, R>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut digest = ManyToMany::default();
        digest.extend(iter);
        digest
    }
}

impl<'a, L, R, S> IntoIterator for &'a ManyToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the pairs of a `ManyToMany`.
pub struct Iter<'a, L, R> {
    outer: hash_map::Iter<'a, L, Vec<R>>,
    inner: Option<(&'a L, slice::Iter<'a, R>)>,
    remaining: usize,
}

impl<L, R> Clone for Iter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<L, R> fmt::Debug for Iter<'_, L, R>
where
    L: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, L, R> Iterator for Iter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((left, rights)) = self.inner.as_mut() {
                if let Some(right) = rights.next() {
                    self.remaining -= 1;
                    return Some((*left, right));
                }
            }
            let (left, bucket) = self.outer.next()?;
            self.inner = Some((left, bucket.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R> ExactSizeIterator for Iter<'_, L, R> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<L, R> FusedIterator for Iter<'_, L, R> {}

/// An iterator over the left values of a `ManyToMany`.
pub struct LeftIter<'a, L, R> {
    iter: hash_map::Keys<'a, L, Vec<R>>,
}

impl<L, R> Clone for LeftIter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<L, R> fmt::Debug for LeftIter<'_, L, R>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, L, R> Iterator for LeftIter<'a, L, R> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<L, R> ExactSizeIterator for LeftIter<'_, L, R> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<L, R> FusedIterator for LeftIter<'_, L, R> {}

/// An iterator over the right values of a `ManyToMany`.
pub struct RightIter<'a, L, R> {
    iter: hash_map::Keys<'a, R, Vec<L>>,
}

impl<L, R> Clone for RightIter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<L, R> fmt::Debug for RightIter<'_, L, R>
where
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, L, R> Iterator for RightIter<'a, L, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<L, R> ExactSizeIterator for RightIter<'_, L, R> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<L, R> FusedIterator for RightIter<'_, L, R> {}
