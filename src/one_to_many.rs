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

use crate::sorted_vec::{erase_sorted, insert_sorted, merge_sorted, subtract_sorted};

/// A set of `(left, right)` pairs where the left side can have any number of
/// right counterparts, while a right value belongs to at most one left value.
///
/// The container keeps two indexes: left value to the sorted vector of its
/// right counterparts, and right value to its single left owner. Every
/// operation leaves the two indexes in agreement, so `contains`-style queries
/// and lookups are near-constant time from either side.
///
/// The one-to-many rule is enforced on insert: adding a pair whose right value
/// is already bound to a different left value transfers the right value,
/// erasing the old pairing first.
///
/// Like the maps in [`hashbrown`], both value types need to implement [`Eq`]
/// and [`Hash`]; the sorted buckets additionally require [`Ord`], and both
/// sides are stored in two indexes, hence [`Clone`].
///
/// # Examples
/// ```
/// use binary_relations::OneToMany;
///
/// let mut owners: OneToMany<u64, &str> = OneToMany::new();
///
/// owners.insert(1, "apple");
/// owners.insert(1, "banana");
/// owners.insert(2, "cherry");
/// owners.insert(3, "date");
/// assert_eq!(owners.len(), 4);
///
/// // Rights within a key come back sorted
/// assert_eq!(owners.get_right(&1), &["apple", "banana"]);
///
/// // Inserting a bound right value steals it from its old owner
/// let evicted = owners.insert(3, "cherry");
/// assert_eq!(evicted, Some(2));
/// assert!(!owners.contains(&2, &"cherry"));
/// assert!(owners.contains(&3, &"cherry"));
/// assert_eq!(owners.len(), 4);
/// ```
#[derive(Clone)]
pub struct OneToMany<L, R, S = DefaultHashBuilder> {
    left_index: HashMap<L, Vec<R>, S>,
    right_index: HashMap<R, L, S>,
}

impl<L, R> OneToMany<L, R, DefaultHashBuilder> {
    /// Creates a new, empty OneToMany
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new OneToMany whose indexes each have the given capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<L, R, S> OneToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    /// Adds a pair to the set.
    ///
    /// If the pair is already present, nothing happens. If the right value is
    /// bound to a different left value, that pairing is erased first and the
    /// displaced left value is returned.
    ///
    /// # Examples
    /// ```rust
    /// use binary_relations::OneToMany;
    ///
    /// let mut map: OneToMany<u64, &str> = OneToMany::new();
    /// assert_eq!(map.insert(1, "x"), None);
    /// assert_eq!(map.insert(2, "x"), Some(1));
    /// assert!(!map.contains_left(&1));
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> Option<L> {
        let evicted = match self.right_index.get(&right) {
            Some(old_left) if *old_left == left => return None,
            Some(old_left) => {
                let old_left = old_left.clone();
                self.erase(&old_left, &right);
                Some(old_left)
            }
            None => None,
        };
        let bucket = self.left_index.entry(left.clone()).or_default();
        insert_sorted(bucket, right.clone());
        self.right_index.insert(right, left);
        evicted
    }

    /// Adds multiple pairs to the set in one batched pass.
    ///
    /// Equivalent to calling [`insert`] for every pair in order, but faster:
    /// the pairs are grouped by left value and each touched bucket is rebuilt
    /// with a single merge (and, for displaced pairings, a single difference)
    /// instead of one point update per pair. If the input binds the same right
    /// value more than once, the last pair wins, just as it would with
    /// repeated point inserts.
    ///
    /// [`insert`]: OneToMany::insert
    pub fn insert_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut to_insert: Vec<(L, R)> = pairs.into_iter().collect();
        if to_insert.is_empty() {
            return;
        }

        // Stable sort on the right value keeps input order within each run,
        // so keeping a run's last element gives last-writer-wins.
        to_insert.sort_by(|a, b| a.1.cmp(&b.1));
        let mut deduped: Vec<(L, R)> = Vec::with_capacity(to_insert.len());
        for pair in to_insert {
            match deduped.last_mut() {
                Some(prev) if prev.1 == pair.1 => *prev = pair,
                _ => deduped.push(pair),
            }
        }

        // Stage the pairings displaced by the one-to-many rule and erase them
        // one bucket at a time.
        let mut to_erase: Vec<(L, R)> = Vec::new();
        for (left, right) in &deduped {
            if let Some(old_left) = self.right_index.get(right) {
                if old_left != left {
                    to_erase.push((old_left.clone(), right.clone()));
                }
            }
        }
        to_erase.sort_unstable();
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
                *bucket = remainder;
            }
            if self.left_index.get(left).map_or(false, Vec::is_empty) {
                self.left_index.remove(left);
            }
        }

        // Merge the new pairs in, one pass per left value. The right_index
        // entries for staged erasures are overwritten here rather than
        // removed above, since every displaced right value is re-bound.
        deduped.sort_unstable();
        let mut idx = 0;
        while idx < deduped.len() {
            let left = &deduped[idx].0;
            let start = idx;
            while idx < deduped.len() && deduped[idx].0 == *left {
                idx += 1;
            }
            let rights: Vec<R> = deduped[start..idx].iter().map(|(_, r)| r.clone()).collect();
            for right in &rights {
                self.right_index.insert(right.clone(), left.clone());
            }
            match self.left_index.get_mut(left) {
                Some(bucket) => {
                    let merged = merge_sorted(bucket, &rights);
                    *bucket = merged;
                }
                None => {
                    self.left_index.insert(left.clone(), rights);
                }
            }
        }
    }

    /// Removes a pair from the set and returns it.
    ///
    /// Nothing happens unless the exact pair is currently in the set.
    ///
    /// # Examples
    /// ```rust
    /// use binary_relations::OneToMany;
    ///
    /// let mut map: OneToMany<u64, &str> = OneToMany::new();
    /// map.insert(1, "x");
    /// assert_eq!(map.erase(&2, &"x"), None);
    /// assert_eq!(map.erase(&1, &"x"), Some((1, "x")));
    /// assert_eq!(map.erase(&1, &"x"), None);
    /// ```
    pub fn erase(&mut self, left: &L, right: &R) -> Option<(L, R)> {
        if self.right_index.get(right) != Some(left) {
            return None;
        }
        let (right_owned, left_owned) = self.right_index.remove_entry(right).unwrap();
        let bucket = self.left_index.get_mut(&left_owned).unwrap();
        erase_sorted(bucket, right);
        if bucket.is_empty() {
            self.left_index.remove(&left_owned);
        }
        Some((left_owned, right_owned))
    }

    /// Removes every pair with the given left value and returns the right
    /// values it was paired with.
    pub fn erase_left(&mut self, left: &L) -> Option<Vec<R>> {
        let bucket = self.left_index.remove(left)?;
        for right in &bucket {
            self.right_index.remove(right);
        }
        Some(bucket)
    }

    /// Removes the pair with the given right value and returns the left value
    /// it was paired with.
    pub fn erase_right(&mut self, right: &R) -> Option<L> {
        let left = self.right_index.get(right)?.clone();
        self.erase(&left, right).map(|(l, _)| l)
    }

    /// Removes multiple pairs from the set in one batched pass.
    ///
    /// Equivalent to calling [`erase`] for every pair, but grouped by left
    /// value with a single difference pass per touched bucket. Pairs not
    /// currently in the set are ignored.
    ///
    /// [`erase`]: OneToMany::erase
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

        let mut idx = 0;
        while idx < to_erase.len() {
            let left = &to_erase[idx].0;
            let start = idx;
            while idx < to_erase.len() && to_erase[idx].0 == *left {
                idx += 1;
            }
            // Only pairs actually bound to this left value participate.
            let mut rights: Vec<R> = Vec::with_capacity(idx - start);
            for (_, right) in &to_erase[start..idx] {
                if self.right_index.get(right) == Some(left) {
                    self.right_index.remove(right);
                    rights.push(right.clone());
                }
            }
            if rights.is_empty() {
                continue;
            }
            if let Some(bucket) = self.left_index.get_mut(left) {
                let remainder = subtract_sorted(bucket, &rights);
                *bucket = remainder;
            }
            if self.left_index.get(left).map_or(false, Vec::is_empty) {
                self.left_index.remove(left);
            }
        }
    }

    /// Removes every pair of `other` from this set.
    pub fn erase_all(&mut self, other: &OneToMany<L, R, S>) {
        for (left, right) in other.iter() {
            self.erase(left, right);
        }
    }

    /// Returns `true` if the exact pair is in the set.
    pub fn contains(&self, left: &L, right: &R) -> bool {
        self.right_index.get(right) == Some(left)
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
    ///
    /// # Examples
    /// ```rust
    /// use binary_relations::OneToMany;
    ///
    /// let mut map: OneToMany<u64, &str> = OneToMany::new();
    /// map.insert(1, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.get_right(&1), &["a", "b"]);
    /// assert!(map.get_right(&42).is_empty());
    /// ```
    pub fn get_right(&self, left: &L) -> &[R] {
        self.left_index.get(left).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the single left value paired with the given right value.
    pub fn get_left(&self, right: &R) -> Option<&L> {
        self.right_index.get(right)
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

impl<L, R, S> OneToMany<L, R, S>
where
    S: Clone,
{
    /// Creates a OneToMany that uses the given hasher for both indexes
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_hasher(hash_builder.clone()),
            right_index: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates a OneToMany with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_capacity_and_hasher(capacity, hash_builder.clone()),
            right_index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }
}

impl<L, R, S> OneToMany<L, R, S> {
    /// Returns a reference to the [`BuildHasher`] used by the indexes
    pub fn hasher(&self) -> &S {
        self.left_index.hasher()
    }

    /// Returns the number of pairs in the set.
    ///
    /// Every right value belongs to exactly one pair, so this equals
    /// [`len_right`].
    ///
    /// [`len_right`]: OneToMany::len_right
    pub fn len(&self) -> usize {
        self.right_index.len()
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
        self.len() == 0
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
    }
}

impl<L, R, S> Default for OneToMany<L, R, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            left_index: HashMap::default(),
            right_index: HashMap::default(),
        }
    }
}

impl<L, R, S> fmt::Debug for OneToMany<L, R, S>
where
    L: Hash + Ord + Clone + fmt::Debug,
    R: Hash + Ord + Clone + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<L, R, S> PartialEq for OneToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.len_left() != other.len_left() {
            return false;
        }
        self.iter().all(|(l, r)| other.contains(l, r))
    }
}

impl<L, R, S> Eq for OneToMany<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
}

impl<L, R, S> Extend<(L, R)> for OneToMany<L, R, S>
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

impl<L, R> FromIterator<(L, R)> for OneToMany<L, R>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut digest = OneToMany::default();
        digest.extend(iter);
        digest
    }
}

impl<'a, L, R, S> IntoIterator for &'a OneToMany<L, R, S>
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

/// An iterator over the pairs of a `OneToMany`.
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

/// An iterator over the left values of a `OneToMany`.
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

/// An iterator over the right values of a `OneToMany`.
pub struct RightIter<'a, L, R> {
    iter: hash_map::Keys<'a, R, L>,
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
