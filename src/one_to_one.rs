use std::{
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
};

use hashbrown::{
    hash_map::{self, DefaultHashBuilder},
    HashMap,
};

use crate::optionals::{InsertOptional, OptionalPair};

/// A bijection between left values and right values.
///
/// Every left value is paired with exactly one right value and vice versa, and
/// both directions of lookup are a single hash probe. Inserting a pair whose
/// left or right value is already bound elsewhere evicts the prior pairing on
/// that side; the evicted pairs are handed back as an [`InsertOptional`].
///
/// # Examples
/// ```
/// use binary_relations::OneToOne;
///
/// let mut seats: OneToOne<u64, &str> = OneToOne::new();
///
/// seats.insert(1, "front");
/// seats.insert(2, "back");
///
/// // Re-pairing 1 releases "front" entirely
/// seats.insert(1, "middle");
/// assert_eq!(seats.get_right(&1), Some(&"middle"));
/// assert!(!seats.contains_right(&"front"));
///
/// // Claiming "back" for 3 unpairs 2
/// seats.insert(3, "back");
/// assert!(!seats.contains_left(&2));
/// assert_eq!(seats.len(), 2);
/// ```
#[derive(Clone)]
pub struct OneToOne<L, R, S = DefaultHashBuilder> {
    left_index: HashMap<L, R, S>,
    right_index: HashMap<R, L, S>,
}

impl<L, R> OneToOne<L, R, DefaultHashBuilder> {
    /// Creates a new, empty OneToOne
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new OneToOne whose indexes each have the given capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<L, R, S> OneToOne<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
    /// Pairs a left value with a right value.
    ///
    /// Any pairing that previously contained `left`, and any that previously
    /// contained `right`, is removed first and returned. Inserting a pair that
    /// is already present changes nothing and returns
    /// [`Neither`](OptionalPair::Neither).
    pub fn insert(&mut self, left: L, right: R) -> InsertOptional<L, R> {
        if self.contains(&left, &right) {
            return OptionalPair::Neither;
        }
        let from_left = self
            .erase_left(&left)
            .map(|old_right| (left.clone(), old_right));
        let from_right = self
            .erase_right(&right)
            .map(|old_left| (old_left, right.clone()));
        self.left_index.insert(left.clone(), right.clone());
        self.right_index.insert(right, left);
        OptionalPair::from((from_left, from_right))
    }

    /// Pairs multiple left and right values.
    ///
    /// Pairs are applied in input order, each with the eviction semantics of
    /// [`insert`]; later pairs win any conflict with earlier ones.
    ///
    /// [`insert`]: OneToOne::insert
    pub fn insert_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, R)>,
    {
        for (left, right) in pairs {
            self.insert(left, right);
        }
    }

    /// Removes a pair and returns it.
    ///
    /// Nothing happens unless `left` and `right` are paired with each other.
    pub fn erase(&mut self, left: &L, right: &R) -> Option<(L, R)> {
        if !self.contains(left, right) {
            return None;
        }
        let (left_owned, _) = self.left_index.remove_entry(left).unwrap();
        let (right_owned, _) = self.right_index.remove_entry(right).unwrap();
        Some((left_owned, right_owned))
    }

    /// Removes the pair containing the given left value and returns its right
    /// value.
    pub fn erase_left(&mut self, left: &L) -> Option<R> {
        let right = self.left_index.remove(left)?;
        self.right_index.remove(&right);
        Some(right)
    }

    /// Removes the pair containing the given right value and returns its left
    /// value.
    pub fn erase_right(&mut self, right: &R) -> Option<L> {
        let left = self.right_index.remove(right)?;
        self.left_index.remove(&left);
        Some(left)
    }

    /// Removes multiple pairs. Pairs not in the map are ignored.
    pub fn erase_many<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (L, R)>,
    {
        for (left, right) in pairs {
            self.erase(&left, &right);
        }
    }

    /// Removes every pair of `other` from this map.
    pub fn erase_all(&mut self, other: &OneToOne<L, R, S>) {
        for (left, right) in other.iter() {
            self.erase(left, right);
        }
    }

    /// Returns `true` if `left` and `right` are paired with each other.
    pub fn contains(&self, left: &L, right: &R) -> bool {
        self.right_index.get(right) == Some(left)
    }

    /// Returns `true` if the left value is in the map.
    pub fn contains_left(&self, left: &L) -> bool {
        self.left_index.contains_key(left)
    }

    /// Returns `true` if the right value is in the map.
    pub fn contains_right(&self, right: &R) -> bool {
        self.right_index.contains_key(right)
    }

    /// Returns the right value paired with the given left value.
    pub fn get_right(&self, left: &L) -> Option<&R> {
        self.left_index.get(left)
    }

    /// Returns the left value paired with the given right value.
    pub fn get_left(&self, right: &R) -> Option<&L> {
        self.right_index.get(right)
    }

    /// Returns an iterator over the pairs in the map
    pub fn iter(&self) -> Iter<'_, L, R> {
        Iter {
            iter: self.left_index.iter(),
        }
    }

    /// Returns an iterator over the left values in the map
    pub fn iter_left(&self) -> LeftIter<'_, L, R> {
        LeftIter {
            iter: self.left_index.keys(),
        }
    }

    /// Returns an iterator over the right values in the map
    pub fn iter_right(&self) -> RightIter<'_, L, R> {
        RightIter {
            iter: self.right_index.keys(),
        }
    }
}

impl<L, R, S> OneToOne<L, R, S>
where
    S: Clone,
{
    /// Creates a OneToOne that uses the given hasher for both indexes
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_hasher(hash_builder.clone()),
            right_index: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates a OneToOne with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            left_index: HashMap::with_capacity_and_hasher(capacity, hash_builder.clone()),
            right_index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }
}

impl<L, R, S> OneToOne<L, R, S> {
    /// Returns a reference to the [`BuildHasher`] used by the indexes
    pub fn hasher(&self) -> &S {
        self.left_index.hasher()
    }

    /// Returns the number of pairs in the map
    pub fn len(&self) -> usize {
        self.left_index.len()
    }

    /// Returns the number of left values in the map, equal to [`len`]
    ///
    /// [`len`]: OneToOne::len
    pub fn len_left(&self) -> usize {
        self.left_index.len()
    }

    /// Returns the number of right values in the map, equal to [`len`]
    ///
    /// [`len`]: OneToOne::len
    pub fn len_right(&self) -> usize {
        self.right_index.len()
    }

    /// Returns true if the map holds no pairs
    pub fn is_empty(&self) -> bool {
        self.left_index.is_empty()
    }

    /// Returns the number of left values the map can hold without reallocation
    pub fn capacity_left(&self) -> usize {
        self.left_index.capacity()
    }

    /// Returns the number of right values the map can hold without reallocation
    pub fn capacity_right(&self) -> usize {
        self.right_index.capacity()
    }

    /// Removes all pairs while keeping the backing memory allocated for reuse
    pub fn clear(&mut self) {
        self.left_index.clear();
        self.right_index.clear();
    }
}

impl<L, R, S> Default for OneToOne<L, R, S>
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

impl<L, R, S> fmt::Debug for OneToOne<L, R, S>
where
    L: Hash + Ord + Clone + fmt::Debug,
    R: Hash + Ord + Clone + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<L, R, S> PartialEq for OneToOne<L, R, S>
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

impl<L, R, S> Eq for OneToOne<L, R, S>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
    S: BuildHasher,
{
}

impl<L, R, S> Extend<(L, R)> for OneToOne<L, R, S>
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

impl<L, R> FromIterator<(L, R)> for OneToOne<L, R>
where
    L: Hash + Ord + Clone,
    R: Hash + Ord + Clone,
{
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        let mut digest = OneToOne::default();
        digest.extend(iter);
        digest
    }
}

impl<'a, L, R, S> IntoIterator for &'a OneToOne<L, R, S>
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

/// An iterator over the pairs of a `OneToOne`.
pub struct Iter<'a, L, R> {
    iter: hash_map::Iter<'a, L, R>,
}

impl<L, R> Clone for Iter<'_, L, R> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
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
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<L, R> ExactSizeIterator for Iter<'_, L, R> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<L, R> FusedIterator for Iter<'_, L, R> {}

/// An iterator over the left values of a `OneToOne`.
pub struct LeftIter<'a, L, R> {
    iter: hash_map::Keys<'a, L, R>,
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

/// An iterator over the right values of a `OneToOne`.
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
