/// An `OptionalPair` is a more ergonomic alternative to
/// `(Option<L>, Option<R>)`, used as the return value of insert methods that
/// can displace an existing pairing on either side.
///
/// # Examples
/// ```rust
/// use binary_relations::OptionalPair;
/// use OptionalPair::*;
///
/// let op: OptionalPair<u64, &str> = SomeLeft(42);
///
/// match op {
///     Neither => { /* ... */ }
///     SomeLeft(left) => { /* ... */ }
///     SomeRight(right) => { /* ... */ }
///     SomeBoth(left, right) => { /* ... */ }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionalPair<L, R> {
    /// Neither side held anything
    Neither,
    /// Only the left side held something
    SomeLeft(L),
    /// Only the right side held something
    SomeRight(R),
    /// Both sides held something
    SomeBoth(L, R),
}

use OptionalPair::*;

/// The pairings displaced by an evicting insert: at most one pair containing
/// the inserted left value and one containing the inserted right value.
pub type InsertOptional<L, R> = OptionalPair<(L, R), (L, R)>;

impl<L, R> OptionalPair<L, R> {
    /// Returns true if `self` is [`OptionalPair::Neither`] and false otherwise
    pub fn is_none(&self) -> bool {
        matches!(self, Neither)
    }

    /// Returns the negation of [`is_none`]
    ///
    /// [`is_none`]: OptionalPair::is_none
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns an optional reference to the left item
    pub fn get_left(&self) -> Option<&L> {
        match self {
            SomeLeft(l) | SomeBoth(l, _) => Some(l),
            _ => None,
        }
    }

    /// Returns an optional reference to the right item
    pub fn get_right(&self) -> Option<&R> {
        match self {
            SomeRight(r) | SomeBoth(_, r) => Some(r),
            _ => None,
        }
    }
}

impl<L, R> From<(Option<L>, Option<R>)> for OptionalPair<L, R> {
    fn from(pair: (Option<L>, Option<R>)) -> Self {
        match pair {
            (None, None) => Neither,
            (Some(l), None) => SomeLeft(l),
            (None, Some(r)) => SomeRight(r),
            (Some(l), Some(r)) => SomeBoth(l, r),
        }
    }
}

impl<L, R> From<OptionalPair<L, R>> for (Option<L>, Option<R>) {
    fn from(pair: OptionalPair<L, R>) -> Self {
        match pair {
            Neither => (None, None),
            SomeLeft(l) => (Some(l), None),
            SomeRight(r) => (None, Some(r)),
            SomeBoth(l, r) => (Some(l), Some(r)),
        }
    }
}
