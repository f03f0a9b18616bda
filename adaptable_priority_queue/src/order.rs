//! Orderings used by [`AdaptiveBinaryHeap`] to compare keys.
//!
//! The heap never compares values, only keys, and it always asks its
//! [`KeyOrder`] instead of calling `Ord` directly.
//! This allows the same heap to run on natural ordering,
//! on a caller supplied comparator or on a reversed version of either.
//!
//! [`AdaptiveBinaryHeap`]: struct.AdaptiveBinaryHeap.html
use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// Total order over keys used by the heap.
///
/// `compare` returns `None` when two keys cannot be ordered.
/// Keys are checked with [`accepts`] before they enter the heap,
/// so `None` is normally seen only for rejected keys.
///
/// It is logic error if two accepted keys compare as `None`
/// or if the order between keys changes while they are in heap.
/// The heap stays memory safe in that case but extraction order is unspecified.
///
/// [`accepts`]: trait.KeyOrder.html#method.accepts
pub trait KeyOrder<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;

    /// Returns true if key can be stored in heap with this order.
    ///
    /// Default implementation requires key to be equal to itself,
    /// which rejects values like `f64::NAN`.
    #[inline]
    fn accepts(&self, key: &K) -> bool {
        self.compare(key, key) == Some(Ordering::Equal)
    }

    /// Returns true only if `a` is known to be strictly less than `b`.
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }
}

/// Ordering by `PartialOrd` of key type.
///
/// Works with every `Ord` type and with floats as long as they are not NaN.
///
/// ```
/// use adaptable_priority_queue::{KeyOrder, NaturalOrder};
///
/// assert!(NaturalOrder.accepts(&1.5f64));
/// assert!(!NaturalOrder.accepts(&f64::NAN));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: PartialOrd + ?Sized> KeyOrder<K> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Adapts closure with signature `Fn(&K, &K) -> Ordering` into [`KeyOrder`].
///
/// Comparator is expected to be total, so every key is accepted.
///
/// ```
/// use adaptable_priority_queue::{AdaptiveBinaryHeap, CompareFn};
///
/// // Shortest strings first
/// let by_len = CompareFn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let mut heap = AdaptiveBinaryHeap::with_order(by_len);
/// heap.insert("three", 3).unwrap();
/// heap.insert("a", 1).unwrap();
/// heap.insert("of", 2).unwrap();
/// assert_eq!(heap.remove_min(), Some(("a", 1)));
/// ```
///
/// [`KeyOrder`]: trait.KeyOrder.html
#[derive(Clone, Copy, Default)]
pub struct CompareFn<F>(pub F);

impl<K: ?Sized, F> KeyOrder<K> for CompareFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some((self.0)(a, b))
    }

    #[inline(always)]
    fn accepts(&self, _key: &K) -> bool {
        true
    }
}

impl<F> Debug for CompareFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CompareFn(..)")
    }
}

/// Reverses another order.
/// Turns min heap into max heap without wrapping every key in `std::cmp::Reverse`.
///
/// ```
/// use adaptable_priority_queue::{AdaptiveBinaryHeap, NaturalOrder, ReverseOrder};
///
/// let mut heap = AdaptiveBinaryHeap::with_order(ReverseOrder(NaturalOrder));
/// for x in [2, 9, 4] {
///     heap.insert(x, ()).unwrap();
/// }
/// assert_eq!(heap.remove_min(), Some((9, ())));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseOrder<O>(pub O);

impl<K: ?Sized, O: KeyOrder<K>> KeyOrder<K> for ReverseOrder<O> {
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        self.0.compare(b, a)
    }

    #[inline(always)]
    fn accepts(&self, key: &K) -> bool {
        self.0.accepts(key)
    }
}
