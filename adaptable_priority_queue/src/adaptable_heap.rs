use std::fmt::{Debug, Display};
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::editable_binary_heap::{BinaryHeap, BinaryHeapIterator, HeapIndex};
use crate::mediator::{EntryId, Mediator, MediatorIndex, Record};
use crate::order::{KeyOrder, NaturalOrder};

/// Identity of heap instance, stamped into every handle it issues.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
struct QueueId(u64);

impl QueueId {
    fn next() -> Self {
        static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(0);
        QueueId(NEXT_QUEUE_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// A binary min heap of key/value pairs where every inserted pair
/// can later be removed or rekeyed through the handle returned by [`insert`].
///
/// Smaller keys (according to `O`) are extracted first.
/// Values never take part in ordering.
///
/// Every entry keeps its current slot in the heap cached,
/// so operations by handle don't need to search for entry.
///
/// It is logic error if key ordering changes other way than by [`replace_key`] method.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// All mutation requires `&mut self`, so sharing heap between threads
/// needs external synchronization like `Mutex`.
///
/// [`insert`]: struct.AdaptiveBinaryHeap.html#method.insert
/// [`replace_key`]: struct.AdaptiveBinaryHeap.html#method.replace_key
///
/// # Examples
///
/// ```
/// use adaptable_priority_queue::{AdaptiveBinaryHeap, HeapError};
///
/// let mut heap = AdaptiveBinaryHeap::new();
///
/// // Currently heap is empty
/// assert!(heap.min().is_none());
/// assert_eq!(heap.remove_min(), None);
///
/// heap.insert(5, "five").unwrap();
/// let three = heap.insert(3, "three").unwrap();
/// let eight = heap.insert(8, "eight").unwrap();
/// heap.insert(1, "one").unwrap();
///
/// let min = heap.min().unwrap();
/// assert_eq!((min.key(), min.value()), (&1, &"one"));
///
/// // Entries can be rekeyed in both directions
/// assert_eq!(heap.replace_key(three, 10), Ok(3));
/// // Or removed from the middle
/// assert_eq!(heap.remove(eight), Ok((8, "eight")));
/// // Removed entry can't be used anymore
/// assert_eq!(heap.remove(eight), Err(HeapError::InvalidHandle));
///
/// assert_eq!(heap.remove_min(), Some((1, "one")));
/// assert_eq!(heap.remove_min(), Some((5, "five")));
/// assert_eq!(heap.remove_min(), Some((10, "three")));
/// assert_eq!(heap.remove_min(), None);
/// ```
#[derive(Clone)]
pub struct AdaptiveBinaryHeap<K, V, O = NaturalOrder> {
    heap: BinaryHeap<K, O>,
    records: Mediator<V>,
    queue: QueueId,
}

/// Opaque reference to entry of [`AdaptiveBinaryHeap`].
///
/// Handle stays valid until its entry is removed by [`remove`], [`remove_min`] or [`clear`].
/// After that every operation with it fails with [`HeapError::InvalidHandle`].
/// Handles are bound to heap that issued them.
/// Handle issued before heap was cloned refers to the same entry in both copies,
/// handle issued by one copy after cloning is rejected by the other one.
///
/// [`AdaptiveBinaryHeap`]: struct.AdaptiveBinaryHeap.html
/// [`remove`]: struct.AdaptiveBinaryHeap.html#method.remove
/// [`remove_min`]: struct.AdaptiveBinaryHeap.html#method.remove_min
/// [`clear`]: struct.AdaptiveBinaryHeap.html#method.clear
/// [`HeapError::InvalidHandle`]: enum.HeapError.html#variant.InvalidHandle
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntryHandle {
    queue: QueueId,
    id: EntryId,
}

/// Borrowed view of entry stored in heap.
pub struct EntryRef<'a, K, V> {
    handle: EntryHandle,
    key: &'a K,
    value: &'a V,
}

impl<'a, K, V> EntryRef<'a, K, V> {
    /// Handle which can be used to modify this entry later
    #[inline]
    pub fn handle(&self) -> EntryHandle {
        self.handle
    }

    #[inline]
    pub fn key(&self) -> &'a K {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &'a V {
        self.value
    }
}

impl<K: PartialOrd, V> AdaptiveBinaryHeap<K, V, NaturalOrder> {
    /// Creates an empty heap ordered by `PartialOrd` of keys.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// heap.insert(4, "Value").unwrap();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_order(0, NaturalOrder)
    }

    /// Creates an empty heap with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::with_capacity(10);
    /// heap.insert(4, "Value").unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, NaturalOrder)
    }
}

impl<K, V, O: KeyOrder<K>> AdaptiveBinaryHeap<K, V, O> {
    /// Creates an empty heap that compares keys with `order`.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::{AdaptiveBinaryHeap, CompareFn};
    /// let mut heap = AdaptiveBinaryHeap::with_order(CompareFn(|a: &i32, b: &i32| b.cmp(a)));
    /// heap.insert(1, ()).unwrap();
    /// heap.insert(7, ()).unwrap();
    /// assert_eq!(heap.min().map(|e| *e.key()), Some(7));
    /// ```
    #[inline]
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty heap with allocated memory enough
    /// to keep `capacity` elements without reallocation
    /// that compares keys with `order`.
    #[inline]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity, order),
            records: Mediator::with_capacity(capacity),
            queue: QueueId::next(),
        }
    }

    /// Returns the order used to compare keys
    #[inline]
    pub fn order(&self) -> &O {
        self.heap.order()
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.records.reserve(additional);
    }

    /// Get the number of elements in heap.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.records.len(), self.heap.usize_len());
        self.records.len()
    }

    /// Returns true if heap is empty.
    ///
    /// ```
    /// let mut heap = adaptable_priority_queue::AdaptiveBinaryHeap::new();
    /// assert!(heap.is_empty());
    /// heap.insert(0, 5).unwrap();
    /// assert!(!heap.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.records.is_empty());
        self.records.is_empty()
    }

    /// Adds new entry to heap and returns handle to it.
    ///
    /// Fails with [`HeapError::InvalidKey`] if order can't compare the key,
    /// in that case heap is left untouched.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::{AdaptiveBinaryHeap, HeapError};
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// let handle = heap.insert(2.5, "ok").unwrap();
    /// assert_eq!(heap.insert(f64::NAN, "nan"), Err(HeapError::InvalidKey));
    /// assert_eq!(heap.len(), 1);
    /// assert_eq!(heap.min().unwrap().handle(), handle);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// If elements inserted in ascending order, amortized complexity is ***O(1)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    ///
    /// [`HeapError::InvalidKey`]: enum.HeapError.html#variant.InvalidKey
    pub fn insert(&mut self, key: K, value: V) -> Result<EntryHandle, HeapError> {
        if !self.heap.order().accepts(&key) {
            return Err(HeapError::InvalidKey);
        }

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let heap = &mut self.heap;
        let records = &mut self.records;

        let (id, outer) = records.insert(value, heap.len());
        heap.push(key, outer, |index, heap_idx| {
            *records.get_index_mut(index) = heap_idx
        });
        Ok(self.handle_for(id))
    }

    /// Get view of the entry with the minimal key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// heap.insert(3, 'c').unwrap();
    /// let one = heap.insert(1, 'a').unwrap();
    /// let min = heap.min().unwrap();
    /// assert_eq!(min.handle(), one);
    /// assert_eq!(min.key(), &1);
    /// assert_eq!(min.value(), &'a');
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn min(&self) -> Option<EntryRef<'_, K, V>> {
        let (outer, key) = self.heap.peek()?;
        Some(self.entry_ref(outer, key))
    }

    /// Remove and return entry with the minimal key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// for x in [5, 3, 8, 1] {
    ///     heap.insert(x, x * 10).unwrap();
    /// }
    /// assert_eq!(heap.remove_min(), Some((1, 10)));
    /// assert_eq!(heap.remove_min(), Some((3, 30)));
    /// assert_eq!(heap.remove_min(), Some((5, 50)));
    /// assert_eq!(heap.remove_min(), Some((8, 80)));
    /// assert_eq!(heap.remove_min(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of remove_min is always ***O(log n)***
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        self.remove_at(HeapIndex::ROOT)
    }

    /// Remove entry by handle and return its key and value.
    ///
    /// Fails with [`HeapError::InvalidHandle`] if entry was already removed
    /// or handle was issued by other heap.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::{AdaptiveBinaryHeap, HeapError};
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// heap.insert(5, ()).unwrap();
    /// heap.insert(3, ()).unwrap();
    /// let eight = heap.insert(8, ()).unwrap();
    /// assert_eq!(heap.remove(eight), Ok((8, ())));
    /// assert_eq!(heap.remove(eight), Err(HeapError::InvalidHandle));
    /// assert_eq!(heap.remove_min(), Some((3, ())));
    /// assert_eq!(heap.remove_min(), Some((5, ())));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// On average the function will require ***O(log n)*** operations.
    ///
    /// [`HeapError::InvalidHandle`]: enum.HeapError.html#variant.InvalidHandle
    pub fn remove(&mut self, handle: EntryHandle) -> Result<(K, V), HeapError> {
        let (_, record) = self.lookup(handle)?;
        let position = record.heap_idx;
        Ok(self
            .remove_at(position)
            .expect("Position of live record must be inside heap"))
    }

    /// Set new key for entry and reorder the heap.
    /// Returns old key if succeeds.
    ///
    /// Handle is checked first, so invalid handle with invalid key
    /// reports [`HeapError::InvalidHandle`].
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// heap.insert(5, "five").unwrap();
    /// let handle = heap.insert(3, "three").unwrap();
    /// heap.insert(8, "eight").unwrap();
    /// assert_eq!(heap.replace_key(handle, 10), Ok(3));
    /// assert_eq!(heap.remove_min(), Some((5, "five")));
    /// assert_eq!(heap.remove_min(), Some((8, "eight")));
    /// assert_eq!(heap.remove_min(), Some((10, "three")));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    ///
    /// [`HeapError::InvalidHandle`]: enum.HeapError.html#variant.InvalidHandle
    pub fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, HeapError> {
        let (_, record) = self.lookup(handle)?;
        let position = record.heap_idx;
        if !self.heap.order().accepts(&key) {
            return Err(HeapError::InvalidKey);
        }

        let heap = &mut self.heap;
        let records = &mut self.records;
        Ok(heap.change_key(position, key, |index, heap_idx| {
            *records.get_index_mut(index) = heap_idx
        }))
    }

    /// Set new value for entry and return old one.
    /// Never changes order of entries.
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map lookup).
    #[inline]
    pub fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, HeapError> {
        Ok(std::mem::replace(self.value_mut(handle)?, value))
    }

    /// Get view of entry by handle.
    ///
    /// ```
    /// use adaptable_priority_queue::{AdaptiveBinaryHeap, HeapError};
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// let handle = heap.insert("key", 42).unwrap();
    /// let entry = heap.get(handle).unwrap();
    /// assert_eq!((entry.key(), entry.value()), (&"key", &42));
    /// heap.clear();
    /// assert!(matches!(heap.get(handle), Err(HeapError::InvalidHandle)));
    /// ```
    pub fn get(&self, handle: EntryHandle) -> Result<EntryRef<'_, K, V>, HeapError> {
        let (outer, record) = self.lookup(handle)?;
        let (_, key) = self
            .heap
            .look_into(record.heap_idx)
            .expect("Position of live record must be inside heap");
        Ok(self.entry_ref(outer, key))
    }

    /// Returns true if handle refers to entry still stored in this heap.
    #[inline]
    pub fn contains(&self, handle: EntryHandle) -> bool {
        self.lookup(handle).is_ok()
    }

    /// Get mutable reference to value by handle.
    /// Values don't affect ordering so they can be changed in place.
    pub fn value_mut(&mut self, handle: EntryHandle) -> Result<&mut V, HeapError> {
        if handle.queue != self.queue {
            return Err(HeapError::InvalidHandle);
        }
        self.records
            .get_mut(handle.id)
            .map(|record| &mut record.value)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Make the heap empty.
    /// All handles issued before become invalid.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.records.clear();
    }

    /// Create readonly borrowing iterator over heap.
    /// Order of entries is unspecified.
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// for x in 0..5 {
    ///     heap.insert(x, x * x).unwrap();
    /// }
    /// let mut pairs: Vec<_> = heap.iter().map(|e| (*e.key(), *e.value())).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole heap is ***O(n)***
    pub fn iter(&self) -> AdaptiveBinaryHeapBorrowIter<'_, K, V> {
        AdaptiveBinaryHeapBorrowIter {
            heap_iterator: self.heap.iter(),
            records: &self.records,
            queue: self.queue,
        }
    }

    /// Consumes heap and returns its entries in non-decreasing key order.
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)***
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut result = Vec::with_capacity(self.len());
        while let Some(pair) = self.remove_min() {
            result.push(pair);
        }
        result
    }

    // Checks that handle belongs to this heap and its entry is alive
    #[inline]
    fn lookup(&self, handle: EntryHandle) -> Result<(MediatorIndex, &Record<V>), HeapError> {
        if handle.queue != self.queue {
            return Err(HeapError::InvalidHandle);
        }
        self.records
            .get_full(handle.id)
            .ok_or(HeapError::InvalidHandle)
    }

    #[inline(always)]
    fn handle_for(&self, id: EntryId) -> EntryHandle {
        EntryHandle {
            queue: self.queue,
            id,
        }
    }

    #[inline]
    fn entry_ref<'a>(&'a self, outer: MediatorIndex, key: &'a K) -> EntryRef<'a, K, V> {
        let (id, record) = self.records.get_index(outer);
        EntryRef {
            handle: self.handle_for(id),
            key,
            value: &record.value,
        }
    }

    // Removes entry at heap position and keeps records consistent
    fn remove_at(&mut self, position: HeapIndex) -> Option<(K, V)> {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let heap = &mut self.heap;
        let records = &mut self.records;

        let (removed_idx, key) = heap.remove(position, |index, heap_idx| {
            *records.get_index_mut(index) = heap_idx
        })?;

        let (_, record) = records.swap_remove_index(removed_idx);
        if MediatorIndex(records.len()) != removed_idx {
            let (_, moved) = records.get_index(removed_idx);
            heap.change_outer_pos(removed_idx, moved.heap_idx);
        }

        Some((key, record.value))
    }
}

impl<'a, K, V> Clone for EntryRef<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for EntryRef<'a, K, V> {}

impl<'a, K: Debug, V: Debug> Debug for EntryRef<'a, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_struct("EntryRef")
            .field("key", self.key)
            .field("value", self.value)
            .finish()
    }
}

impl<K: Debug, V: Debug, O: KeyOrder<K>> Debug for AdaptiveBinaryHeap<K, V, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.iter() {
            write!(f, "({:?}, {:?})", entry.key, entry.value)?;
        }
        write!(f, "]")
    }
}

impl<K, V, O: KeyOrder<K> + Default> Default for AdaptiveBinaryHeap<K, V, O> {
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_order(0, O::default())
    }
}

impl<K, V, O: KeyOrder<K>> IntoIterator for AdaptiveBinaryHeap<K, V, O> {
    type Item = (K, V);
    type IntoIter = AdaptiveBinaryHeapIterator<K, V, O>;

    /// Make iterator that return items in ascending key order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use adaptable_priority_queue::AdaptiveBinaryHeap;
    /// let mut heap = AdaptiveBinaryHeap::new();
    /// heap.insert(2, "second").unwrap();
    /// heap.insert(3, "third").unwrap();
    /// heap.insert(1, "first").unwrap();
    /// let mut iterator = heap.into_iter();
    /// assert_eq!(iterator.next(), Some((1, "first")));
    /// assert_eq!(iterator.next(), Some((2, "second")));
    /// assert_eq!(iterator.next(), Some((3, "third")));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { heap: self }
    }
}

/// This is consuming iterator that returns elements in ascending key order
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct AdaptiveBinaryHeapIterator<K, V, O = NaturalOrder> {
    heap: AdaptiveBinaryHeap<K, V, O>,
}

impl<K, V, O: KeyOrder<K>> Iterator for AdaptiveBinaryHeapIterator<K, V, O> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.heap.remove_min()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap.len()
    }
}

impl<K, V, O: KeyOrder<K>> ExactSizeIterator for AdaptiveBinaryHeapIterator<K, V, O> {}

impl<K, V, O: KeyOrder<K>> FusedIterator for AdaptiveBinaryHeapIterator<K, V, O> {}

/// This is unordered borrowing iterator over heap.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct AdaptiveBinaryHeapBorrowIter<'a, K, V> {
    heap_iterator: BinaryHeapIterator<'a, K>,
    records: &'a Mediator<V>,
    queue: QueueId,
}

impl<'a, K: 'a, V: 'a> Iterator for AdaptiveBinaryHeapBorrowIter<'a, K, V> {
    type Item = EntryRef<'a, K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        let queue = self.queue;
        self.heap_iterator.next().map(|(outer, key)| {
            let (id, record) = records.get_index(outer);
            EntryRef {
                handle: EntryHandle { queue, id },
                key,
                value: &record.value,
            }
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}

impl<'a, K: 'a, V: 'a> ExactSizeIterator for AdaptiveBinaryHeapBorrowIter<'a, K, V> {}

/// This is error type for operations of [`AdaptiveBinaryHeap`] that take handle or key.
///
/// Empty heap is not an error: [`min`] and [`remove_min`] return `None` for it.
///
/// [`AdaptiveBinaryHeap`]: struct.AdaptiveBinaryHeap.html
/// [`min`]: struct.AdaptiveBinaryHeap.html#method.min
/// [`remove_min`]: struct.AdaptiveBinaryHeap.html#method.remove_min
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum HeapError {
    /// Key can't be ordered by heap order, for example `f64::NAN`.
    InvalidKey,
    /// Handle refers to removed entry or was issued by other heap.
    InvalidHandle,
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            HeapError::InvalidKey => write!(f, "Key can't be ordered by AdaptiveBinaryHeap order"),
            HeapError::InvalidHandle => {
                write!(f, "Handle doesn't refer to live entry of AdaptiveBinaryHeap")
            }
        }
    }
}

impl std::error::Error for HeapError {}
