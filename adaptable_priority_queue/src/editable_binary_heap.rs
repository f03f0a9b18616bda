use std::fmt::Debug;
use std::vec::Vec;

use crate::mediator::MediatorIndex;
use crate::order::KeyOrder;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    pub(crate) const ROOT: HeapIndex = HeapIndex(0);

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }

    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

pub(crate) struct HeapEntry<K> {
    key: K,
    outer: MediatorIndex,
}

/// Min heap of keys ordered by `O`.
/// Every entry remembers index of its record in mediator,
/// and every move of entry is reported through change handler
/// so that record can keep its cached heap position in sync.
pub(crate) struct BinaryHeap<K, O> {
    data: Vec<HeapEntry<K>>,
    order: O,
}

impl<K, O: KeyOrder<K>> BinaryHeap<K, O> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    #[inline(always)]
    pub(crate) fn order(&self) -> &O {
        &self.order
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts key at the end of heap and moves it up to its final position.
    /// Calls change_handler for every entry moved by swaps.
    /// Caller is expected to record `len()` as position of the new entry beforehand.
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        key: K,
        outer: MediatorIndex,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry { key, outer });
        self.heapify_up(HeapIndex(self.data.len() - 1), change_handler);
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<(MediatorIndex, &K)> {
        self.look_into(HeapIndex::ROOT)
    }

    /// Removes item at position and returns it
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn remove<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, K)> {
        if self.len() <= position {
            return None;
        }
        let last = self.data.len() - 1;
        if position.0 == last {
            let removed = self.data.pop()?;
            return Some((removed.outer, removed.key));
        }

        self.swap_items(position.0, last, &mut change_handler);
        let removed = self.data.pop()?;
        // Entry taken from the end may be out of order in either direction.
        if !self.heapify_down(position, &mut change_handler) {
            self.heapify_up(position, &mut change_handler);
        }
        Some((removed.outer, removed.key))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &K)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer, &entry.key))
    }

    /// Replaces key of queue item and returns the old one
    pub(crate) fn change_key<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: K,
        change_handler: TChangeHandler,
    ) -> K {
        if position >= self.len() {
            panic!("Out of index during changing key");
        }

        let old = std::mem::replace(&mut self.data[position.0].key, updated);
        if self.order.less(&self.data[position.0].key, &old) {
            self.heapify_up(position, change_handler);
        } else {
            self.heapify_down(position, change_handler);
        }
        old
    }

    // Changes outer index of entry and returns old one
    pub(crate) fn change_outer_pos(
        &mut self,
        outer: MediatorIndex,
        position: HeapIndex,
    ) -> MediatorIndex {
        if position >= self.len() {
            panic!("Out of index during changing outer position");
        }

        std::mem::replace(&mut self.data[position.0].outer, outer)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<'_, K> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    fn heapify_up<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self
                .order
                .less(&self.data[position].key, &self.data[parent_pos].key)
            {
                self.swap_items(parent_pos, position, &mut change_handler);
                position = parent_pos;
            } else {
                break;
            }
        }
    }

    /// Returns true if entry at position moved
    fn heapify_down<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) -> bool {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let start = position.0;
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                // Left child wins ties
                if child2 < self.data.len()
                    && self
                        .order
                        .less(&self.data[child2].key, &self.data[child1].key)
                {
                    child2
                } else {
                    child1
                }
            };

            if self
                .order
                .less(&self.data[min_child_idx].key, &self.data[position].key)
            {
                self.swap_items(position, min_child_idx, &mut change_handler);
                position = min_child_idx;
            } else {
                break;
            }
        }
        position != start
    }

    #[inline(always)]
    fn swap_items<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        pos1: usize,
        pos2: usize,
        change_handler: &mut TChangeHandler,
    ) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        change_handler(self.data[pos1].outer, HeapIndex(pos1));
        change_handler(self.data[pos2].outer, HeapIndex(pos2));
    }
}

/// Borrowing iterator over entries in slot order
pub(crate) struct BinaryHeapIterator<'a, K> {
    inner: std::slice::Iter<'a, HeapEntry<K>>,
}

impl<'a, K> Iterator for BinaryHeapIterator<'a, K> {
    type Item = (MediatorIndex, &'a K);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.outer, &entry.key))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.inner.count()
    }
}

// Default implementations

impl<K: Clone> Clone for HeapEntry<K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            outer: self.outer,
        }
    }
}

impl<K: Debug> Debug for HeapEntry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{{key: {:?}, outer: {:?}}}", &self.key, &self.outer)
    }
}

impl<K: Clone, O: Clone> Clone for BinaryHeap<K, O> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            order: self.order.clone(),
        }
    }
}

impl<K: Debug, O> Debug for BinaryHeap<K, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CompareFn, NaturalOrder};
    use std::collections::HashMap;

    fn is_valid_heap<K, O: KeyOrder<K>>(heap: &BinaryHeap<K, O>) -> bool {
        for (i, current) in heap.data.iter().enumerate().skip(1) {
            let parent = &heap.data[(i - 1) / 2];
            if heap.order.less(&current.key, &parent.key) {
                return false;
            }
        }
        true
    }

    fn heap_of(items: &[i32]) -> BinaryHeap<i32, NaturalOrder> {
        let mut heap = BinaryHeap::with_capacity(items.len(), NaturalOrder);
        for (i, &x) in items.iter().enumerate() {
            heap.push(x, MediatorIndex(i), |_, _| {});
        }
        heap
    }

    fn keys(heap: &BinaryHeap<i32, NaturalOrder>) -> Vec<i32> {
        heap.iter().map(|(_, &k)| k).collect()
    }

    #[test]
    fn test_heap_fill() {
        let items = [
            70, 50, 0, 1, 2, 4, 6, 7, 9, 72, 4, 4, 87, 78, 72, 6, 7, 9, 2, -50, -72, -50, -42, -1,
            -3, -13,
        ];
        let mut minimum = i32::MAX;
        let mut heap = BinaryHeap::with_capacity(0, NaturalOrder);
        assert!(heap.peek().is_none());
        assert!(is_valid_heap(&heap), "Heap state is invalid");
        for (i, &x) in items.iter().enumerate() {
            if x < minimum {
                minimum = x;
            }
            heap.push(x, MediatorIndex(i), |_, _| {});
            assert!(
                is_valid_heap(&heap),
                "Heap state is invalid after pushing {}",
                x
            );
            let (_, &heap_min) = heap.peek().unwrap();
            assert_eq!(minimum, heap_min)
        }
    }

    #[test]
    fn test_change_logger() {
        let items = [
            2, 3, 21, 22, 25, 29, 36, 90, 89, 88, 87, 83, 48, 50, 52, 69, 65, 55, 73, 75, 76, -53,
            78, 81, -45, -41, 91, -34, -33, -31, -27, -22, -19, -8, -5, -3,
        ];
        let mut last_positions = HashMap::<MediatorIndex, HeapIndex>::new();
        let mut heap = BinaryHeap::with_capacity(items.len(), NaturalOrder);
        for (i, &x) in items.iter().enumerate() {
            last_positions.insert(MediatorIndex(i), heap.len());
            heap.push(x, MediatorIndex(i), |outer, pos| {
                last_positions.insert(outer, pos);
            });
        }

        let check = |heap: &BinaryHeap<i32, NaturalOrder>,
                     last_positions: &HashMap<MediatorIndex, HeapIndex>| {
            assert_eq!(last_positions.len(), heap.usize_len());
            for (&outer, &position) in last_positions.iter() {
                let (found, &key) = heap.look_into(position).unwrap();
                assert_eq!(found, outer);
                assert_eq!(items[outer.0], key);
            }
        };
        check(&heap, &last_positions);

        while let Some((outer, key)) = heap.pop_for_test(|outer, pos| {
            last_positions.insert(outer, pos);
        }) {
            assert_eq!(items[outer.0], key);
            last_positions.remove(&outer);
            check(&heap, &last_positions);
        }
        assert!(last_positions.is_empty());
    }

    impl<K, O: KeyOrder<K>> BinaryHeap<K, O> {
        fn pop_for_test<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
            &mut self,
            change_handler: TChangeHandler,
        ) -> Option<(MediatorIndex, K)> {
            self.remove(HeapIndex::ROOT, change_handler)
        }
    }

    #[test]
    fn test_pop() {
        let items = [
            -16, 5, 11, -1, -34, -42, -5, -6, 25, -35, 11, 35, -2, 40, 42, 40, -45, -48, 48, -38,
            -28, -33, -31, 34, -18, 25, 16, -33, -11, -6, -35, -38, 35, -41, -38, 31, -38, -23, 26,
            44, 38, 11, -49, 30, 7, 13, 12, -4, -11, -24, -49, 26, 42, 46, -25, -22, -6, -42, 28,
            45, -47, 8, 8, 21, 49, -12, -5, -33, -37, 24, -3, -26, 6, -13, 16, -40, -14, -39, -26,
            12, -44, 47, 45, -41, -22, -11, 20, 43, -44, 24, 47, 40, 43, 9, 19, 12, -17, 30, -36,
        ];

        let mut heap = heap_of(&items);
        assert!(is_valid_heap(&heap), "Heap is invalid before pops");

        let mut sorted_items = items;
        sorted_items.sort_unstable();
        for &x in sorted_items.iter() {
            let (outer, val) = heap.pop_for_test(|_, _| {}).unwrap();
            assert_eq!(val, x);
            assert_eq!(items[outer.0], val);
            assert!(is_valid_heap(&heap), "Heap is invalid after {}", x);
        }

        assert!(heap.pop_for_test(|_, _| {}).is_none());
    }

    #[test]
    fn test_remove_last_position() {
        let mut heap = heap_of(&[1, 2, 3]);
        let mut calls = 0;
        assert_eq!(
            heap.remove(HeapIndex(2), |_, _| calls += 1),
            Some((MediatorIndex(2), 3))
        );
        assert_eq!(calls, 0, "Removing the last slot must not move anything");
        assert_eq!(keys(&heap), [1, 2]);
        assert!(heap.remove(HeapIndex(2), |_, _| {}).is_none());
    }

    #[test]
    fn test_remove_single() {
        let mut heap = heap_of(&[42]);
        assert_eq!(
            heap.remove(HeapIndex::ROOT, |_, _| unreachable!()),
            Some((MediatorIndex(0), 42))
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn test_remove_needs_heapify_up() {
        // Layout after pushes is exactly [1, 10, 2, 11, 12, 3, 4].
        let mut heap = heap_of(&[1, 10, 2, 11, 12, 3, 4]);
        assert_eq!(keys(&heap), [1, 10, 2, 11, 12, 3, 4]);

        // 4 moves into slot of 11 and is smaller than its new parent 10.
        assert_eq!(
            heap.remove(HeapIndex(3), |_, _| {}),
            Some((MediatorIndex(3), 11))
        );
        assert!(is_valid_heap(&heap), "Replacement must move up");
        assert_eq!(keys(&heap), [1, 4, 2, 10, 12, 3]);
    }

    #[test]
    fn test_change_key() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert!(is_valid_heap(&heap), "Invalid before change");
        assert_eq!(heap.change_key(HeapIndex(3), -10, |_, _| {}), 3);
        assert!(is_valid_heap(&heap), "Invalid after lowering");
        assert_eq!(heap.peek(), Some((MediatorIndex(3), &-10)));
        assert_eq!(heap.change_key(HeapIndex::ROOT, 10, |_, _| {}), -10);
        assert!(is_valid_heap(&heap), "Invalid after raising");
        assert_eq!(heap.peek(), Some((MediatorIndex(0), &0)));
    }

    #[test]
    fn test_change_key_equal_does_not_move() {
        let mut heap = heap_of(&[5, 5, 5]);
        let mut calls = 0;
        heap.change_key(HeapIndex(0), 5, |_, _| calls += 1);
        heap.change_key(HeapIndex(2), 5, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_left_child_wins_ties() {
        let mut heap = heap_of(&[0, 3, 3]);
        heap.change_key(HeapIndex::ROOT, 9, |_, _| {});
        assert_eq!(heap.look_into(HeapIndex(1)), Some((MediatorIndex(0), &9)));
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(1), &3)));
    }

    #[test]
    fn test_custom_order() {
        let mut heap = BinaryHeap::with_capacity(4, CompareFn(|a: &i32, b: &i32| b.cmp(a)));
        for (i, &x) in [3, 9, 1, 7].iter().enumerate() {
            heap.push(x, MediatorIndex(i), |_, _| {});
        }
        assert_eq!(heap.peek(), Some((MediatorIndex(1), &9)));
    }

    #[test]
    fn test_clear() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert!(!heap.is_empty(), "Heap must be non empty");
        heap.clear();
        assert!(heap.is_empty(), "Heap must be empty");
        assert!(heap.peek().is_none());
    }

    #[test]
    fn test_change_outer_pos() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(0), &0)));
        assert_eq!(
            heap.change_outer_pos(MediatorIndex(10), HeapIndex(0)),
            MediatorIndex(0)
        );
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(10), &0)));
    }
}
