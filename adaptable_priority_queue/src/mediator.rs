use std::sync::atomic::{AtomicU64, Ordering};

use crate::editable_binary_heap::HeapIndex;
use indexmap::IndexMap;

/// Wrapper around possible outer vec index
/// Used to avoid mux up with heap index
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// Serial number of inserted entry.
/// Drawn from process-wide counter, so it is never reused by any queue
/// or by clones of one queue, and stale handles can't alias new entries.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(0);
        EntryId(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Everything about entry that is not needed for ordering.
#[derive(Clone, Debug)]
pub(crate) struct Record<V> {
    pub(crate) value: V,
    pub(crate) heap_idx: HeapIndex,
}

/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// Also it centralized checking for panics
#[derive(Clone, Debug)]
pub(crate) struct Mediator<V> {
    map: IndexMap<EntryId, Record<V>>,
}

impl<V> Mediator<V> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drops all records, ids of dropped records stay retired
    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    /// Stores new record under fresh id
    pub(crate) fn insert(&mut self, value: V, heap_idx: HeapIndex) -> (EntryId, MediatorIndex) {
        let id = EntryId::next();
        let (index, old) = self.map.insert_full(id, Record { value, heap_idx });
        debug_assert!(old.is_none(), "Entry ids must be unique");
        (id, MediatorIndex(index))
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (EntryId, &Record<V>) {
        self.map
            .get_index(position)
            .map(|(&id, record)| (id, record))
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get_full(&self, id: EntryId) -> Option<(MediatorIndex, &Record<V>)> {
        self.map
            .get_full(&id)
            .map(|(idx, _, record)| (MediatorIndex(idx), record))
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Record<V>> {
        self.map.get_mut(&id)
    }

    #[inline(always)]
    pub(crate) fn swap_remove_index(
        &mut self,
        MediatorIndex(index): MediatorIndex,
    ) -> (EntryId, Record<V>) {
        self.map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get_index_mut(&mut self, MediatorIndex(index): MediatorIndex) -> &mut HeapIndex {
        &mut self
            .map
            .get_index_mut(index)
            .expect("All mediator indexes must be valid")
            .1
            .heap_idx
    }
}
