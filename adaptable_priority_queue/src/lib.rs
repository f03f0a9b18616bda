//! This is location-aware (adaptable) priority queue built on binary heap.
//!
//! Each entry has associated *key* and *value*.
//! Keys are ordered by [`KeyOrder`] (natural ordering by default),
//! values are arbitrary payload and never compared.
//!
//! Removing returns entry with the smallest key.
//! Inserting returns [`EntryHandle`] that can be used later
//! to remove the entry or replace its key or value,
//! wherever the entry sits in the heap at that moment.
//! Every entry caches its own position in heap, so such operations don't search.
//!
//! Insert, remove minimum, remove by handle, replace key have ***O(log n)*** time complexity;
//! min, lookup and value replacement by handle are ***O(1)***.
//!
//! Handles are checked: using a handle of removed entry, or of other heap,
//! fails with [`HeapError::InvalidHandle`] instead of touching wrong entry.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra].
//! When shorter path to node already waiting in queue is found,
//! its key is lowered through the handle kept for that node.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`KeyOrder`]: trait.KeyOrder.html
//! [`EntryHandle`]: struct.EntryHandle.html
//! [`HeapError::InvalidHandle`]: enum.HeapError.html#variant.InvalidHandle
//!
//! ```
//! use adaptable_priority_queue::{AdaptiveBinaryHeap, EntryHandle};
//!
//! // Adjacency list: (neighbour, edge weight)
//! fn shortest_paths(graph: &[Vec<(usize, u32)>], source: usize) -> Vec<Option<u32>> {
//!     let mut dist: Vec<Option<u32>> = vec![None; graph.len()];
//!     let mut handles: Vec<Option<EntryHandle>> = vec![None; graph.len()];
//!     let mut done = vec![false; graph.len()];
//!     let mut frontier = AdaptiveBinaryHeap::with_capacity(graph.len());
//!
//!     dist[source] = Some(0);
//!     handles[source] = Some(frontier.insert(0u32, source).unwrap());
//!
//!     while let Some((distance, node)) = frontier.remove_min() {
//!         done[node] = true;
//!         handles[node] = None;
//!         for &(next, weight) in &graph[node] {
//!             if done[next] {
//!                 continue;
//!             }
//!             let candidate = distance + weight;
//!             match (dist[next], handles[next]) {
//!                 (Some(known), Some(handle)) if candidate < known => {
//!                     // Have found better path to node in queue
//!                     frontier.replace_key(handle, candidate).unwrap();
//!                     dist[next] = Some(candidate);
//!                 }
//!                 (None, _) => {
//!                     handles[next] = Some(frontier.insert(candidate, next).unwrap());
//!                     dist[next] = Some(candidate);
//!                 }
//!                 _ => { /* Have found worse path. */ }
//!             }
//!         }
//!     }
//!     dist
//! }
//!
//! let graph = vec![
//!     vec![(1, 4), (2, 1)],
//!     vec![(3, 1)],
//!     vec![(1, 2), (3, 5)],
//!     vec![],
//!     vec![(0, 1)],
//! ];
//! assert_eq!(
//!     shortest_paths(&graph, 0),
//!     [Some(0), Some(3), Some(1), Some(4), None]
//! );
//! ```
//!

mod adaptable_heap;
mod editable_binary_heap;
mod mediator;
mod order;

pub use crate::adaptable_heap::{
    AdaptiveBinaryHeap, AdaptiveBinaryHeapBorrowIter, AdaptiveBinaryHeapIterator, EntryHandle,
    EntryRef, HeapError,
};
pub use crate::order::{CompareFn, KeyOrder, NaturalOrder, ReverseOrder};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
