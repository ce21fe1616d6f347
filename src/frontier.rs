//! Frontier of vertices not yet finalized, ordered by `(distance, vertex)`.
//!
//! Two disciplines with identical pop order:
//!  - `IndexedHeap`: binary min-heap with a position table, decrease-key by sift
//!  - `OrderedFrontier`: `BTreeSet` keyed by `(distance, vertex)`, remove then reinsert

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engine::Distance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierStats { pub pushes: u64, pub pops: u64, pub repositions: u64, pub max_size: u64 }

pub trait Frontier {
    fn with_vertices(n: usize) -> Self;
    /// Inserts a vertex that is not currently queued.
    fn push(&mut self, vertex: usize, dist: Distance);
    /// Moves a queued vertex to its new key. A vertex that already left the
    /// frontier stays out.
    fn reposition(&mut self, vertex: usize, dist: Distance);
    /// Removes the smallest `(distance, vertex)` entry.
    fn pop_min(&mut self) -> Option<(usize, Distance)>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    fn stats(&self) -> FrontierStats;
}

// Field order gives the (distance, vertex) lexicographic ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry { dist: Distance, vertex: usize }

const ABSENT: usize = usize::MAX;

pub struct IndexedHeap { data: Vec<Entry>, pos: Vec<usize>, stats: FrontierStats }

impl IndexedHeap {
    #[inline] fn place(&mut self, idx: usize) { self.pos[self.data[idx].vertex] = idx; }
    #[inline] fn swap(&mut self, a: usize, b: usize) { self.data.swap(a, b); self.place(a); self.place(b); }
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] < self.data[parent] { self.swap(idx, parent); idx = parent; } else { break; }
        }
    }
    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let left = idx * 2 + 1;
            if left >= n { break; }
            let right = left + 1;
            let mut best = left;
            if right < n && self.data[right] < self.data[left] { best = right; }
            if self.data[best] < self.data[idx] { self.swap(idx, best); idx = best; } else { break; }
        }
    }
}

impl Frontier for IndexedHeap {
    fn with_vertices(n: usize) -> Self {
        Self { data: Vec::with_capacity(n), pos: vec![ABSENT; n], stats: FrontierStats::default() }
    }

    fn push(&mut self, vertex: usize, dist: Distance) {
        debug_assert_eq!(self.pos[vertex], ABSENT);
        self.data.push(Entry { dist, vertex });
        let idx = self.data.len() - 1;
        self.place(idx);
        self.sift_up(idx);
        self.stats.pushes += 1;
        self.stats.max_size = self.stats.max_size.max(self.data.len() as u64);
    }

    fn reposition(&mut self, vertex: usize, dist: Distance) {
        let idx = self.pos[vertex];
        if idx == ABSENT { return; }
        let old = self.data[idx].dist;
        self.data[idx].dist = dist;
        if dist < old { self.sift_up(idx); } else { self.sift_down(idx); }
        self.stats.repositions += 1;
    }

    fn pop_min(&mut self) -> Option<(usize, Distance)> {
        let len = self.data.len();
        if len == 0 { return None; }
        self.swap(0, len - 1);
        let top = self.data.pop()?;
        self.pos[top.vertex] = ABSENT;
        if !self.data.is_empty() { self.sift_down(0); }
        self.stats.pops += 1;
        Some((top.vertex, top.dist))
    }

    fn len(&self) -> usize { self.data.len() }
    fn stats(&self) -> FrontierStats { self.stats }
}

pub struct OrderedFrontier { set: BTreeSet<(Distance, usize)>, keys: Vec<Option<Distance>>, stats: FrontierStats }

impl Frontier for OrderedFrontier {
    fn with_vertices(n: usize) -> Self {
        Self { set: BTreeSet::new(), keys: vec![None; n], stats: FrontierStats::default() }
    }

    fn push(&mut self, vertex: usize, dist: Distance) {
        self.set.insert((dist, vertex));
        self.keys[vertex] = Some(dist);
        self.stats.pushes += 1;
        self.stats.max_size = self.stats.max_size.max(self.set.len() as u64);
    }

    fn reposition(&mut self, vertex: usize, dist: Distance) {
        let Some(old) = self.keys[vertex] else { return };
        self.set.remove(&(old, vertex));
        self.set.insert((dist, vertex));
        self.keys[vertex] = Some(dist);
        self.stats.repositions += 1;
    }

    fn pop_min(&mut self) -> Option<(usize, Distance)> {
        let (dist, vertex) = self.set.pop_first()?;
        self.keys[vertex] = None;
        self.stats.pops += 1;
        Some((vertex, dist))
    }

    fn len(&self) -> usize { self.set.len() }
    fn stats(&self) -> FrontierStats { self.stats }
}
