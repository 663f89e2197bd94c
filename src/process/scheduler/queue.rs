/*!
 * Run Queue
 * Stride-ordered runnable set. Callers hold the scheduler lock.
 */

use super::entry::Entry;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{Pid, StrideValue};
use crate::scheduler::types::StrideConfig;
use ahash::AHashSet;
use std::collections::binary_heap::PeekMut;
use std::collections::BinaryHeap;

/// Runnable set (max-heap by logical stride, furthest behind on top)
#[derive(Debug, Default)]
pub(super) struct RunQueue {
    heap: BinaryHeap<Entry>,
    members: AHashSet<Pid>,
}

impl RunQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn contains(&self, pid: Pid) -> bool {
        self.members.contains(&pid)
    }

    /// Logically smallest entry - O(1)
    #[inline]
    pub fn peek(&self) -> Option<&Entry> {
        self.heap.peek()
    }

    /// Top entry for in-place update; heap order is restored when the guard drops
    #[inline]
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, Entry>> {
        self.heap.peek_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.heap.iter()
    }

    pub fn find(&self, pid: Pid) -> Option<&Entry> {
        if !self.contains(pid) {
            return None;
        }
        self.heap.iter().find(|e| e.pid == pid)
    }

    /// Stride a newly runnable task starts from: the current logical minimum
    #[inline]
    pub fn baseline(&self) -> StrideValue {
        self.heap.peek().map(|e| e.stride.value()).unwrap_or(0)
    }

    pub fn insert(&mut self, entry: Entry) -> SchedulerResult<()> {
        if !self.members.insert(entry.pid) {
            return Err(SchedulerError::AlreadyQueued(entry.pid));
        }
        self.heap.push(entry);
        Ok(())
    }

    /// Remove by pid - O(1) membership check + O(n) rebuild
    pub fn remove(&mut self, pid: Pid) -> bool {
        if !self.members.remove(&pid) {
            return false;
        }
        self.heap.retain(|e| e.pid != pid);
        true
    }

    /// Advance a task's stride and restore heap order. Returns true if the stride wrapped.
    ///
    /// The picked task is normally still on top, which is an O(log n) sift.
    /// Anything else falls back to an O(n) rebuild.
    pub fn advance(&mut self, pid: Pid) -> SchedulerResult<bool> {
        if !self.contains(pid) {
            return Err(SchedulerError::ProcessNotFound(pid));
        }

        if let Some(mut top) = self.heap.peek_mut() {
            if top.pid == pid {
                return Ok(top.advance());
            }
        }

        self.update(pid, Entry::advance)
    }

    /// Apply `f` to one entry and rebuild the heap
    pub fn update<T, F>(&mut self, pid: Pid, f: F) -> SchedulerResult<T>
    where
        F: FnOnce(&mut Entry) -> T,
    {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let result = entries.iter_mut().find(|e| e.pid == pid).map(f);
        self.heap = BinaryHeap::from(entries);
        result.ok_or(SchedulerError::ProcessNotFound(pid))
    }

    /// Logical distance from the minimum stride to the maximum
    pub fn spread(&self, config: &StrideConfig) -> StrideValue {
        let min = match self.heap.peek() {
            Some(e) => e.stride.value(),
            None => return 0,
        };
        self.heap
            .iter()
            .map(|e| config.width().wrapping_sub(e.stride.value(), min))
            .max()
            .unwrap_or(0)
    }
}
