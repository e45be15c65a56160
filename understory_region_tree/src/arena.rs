// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage shared by the view and layout trees.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Slot handle made of an index and a generation.
///
/// Generations saturate at `u32::MAX`; past that, a stale id can alias a live node.
pub(crate) trait SlotId: Copy + Eq {
    fn from_parts(idx: u32, generation: u32) -> Self;
    fn idx(self) -> usize;
    fn generation(self) -> u32;
}

/// Order in which [`Arena::walk`] visits live nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// Parent before children, children in declaration order.
    PreOrder,
    /// All nodes of depth `n` before any node of depth `n + 1`.
    LevelOrder,
}

/// What a walk visitor wants to happen next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Visit {
    Descend,
    SkipChildren,
    Stop,
}

#[derive(Clone, Debug)]
struct Entry<K, T> {
    generation: u32,
    parent: Option<K>,
    children: Vec<K>,
    value: T,
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<K, T> {
    slots: Vec<Option<Entry<K, T>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<K>,
    len: usize,
}

impl<K, T> Default for Arena<K, T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            len: 0,
        }
    }
}

impl<K: SlotId, T> Arena<K, T> {
    /// Insert `value` as the last child of `parent` (or as the last root).
    ///
    /// Returns `None` when `parent` is stale.
    pub(crate) fn insert(&mut self, parent: Option<K>, value: T) -> Option<K> {
        if let Some(p) = parent
            && !self.is_alive(p)
        {
            return None;
        }
        let entry = |generation| Entry {
            generation,
            parent,
            children: Vec::new(),
            value,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(entry(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(entry(generation)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Slot ids use 32-bit indices by design."
        )]
        let id = K::from_parts(idx as u32, generation);
        match parent.and_then(|p| self.entry_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        self.len += 1;
        Some(id)
    }

    /// Remove a node and its whole subtree. Returns `false` for stale ids.
    pub(crate) fn remove(&mut self, id: K) -> bool {
        let Some(parent) = self.entry(id).map(|e| e.parent) else {
            return false;
        };
        match parent.and_then(|p| self.entry_mut(p)) {
            Some(p) => p.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            if let Some(entry) = self.slots[next.idx()].take() {
                stack.extend(entry.children);
                self.free_list.push(next.idx());
                self.len -= 1;
            }
        }
        true
    }

    pub(crate) fn is_alive(&self, id: K) -> bool {
        self.entry(id).is_some()
    }

    pub(crate) fn get(&self, id: K) -> Option<&T> {
        self.entry(id).map(|e| &e.value)
    }

    pub(crate) fn get_mut(&mut self, id: K) -> Option<&mut T> {
        self.entry_mut(id).map(|e| &mut e.value)
    }

    pub(crate) fn parent_of(&self, id: K) -> Option<K> {
        self.entry(id).and_then(|e| e.parent)
    }

    pub(crate) fn children_of(&self, id: K) -> &[K] {
        self.entry(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn roots(&self) -> &[K] {
        &self.roots
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Visit live nodes in `order`, passing each node's 1-based depth.
    pub(crate) fn walk<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(K, usize, &T) -> Visit,
    {
        match order {
            Order::PreOrder => {
                let mut stack: Vec<(K, usize)> = self.roots.iter().rev().map(|r| (*r, 1)).collect();
                while let Some((id, depth)) = stack.pop() {
                    let Some(entry) = self.entry(id) else {
                        continue;
                    };
                    match visit(id, depth, &entry.value) {
                        Visit::Stop => return,
                        Visit::SkipChildren => {}
                        Visit::Descend => {
                            stack.extend(entry.children.iter().rev().map(|c| (*c, depth + 1)));
                        }
                    }
                }
            }
            Order::LevelOrder => {
                let mut queue: VecDeque<(K, usize)> =
                    self.roots.iter().map(|r| (*r, 1)).collect();
                while let Some((id, depth)) = queue.pop_front() {
                    let Some(entry) = self.entry(id) else {
                        continue;
                    };
                    match visit(id, depth, &entry.value) {
                        Visit::Stop => return,
                        Visit::SkipChildren => {}
                        Visit::Descend => {
                            queue.extend(entry.children.iter().map(|c| (*c, depth + 1)));
                        }
                    }
                }
            }
        }
    }

    fn entry(&self, id: K) -> Option<&Entry<K, T>> {
        self.slots
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|e| e.generation == id.generation())
    }

    fn entry_mut(&mut self, id: K) -> Option<&mut Entry<K, T>> {
        self.slots
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|e| e.generation == id.generation())
    }
}
