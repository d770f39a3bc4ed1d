//! Stack with permanent membership, the auxiliary structure of depth-first search.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// A LIFO stack of pending items plus the set of every key ever pushed.
///
/// A key stays a member after its item is popped, so each key is pushed at
/// most once over the stack's lifetime. The capacity hint is not a bound.
#[derive(Debug, Clone)]
pub struct DfsStack<K, T = K> {
    stack: Vec<T>,
    seen: FxHashSet<K>,
}

impl<K: Hash + Eq, T> DfsStack<K, T> {
    /// Create a stack sized for roughly `order` keys.
    pub fn with_capacity(order: usize) -> Self {
        Self {
            stack: Vec::with_capacity(order),
            seen: FxHashSet::with_capacity_and_hasher(order, Default::default()),
        }
    }

    /// Whether `key` has ever been pushed.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seen.contains(key)
    }

    /// Push `item` under `key` unless `key` was already seen.
    ///
    /// Returns whether the push happened.
    pub fn push_with(&mut self, key: K, item: T) -> bool {
        if !self.seen.insert(key) {
            return false;
        }
        self.stack.push(item);
        true
    }

    /// Remove and return the most recently pushed item.
    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    /// Items pushed and not yet popped.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no items are pending.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Keys ever pushed.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<K: Hash + Eq + Clone> DfsStack<K, K> {
    /// Push `key` as its own item.
    pub fn push(&mut self, key: K) -> bool {
        let item = key.clone();
        self.push_with(key, item)
    }
}

impl<K: Hash + Eq, T> Default for DfsStack<K, T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
