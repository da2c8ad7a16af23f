//! Ordered entity pools
//!
//! One pool per entity kind. Entities are addressed by their current index;
//! removing index `i` shifts everything after it down one slot, so any index
//! captured before the removal that is `>= i` is stale afterwards.
//!
//! Passes that remove while scanning go through [`EntityPool::retain`] (build
//! the kept set, compact once) or find a single index with
//! [`EntityPool::position`] and then [`EntityPool::remove`] it. Nothing in the
//! sim walks a pool by index while removing from it.

use serde::{Deserialize, Serialize};

/// Growable, order-preserving collection of same-kind entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPool<T> {
    entities: Vec<T>,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityPool<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append an entity, returning its index
    pub fn spawn(&mut self, entity: T) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    /// Remove the entity at `index`, shifting later entities down.
    ///
    /// # Panics
    /// If `index >= count()`. Callers only pass indices they just looked up.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.entities.len(),
            "pool index {} out of range (count {})",
            index,
            self.entities.len()
        );
        self.entities.remove(index)
    }

    /// Keep only entities matching `keep`, preserving order. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| keep(e));
        before - self.entities.len()
    }

    /// Index of the first entity matching `pred`, in spawn order
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.entities.iter().position(pred)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entities.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entities.iter_mut()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entities
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut EntityPool<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter_mut()
    }
}
