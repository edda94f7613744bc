// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact registry: the set of pointer contacts currently down.
//!
//! ## Usage
//!
//! 1) Call [`ContactRegistry::start`] when a pointer goes down.
//! 2) Call [`ContactRegistry::move_to`] on each move; unknown ids are ignored.
//! 3) Call [`ContactRegistry::end`] (or [`ContactRegistry::cancel`]) when it lifts.
//!
//! Contacts are kept in the order they went down. Gesture code relies on that
//! order: a pinch is always driven by the first two contacts.

use kurbo::Point;
use smallvec::SmallVec;

/// Number of contacts stored inline before spilling to the heap.
const INLINE_CONTACTS: usize = 4;

/// One active pointer contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact<K> {
    /// Caller-supplied identity of the pointer.
    pub id: K,
    /// Last known position.
    pub point: Point,
}

/// Active contacts keyed by id, in insertion order.
#[derive(Clone, Debug)]
pub struct ContactRegistry<K> {
    contacts: SmallVec<[Contact<K>; INLINE_CONTACTS]>,
}

impl<K> Default for ContactRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ContactRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contacts: SmallVec::new(),
        }
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no contact is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Active contacts in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact<K>] {
        &self.contacts
    }

    /// Positions of the active contacts in insertion order.
    pub fn active_contacts(&self) -> impl Iterator<Item = Point> + '_ {
        self.contacts.iter().map(|c| c.point)
    }

    /// The first registered contact, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Contact<K>> {
        self.contacts.first()
    }

    /// The first two registered contacts, if at least two are down.
    #[must_use]
    pub fn first_two(&self) -> Option<[&Contact<K>; 2]> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some([a, b]),
            _ => None,
        }
    }

    /// Removes every contact.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}

impl<K: Copy + Eq> ContactRegistry<K> {
    /// Records a contact going down.
    ///
    /// If `id` is already registered its point is overwritten in place and it
    /// keeps its position in the insertion order.
    pub fn start(&mut self, id: K, point: Point) {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(existing) => existing.point = point,
            None => self.contacts.push(Contact { id, point }),
        }
    }

    /// Updates the position of `id`.
    ///
    /// Returns `false` (and changes nothing) if `id` is not registered.
    pub fn move_to(&mut self, id: K, point: Point) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(existing) => {
                existing.point = point;
                true
            }
            None => false,
        }
    }

    /// Removes `id`, returning its last position if it was registered.
    pub fn end(&mut self, id: K) -> Option<Point> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(index).point)
    }

    /// Removes `id` after the platform cancelled it. Same as [`Self::end`].
    pub fn cancel(&mut self, id: K) -> Option<Point> {
        self.end(id)
    }

    /// Last known position of `id`.
    #[must_use]
    pub fn get(&self, id: K) -> Option<Point> {
        self.contacts.iter().find(|c| c.id == id).map(|c| c.point)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }
}
