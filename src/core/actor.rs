//! Actor identification and per-actor data storage.
//!
//! ## ActorId
//!
//! Type-safe identifier for a party member, 0-based.
//!
//! ## ActorMap
//!
//! Per-actor storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `ActorId`.

use serde::{Deserialize, Serialize};

/// Largest party an `ActorMap` can hold.
pub const MAX_ACTORS: usize = 255;

/// Party member identifier supporting up to 255 actors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u8);

impl ActorId {
    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw actor index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all actor IDs for a party of `actor_count` members.
    ///
    /// Stops at `MAX_ACTORS` ids.
    ///
    /// ```
    /// use deck_battle::core::ActorId;
    ///
    /// let actors: Vec<_> = ActorId::all(3).collect();
    /// assert_eq!(actors, vec![ActorId::new(0), ActorId::new(1), ActorId::new(2)]);
    /// ```
    pub fn all(actor_count: usize) -> impl Iterator<Item = ActorId> {
        (0..=u8::MAX).take(actor_count.min(MAX_ACTORS)).map(ActorId)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor {}", self.0)
    }
}

/// Per-actor data storage with O(1) access.
///
/// Unlike a fixed-size player table, a party may be empty (every actor
/// fell before the battle started); lookups return `Option` for ids that
/// are out of range.
///
/// ## Example
///
/// ```
/// use deck_battle::core::{ActorId, ActorMap};
///
/// let mut hand_sizes = ActorMap::from_vec(vec![5, 5]).unwrap();
/// if let Some(size) = hand_sizes.get_mut(ActorId::new(1)) {
///     *size = 3;
/// }
///
/// assert_eq!(hand_sizes.get(ActorId::new(0)), Some(&5));
/// assert_eq!(hand_sizes.get(ActorId::new(1)), Some(&3));
/// assert_eq!(hand_sizes.get(ActorId::new(9)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActorMap<T> {
    data: Vec<T>,
}

impl<T> ActorMap<T> {
    /// Build a map from values in actor order.
    ///
    /// Returns `None` for more than `MAX_ACTORS` values.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Option<Self> {
        (data.len() <= MAX_ACTORS).then_some(Self { data })
    }

    /// Get the number of actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the map has no actors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, actor: ActorId) -> Option<&T> {
        self.data.get(actor.index())
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, actor: ActorId) -> Option<&mut T> {
        self.data.get_mut(actor.index())
    }

    /// Iterate over (ActorId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &T)> {
        ActorId::all(self.data.len()).zip(self.data.iter())
    }

    /// Iterate over (ActorId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut T)> {
        ActorId::all(self.data.len()).zip(self.data.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_basics() {
        let a0 = ActorId::new(0);
        let a1 = ActorId::new(1);

        assert_eq!(a0.index(), 0);
        assert_eq!(a1.index(), 1);
        assert_eq!(format!("{}", a1), "Actor 1");
    }

    #[test]
    fn test_all_caps_at_max_actors() {
        assert_eq!(ActorId::all(1000).count(), MAX_ACTORS);
        assert_eq!(ActorId::all(1000).last(), Some(ActorId::new(254)));
    }

    #[test]
    fn test_actor_map_empty_party() {
        let map: ActorMap<i32> = ActorMap::from_vec(Vec::new()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.get(ActorId::new(0)), None);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_actor_map_rejects_oversized_party() {
        assert!(ActorMap::from_vec(vec![0u8; MAX_ACTORS]).is_some());
        assert!(ActorMap::from_vec(vec![0u8; MAX_ACTORS + 1]).is_none());
    }

    #[test]
    fn test_actor_map_mutation() {
        let mut map: ActorMap<i32> = ActorMap::from_vec(vec![0, 0]).unwrap();

        if let Some(v) = map.get_mut(ActorId::new(1)) {
            *v = 20;
        }

        assert_eq!(map.get(ActorId::new(0)), Some(&0));
        assert_eq!(map.get(ActorId::new(1)), Some(&20));
        assert!(map.get_mut(ActorId::new(2)).is_none());
    }

    #[test]
    fn test_actor_map_iter() {
        let mut map: ActorMap<i32> = ActorMap::from_vec(vec![0, 1, 2]).unwrap();
        for (actor, v) in map.iter_mut() {
            *v += actor.index() as i32;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (ActorId::new(0), &0));
        assert_eq!(pairs[2], (ActorId::new(2), &4));
    }
}
