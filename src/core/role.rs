//! Role identification and per-role data storage.
//!
//! ## RoleId
//!
//! Type-safe role identifier supporting 1-255 roles. Roles are the
//! positions of the game's players in every per-role profile the state
//! machine returns (legal moves, goals, move vectors).
//!
//! ## RoleMap
//!
//! Per-role data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `RoleId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Role identifier supporting 1-255 roles.
///
/// Role indices are 0-based: the first role is `RoleId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(pub u8);

impl RoleId {
    /// Create a new role ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw role index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all role IDs for a game with `role_count` roles.
    ///
    /// ```
    /// use ggp_search::core::RoleId;
    ///
    /// let roles: Vec<_> = RoleId::all(3).collect();
    /// assert_eq!(roles, vec![RoleId::new(0), RoleId::new(1), RoleId::new(2)]);
    /// ```
    pub fn all(role_count: usize) -> impl Iterator<Item = RoleId> {
        (0..role_count as u8).map(RoleId)
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Role {}", self.0)
    }
}

/// Per-role data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per role.
///
/// ## Example
///
/// ```
/// use ggp_search::core::{RoleId, RoleMap};
///
/// let mut goals: RoleMap<i64> = RoleMap::with_value(2, 0);
/// goals[RoleId::new(1)] = 100;
///
/// assert_eq!(goals[RoleId::new(0)], 0);
/// assert_eq!(goals[RoleId::new(1)], 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: Vec<T>,
}

impl<T> RoleMap<T> {
    /// Create a new RoleMap with values from a factory function.
    pub fn new(role_count: usize, factory: impl Fn(RoleId) -> T) -> Self {
        assert!(role_count > 0, "Must have at least 1 role");
        assert!(role_count <= 255, "At most 255 roles supported");

        let data = (0..role_count as u8).map(|i| factory(RoleId(i))).collect();

        Self { data }
    }

    /// Create a new RoleMap with all entries set to the same value.
    pub fn with_value(role_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(role_count, |_| value.clone())
    }

    /// Wrap an existing per-role vector, entry `i` belonging to `RoleId(i)`.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 role");
        assert!(data.len() <= 255, "At most 255 roles supported");
        Self { data }
    }

    /// Get the number of roles.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a role's data, if the role exists.
    #[must_use]
    pub fn get(&self, role: RoleId) -> Option<&T> {
        self.data.get(role.index())
    }

    /// Iterate over (RoleId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (RoleId(i as u8), v))
    }

    /// Iterate over values in role order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all role IDs.
    pub fn role_ids(&self) -> impl Iterator<Item = RoleId> {
        (0..self.data.len() as u8).map(RoleId)
    }

    /// Borrow the entries as a slice in role order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<RoleId> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: RoleId) -> &Self::Output {
        &self.data[role.index()]
    }
}

impl<T> IndexMut<RoleId> for RoleMap<T> {
    fn index_mut(&mut self, role: RoleId) -> &mut Self::Output {
        &mut self.data[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_basics() {
        let r0 = RoleId::new(0);
        let r1 = RoleId::new(1);

        assert_eq!(r0.index(), 0);
        assert_eq!(r1.index(), 1);
        assert_eq!(format!("{}", r1), "Role 1");
    }

    #[test]
    fn test_role_map_new() {
        let map: RoleMap<i64> = RoleMap::new(3, |r| r.index() as i64 * 50);

        assert_eq!(map[RoleId::new(0)], 0);
        assert_eq!(map[RoleId::new(1)], 50);
        assert_eq!(map[RoleId::new(2)], 100);
    }

    #[test]
    fn test_role_map_from_vec() {
        let map = RoleMap::from_vec(vec![7, 8]);

        assert_eq!(map.role_count(), 2);
        assert_eq!(map.get(RoleId::new(1)), Some(&8));
        assert_eq!(map.get(RoleId::new(2)), None);
        assert_eq!(map.as_slice(), &[7, 8]);
    }

    #[test]
    fn test_role_map_iter() {
        let map: RoleMap<i64> = RoleMap::new(2, |r| r.index() as i64);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(RoleId::new(0), &0), (RoleId::new(1), &1)]);
    }

    #[test]
    fn test_role_map_serialization() {
        let map: RoleMap<i64> = RoleMap::new(2, |r| r.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: RoleMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 role")]
    fn test_role_map_zero_roles() {
        let _: RoleMap<i64> = RoleMap::with_value(0, 0);
    }
}
