//! Provide hash containers, re-exports *hashbrown* and *foldhash*.
//!
//! All containers here default to [`FixedHashState`], so iteration order
//! only depends on the inserted keys and never on the process.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FixedHashState, HashMap, HashSet};
    use core::hash::BuildHasher;

    #[test]
    fn fixed_state_is_reproducible() {
        let a = FixedHashState.hash_one("tiles");
        let b = FixedHashState.hash_one("tiles");
        assert_eq!(a, b);
        assert_ne!(a, FixedHashState.hash_one("spawn_tile"));
    }

    #[test]
    fn containers_use_fixed_state() {
        let mut map: HashMap<&str, usize> = HashMap::default();
        map.insert("x", 0);
        map.insert("y", 1);
        assert_eq!(map.get("y"), Some(&1));

        let mut set: HashSet<i32> = HashSet::default();
        assert!(set.insert(3));
        assert!(!set.insert(3));
    }
}
