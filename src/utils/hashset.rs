//! The hash-set implementation used throughout this crate.

/// Hashset using [`hashbrown::HashSet`].
pub type HashSet<T> = hashbrown::HashSet<T>;
