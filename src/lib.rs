//! A [disjoint-sets/union-find] implementation over arbitrary hashable elements that are added
//! the first time they are used.
//!
//! The main struct of this crate is [`DisjointSet<T, S>`] which divides a growing universe of
//! elements in disjoint sets.
//! An element does not need to be added before it is used: every element that is passed to
//! `find`, `union` or `connected` for the first time starts out in its own set.
//! These sets can be joined with the `union` method and you can check if elements share a set
//! with the `connected` method.
//! Both are extremely fast and have an amortized complexity of `O(α(n))` where 'α' is the
//! inverse Ackermann function and `n` the amount of elements.
//!
//! This can be used for example to keep track of the connected components of an undirected
//! graph whose vertices are only discovered while reading its edges.
//! It is also a key component in implementing Kruskal's algorithm to find the minimum spanning
//! tree of a graph.
//!
//! The element to parent mapping is stored in an [`IdentityMap<T, S>`], a map where reading an
//! absent key inserts the key as its own value.
//! A `DisjointSet` can also be seeded directly with such a mapping using `from_mapping` or the
//! [`disjoint_set!`] macro. Those mappings are not checked up front, the methods that walk the
//! whole structure return an [`InvalidInitialMapping`] if a parent is not an element.
//!
//! Parallel construction with [rayon] and an `Arbitrary` implementation for [proptest] are
//! enabled by default through the `rayon` and `proptest` features.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T, S>`]: struct.DisjointSet.html
//! [`IdentityMap<T, S>`]: struct.IdentityMap.html
//! [`disjoint_set!`]: macro.disjoint_set.html
//! [`InvalidInitialMapping`]: struct.InvalidInitialMapping.html
//! [rayon]: https://docs.rs/rayon
//! [proptest]: https://docs.rs/proptest

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        ::bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod identity_map;
pub mod disjoint_set;

pub use {
    error::{InvalidInitialMapping, Reason},
    identity_map::IdentityMap,
    disjoint_set::{Class, DisjointSet},
};
