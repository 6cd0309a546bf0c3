use std::fmt;

/// Why an element of a seeded `DisjointSet` has no valid representative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The parent chain ends at a value that was never given as a key.
    Dangling,
    /// The parent chain runs into a cycle of more than one element.
    Cycle,
}

impl fmt::Display for Reason {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reason::Dangling => formatter.write_str("resolves to a value that is not a key of the mapping"),
            Reason::Cycle => formatter.write_str("runs into a parent cycle"),
        }
    }
}

/// The mapping a `DisjointSet` was constructed from is not a forest over its own keys.
///
/// This is only detected when the whole structure is enumerated, see
/// [`DisjointSet::iter`](struct.DisjointSet.html#method.iter).
/// Check that all keys map to other keys and not to some external values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid initial mapping: the parent chain of {element:?} {reason}")]
pub struct InvalidInitialMapping<T> {
    /// The element whose representative could not be resolved.
    pub element: T,
    /// How the parent chain of `element` goes wrong.
    pub reason: Reason,
}
