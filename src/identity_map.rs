//! A map whose reads never miss: an absent key is stored as its own value.
//!
//! See [`IdentityMap<T, S>`] for more information.
//!
//! [`IdentityMap<T, S>`]: struct.IdentityMap.html

use {
    std::{
        borrow::Borrow,
        cell::Cell,
        collections::hash_map::RandomState,
        hash::{BuildHasher, Hash},
        iter::{self, FusedIterator},
        slice,
    },
    indexmap::{map::Entry, IndexMap},
};

/// The value stored for each key of an `IdentityMap`.
#[derive(Clone, Debug)]
pub(crate) struct Slot {
    /// The index of the value this key maps to.
    /// A `Cell` so path compression can happen behind a shared reference.
    parent: Cell<usize>,
    /// Whether the key was inserted as a key, and not only named as a value.
    materialized: bool,
}

impl Slot {
    /// Create a `Slot` for the key at `index` that maps to itself.
    fn new(index: usize, materialized: bool) -> Self {
        Self {
            parent: Cell::new(index),
            materialized,
        }
    }
}

/// An insertion-ordered map from keys to keys with an identity default.
///
/// Reading a key that is not present does not fail. Instead the key is inserted with
/// itself as its value and that value is returned. Only `get` inserts this way,
/// `contains` and the iterators never change the map.
///
/// Values are always keys of the map as well: a value that was never inserted as a key
/// is kept in a slot that is not counted by `len` and not yielded by the iterators until
/// it gets materialized by a read.
///
/// # Examples
///
/// ```
/// use disjoint_set::IdentityMap;
///
/// let mut map = IdentityMap::new();
///
/// assert!(!map.contains(&'a'));
/// assert_eq!(map.get('a'), &'a');
/// assert!(map.contains(&'a'));
///
/// map.set('b', 'a');
/// assert_eq!(map.get('b'), &'a');
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct IdentityMap<T, S = RandomState> {
    slots: IndexMap<T, Slot, S>,
    /// The indices of the materialized slots in the order they were materialized.
    order: Vec<usize>,
}

impl<T> IdentityMap<T, RandomState> where
    T: Eq + Hash,
{
    /// Constructs a new, empty `IdentityMap<T>`.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Constructs a new, empty `IdentityMap<T>` with room for `capacity` keys.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<T, S> IdentityMap<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: IndexMap::with_hasher(hash_builder),
            order: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            slots: IndexMap::with_capacity_and_hasher(capacity, hash_builder),
            order: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.slots.hasher()
    }

    /// Returns the value of `key`, inserting `key` as its own value if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::IdentityMap;
    ///
    /// let mut map = IdentityMap::new();
    /// map.set(1, 2);
    ///
    /// assert_eq!(map.get(1), &2);
    /// assert_eq!(map.get(3), &3);
    /// assert_eq!(map.len(), 3);
    /// ```
    pub fn get(&mut self, key: T) -> &T {
        let index = self.materialize(key);

        self.key(self.parent(index))
    }

    /// Maps `key` to `value`, overwriting the old value of `key`.
    ///
    /// The default is not computed for `key`.
    /// If `value` is not present it gets a slot but is not materialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::IdentityMap;
    ///
    /// let mut map = IdentityMap::new();
    /// map.set("a", "b");
    ///
    /// assert!(map.contains("a"));
    /// assert!(!map.contains("b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: T, value: T) {
        let index = self.materialize(key);
        let parent = self.slot_index(value);

        self.set_parent(index, parent);
    }

    /// Returns `true` if `key` has been materialized.
    ///
    /// This never inserts `key`.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index_of(key).is_some()
    }

    /// Returns the amount of materialized keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// An iterator over the materialized keys in insertion order.
    #[inline]
    pub fn keys(&self) -> Keys<T, S> {
        Keys {
            map: self,
            positions: self.order.iter(),
        }
    }

    /// An iterator over the materialized keys and their values in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<T, S> {
        Iter {
            map: self,
            positions: self.order.iter(),
        }
    }

    /// Materializes `key` and returns its index.
    pub(crate) fn materialize(&mut self, key: T) -> usize {
        let index = self.slot_index(key);
        self.materialize_index(index);

        index
    }

    /// Marks the slot at `index` as materialized.
    ///
    /// The key counts as inserted now, even if its slot was made earlier for a value.
    pub(crate) fn materialize_index(&mut self, index: usize) {
        let slot = &mut self.slots[index];

        if !slot.materialized {
            slot.materialized = true;
            self.order.push(index);
        }
    }

    /// Returns the index of `key`, giving it an unmaterialized slot if it has none.
    pub(crate) fn slot_index(&mut self, key: T) -> usize {
        match self.slots.entry(key) {
            Entry::Occupied(occupied) => occupied.index(),
            Entry::Vacant(vacant) => {
                let index = vacant.index();
                vacant.insert(Slot::new(index, false));

                index
            },
        }
    }

    /// Returns the index of `key` if it is materialized.
    #[inline]
    pub(crate) fn index_of<Q>(&self, key: &Q) -> Option<usize> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let (index, _key, slot) = self.slots.get_full(key)?;

        if slot.materialized {
            Some(index)
        } else {
            None
        }
    }
}

impl<T, S> IdentityMap<T, S> {
    /// The indices of all materialized slots in insertion order.
    #[inline]
    pub(crate) fn materialized_indices(&self) -> iter::Cloned<slice::Iter<usize>> {
        self.order.iter().cloned()
    }

    /// Returns the amount of slots, materialized or not.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &T {
        self.slot_entry(index).0
    }

    #[inline]
    pub(crate) fn parent(&self, index: usize) -> usize {
        self.slot_entry(index).1.parent.get()
    }

    #[inline]
    pub(crate) fn set_parent(&self, index: usize, parent: usize) {
        self.slot_entry(index).1.parent.set(parent);
    }

    #[inline]
    pub(crate) fn is_materialized(&self, index: usize) -> bool {
        self.slot_entry(index).1.materialized
    }

    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    fn slot_entry(&self, index: usize) -> (&T, &Slot) {
        match self.slots.get_index(index) {
            Some(entry) => entry,
            None => panic!("slot index {} out of bounds for {} slots", index, self.slots.len()),
        }
    }
}

impl<T> Default for IdentityMap<T, RandomState> where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> std::fmt::Debug for IdentityMap<T, S> where
    T: std::fmt::Debug + Eq + Hash,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, T, S> IntoIterator for &'a IdentityMap<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a T, &'a T);
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Iter<'a, T, S> {
        self.iter()
    }
}

/// An iterator over the materialized keys of an `IdentityMap<T, S>`.
///
/// This struct is created by the [`keys`] method on [`IdentityMap<T, S>`].
///
/// [`keys`]: struct.IdentityMap.html#method.keys
/// [`IdentityMap<T, S>`]: struct.IdentityMap.html
#[derive(Clone)]
pub struct Keys<'a, T: 'a, S: 'a> {
    map: &'a IdentityMap<T, S>,
    positions: slice::Iter<'a, usize>,
}

impl<'a, T, S> Iterator for Keys<'a, T, S> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let &index = self.positions.next()?;

        Some(self.map.key(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, T, S> ExactSizeIterator for Keys<'a, T, S> {}

impl<'a, T, S> FusedIterator for Keys<'a, T, S> {}

/// An iterator over the materialized keys and their values of an `IdentityMap<T, S>`.
///
/// This struct is created by the [`iter`] method on [`IdentityMap<T, S>`].
///
/// [`iter`]: struct.IdentityMap.html#method.iter
/// [`IdentityMap<T, S>`]: struct.IdentityMap.html
#[derive(Clone)]
pub struct Iter<'a, T: 'a, S: 'a> {
    map: &'a IdentityMap<T, S>,
    positions: slice::Iter<'a, usize>,
}

impl<'a, T, S> Iterator for Iter<'a, T, S> {
    type Item = (&'a T, &'a T);

    #[inline]
    fn next(&mut self) -> Option<(&'a T, &'a T)> {
        let &index = self.positions.next()?;

        Some((self.map.key(index), self.map.key(self.map.parent(index))))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, T, S> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T, S> FusedIterator for Iter<'a, T, S> {}
