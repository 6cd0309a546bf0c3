//! A [disjoint-sets/union-find] implementation over arbitrary hashable elements.
//!
//! See [`DisjointSet<T, S>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSet<T, S>`]: struct.DisjointSet.html

use {
    std::{
        borrow::Borrow,
        collections::hash_map::RandomState,
        convert::Infallible,
        fmt,
        hash::{BuildHasher, Hash},
        iter::{self, FromIterator, FusedIterator},
        ops,
        slice,
    },
    tracing::{debug, warn},
    crate::{
        error::{InvalidInitialMapping, Reason},
        identity_map::IdentityMap,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] structure over elements that are added on first use.
///
/// Every element starts out as the only member of its own set, and it does not need to be
/// added up front: passing an unseen element to `find`, `union` or `connected` adds it.
/// Sets are joined with the `union` method.
///
/// Each set has a representative, the element `find` returns for every member of the set.
/// Which member becomes the representative after a `union` is an implementation detail,
/// only compare representatives with each other.
///
/// Internally every element stores the index of its parent and the parents form a forest.
/// `find` compresses the path it walks, and both walks are loops so even a very long
/// chain of parents can not overflow the stack.
/// The trees are not balanced by rank: `union` always attaches the root of its first
/// argument to the root of its second.
///
/// `find` needs `&mut self` because it may add an element.
/// The methods that only read, like `representative`, `classes` and the formatting
/// impls, still compress paths through a shared reference.
/// This is why a `DisjointSet` is not `Sync`.
///
/// # Examples
///
/// ```
/// use disjoint_set::DisjointSet;
///
/// let mut disjoint_set = DisjointSet::new();
/// disjoint_set.union('a', 'b');
/// disjoint_set.union('c', 'd');
/// disjoint_set.union('b', 'd');
///
/// assert!(disjoint_set.connected('a', 'c'));
/// assert!(!disjoint_set.connected('a', 'e'));
///
/// // Calling `connected` added 'e' in its own set.
/// assert_eq!(disjoint_set.len(), 5);
/// assert_eq!(disjoint_set.amount_of_sets(), 2);
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSet<T, S = RandomState> {
    map: IdentityMap<T, S>,
}

/// Creates a [`DisjointSet`] containing the arguments.
///
/// There are two forms of the `disjoint_set!` macro:
///
/// - Create a [`DisjointSet`] where each element is in its own set:
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// let mut disjoint_set = disjoint_set!['a', 'b', 'c'];
///
/// assert_eq!(disjoint_set.len(), 3);
/// assert!(!disjoint_set.connected('a', 'b'));
/// # }
/// ```
///
/// - Create a [`DisjointSet`] from element and parent pairs, as printed by `{:?}`:
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// let mut disjoint_set = disjoint_set![1 => 2, 2 => 2, 3 => 3];
///
/// assert_eq!(format!("{:?}", disjoint_set), "DisjointSet({1: 2, 2: 2, 3: 3})");
/// assert!(disjoint_set.connected(1, 2));
/// # }
/// ```
///
/// The second form is not validated, see [`from_mapping`].
///
/// [`DisjointSet`]: struct.DisjointSet.html
/// [`from_mapping`]: struct.DisjointSet.html#method.from_mapping
#[macro_export]
macro_rules! disjoint_set {
    ($($element: expr => $parent: expr),* $(,)*) => {
        $crate::DisjointSet::from_mapping(vec![$(($element, $parent)),*])
    };
    ($($element: expr),* $(,)*) => {
        $crate::DisjointSet::from_iterable(vec![$($element),*])
    };
}

/// Where a walk along the parent pointers ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    /// A slot that is its own parent.
    Root(usize),
    /// The walk ran into a cycle, this is the lowest index on it.
    Cycle(usize),
}

impl<T> DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    /// Constructs a new, empty `DisjointSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let disjoint_set: DisjointSet<u32> = DisjointSet::new();
    ///
    /// assert!(disjoint_set.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Constructs a new, empty `DisjointSet<T>` with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }

    /// Constructs a `DisjointSet<T>` from pairs of an element and its parent.
    ///
    /// An element that is its own parent is the representative of its set.
    /// When an element occurs more than once the last pair wins.
    ///
    /// The mapping is not validated here. Every parent should also occur as an element and
    /// following parents should not loop. If not, the methods that enumerate the whole
    /// structure, like [`iter`], return an [`InvalidInitialMapping`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::from_mapping(vec![(1, 2), (2, 2), (3, 3)]);
    ///
    /// assert_eq!(disjoint_set.find(1), &2);
    /// assert!(!disjoint_set.connected(1, 3));
    /// ```
    ///
    /// [`iter`]: #method.iter
    /// [`InvalidInitialMapping`]: struct.InvalidInitialMapping.html
    pub fn from_mapping<I>(mapping: I) -> Self where
        I: IntoIterator<Item = (T, T)>,
    {
        let mapping = mapping.into_iter();
        let mut disjoint_set = Self::with_capacity(mapping.size_hint().0);

        for (element, parent) in mapping {
            disjoint_set.map.set(element, parent);
        }

        let elements = disjoint_set.len();
        let dangling = disjoint_set.map.slot_count() - elements;
        debug!(elements, dangling, "seeded a disjoint set from a mapping");

        disjoint_set
    }

    /// Constructs a `DisjointSet<T>` where each element is in its own set.
    ///
    /// Repeated elements are only added once.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let disjoint_set = DisjointSet::from_iterable("abca".chars());
    ///
    /// assert_eq!(disjoint_set.len(), 3);
    /// assert_eq!(disjoint_set.amount_of_sets(), 3);
    /// ```
    #[inline]
    pub fn from_iterable<I>(elements: I) -> Self where
        I: IntoIterator<Item = T>,
    {
        Self::from_iter(elements)
    }
}

impl<T, S> DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: IdentityMap::with_hasher(hash_builder),
        }
    }

    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: IdentityMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the representative of the set `element` belongs to.
    ///
    /// If `element` was not seen before it is added in its own set and is its own
    /// representative.
    ///
    /// This method runs in amortized `O(α(n))` time where `α` is the inverse Ackermann
    /// function, as long as the sets were only built through `union`.
    /// The parents of all elements on the way to the representative are pointed directly
    /// at it.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// assert_eq!(disjoint_set.find(1), &1);
    ///
    /// disjoint_set.union(1, 2);
    /// assert_eq!(disjoint_set.find(1), &2);
    /// ```
    pub fn find(&mut self, element: T) -> &T {
        let root = self.find_element(element);

        self.map.key(root)
    }

    /// Joins the sets of `first` and `second`.
    ///
    /// The representative of `first` is attached to the representative of `second`.
    /// Elements that were not seen before are added first.
    /// Nothing changes if both are already in the same set.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.union(1, 2);
    /// disjoint_set.union(2, 3);
    ///
    /// assert_eq!(disjoint_set.find(3), &3);
    /// assert_eq!(disjoint_set.find(1), &3);
    /// ```
    pub fn union(&mut self, first: T, second: T) {
        let i = self.find_element(first);
        let j = self.find_element(second);

        if i != j {
            self.map.set_parent(i, j);
        }
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// Elements that were not seen before are added in their own sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// assert!(!disjoint_set.connected(1, 2));
    ///
    /// disjoint_set.union(1, 2);
    /// assert!(disjoint_set.connected(1, 2));
    /// assert!(disjoint_set.connected(2, 1));
    /// ```
    pub fn connected(&mut self, first: T, second: T) -> bool {
        self.find_element(first) == self.find_element(second)
    }

    /// Returns `true` if `element` was added to the `DisjointSet<T, S>`.
    ///
    /// Unlike `find` this never adds `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// assert!(!disjoint_set.contains("a"));
    ///
    /// disjoint_set.find("a");
    /// assert!(disjoint_set.contains("a"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains(element)
    }

    /// Returns the representative of `element`, or `None` if it was never added.
    ///
    /// This works like `find` for elements that are already present but never adds one.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.union(1, 2);
    ///
    /// assert_eq!(disjoint_set.representative(&1), Some(&2));
    /// assert_eq!(disjoint_set.representative(&3), None);
    /// assert!(!disjoint_set.contains(&3));
    /// ```
    pub fn representative<Q>(&self, element: &Q) -> Option<&T> where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = self.map.index_of(element)?;

        Some(self.map.key(self.root_of(index)))
    }

    /// Returns the amount of elements, not the amount of sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the amount of sets in the `DisjointSet<T, S>`.
    ///
    /// This method will be executed in `O(n α(n))` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::from_iterable(0 .. 5);
    /// disjoint_set.union(0, 1);
    /// disjoint_set.union(3, 4);
    ///
    /// assert_eq!(disjoint_set.amount_of_sets(), 3);
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        let mut done = bit_vec![false; self.map.slot_count()];
        let mut count = 0;

        for index in self.map.materialized_indices() {
            let root = self.root_of(index);

            if !done[root] {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Checks that every element resolves to a representative that is an element itself.
    ///
    /// This can only fail for a structure built with [`from_mapping`] and only until the
    /// offending chains have been resolved by `find`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInitialMapping`] for the first element, in insertion order, whose
    /// parents end at a value that was never given as an element or run into a cycle.
    ///
    /// [`from_mapping`]: #method.from_mapping
    /// [`InvalidInitialMapping`]: struct.InvalidInitialMapping.html
    pub fn validate(&self) -> Result<(), InvalidInitialMapping<T>> where
        T: Clone,
    {
        for index in self.map.materialized_indices() {
            self.checked_root(index)?;
        }

        Ok(())
    }

    /// Returns an iterator over all elements and their representatives in insertion order.
    ///
    /// The whole structure is validated before the iterator is returned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInitialMapping`] if the mapping this `DisjointSet<T, S>` was
    /// constructed from makes an element resolve to a value outside the structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::{DisjointSet, Reason};
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.union(1, 2);
    ///
    /// let pairs: Vec<_> = disjoint_set.iter().unwrap().collect();
    /// assert_eq!(pairs, vec![(&1, &2), (&2, &2)]);
    ///
    /// // 3 is not an element so 1 and 2 do not have a valid representative.
    /// let invalid = DisjointSet::from_mapping(vec![(1, 2), (2, 3)]);
    /// let error = invalid.iter().err().unwrap();
    /// assert_eq!(error.element, 1);
    /// assert_eq!(error.reason, Reason::Dangling);
    /// ```
    ///
    /// [`InvalidInitialMapping`]: struct.InvalidInitialMapping.html
    pub fn iter(&self) -> Result<Iter<T, S>, InvalidInitialMapping<T>> where
        T: Clone,
    {
        self.validate()?;

        Ok(Iter {
            disjoint_set: self,
            indices: self.map.materialized_indices(),
        })
    }

    /// Returns all sets together with their representatives.
    ///
    /// Every element is a member of exactly one [`Class`].
    /// The classes are ordered by their first member and the members of a class are in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Fails under the same condition as [`iter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.union(1, 2);
    /// disjoint_set.find(3);
    ///
    /// let classes: Vec<_> = disjoint_set.classes().unwrap().collect();
    ///
    /// assert_eq!(classes.len(), 2);
    /// assert_eq!(classes[0].representative(), &2);
    /// assert_eq!(classes[0].members(), &[&1, &2]);
    /// assert_eq!(classes[1].members(), &[&3]);
    /// ```
    ///
    /// [`Class`]: struct.Class.html
    /// [`iter`]: #method.iter
    pub fn classes(&self) -> Result<Classes<T>, InvalidInitialMapping<T>> where
        T: Clone,
    {
        let groups = self.group(|index| self.checked_root(index))?;

        let classes: Vec<_> = groups.into_iter()
            .map(|(root, members)| Class {
                representative: self.map.key(root),
                members: members.into_iter().map(|index| self.map.key(index)).collect(),
            })
            .collect();

        Ok(Classes {
            iter: classes.into_iter(),
        })
    }

    /// Returns the members of all sets, like [`classes`] without the representatives.
    ///
    /// # Errors
    ///
    /// Fails under the same condition as [`iter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_set::DisjointSet;
    ///
    /// let mut disjoint_set = DisjointSet::new();
    /// disjoint_set.union(1, 2);
    /// disjoint_set.union(2, 3);
    /// disjoint_set.union(4, 5);
    ///
    /// let sets: Vec<_> = disjoint_set.sets().unwrap().collect();
    /// assert_eq!(sets, vec![vec![&1, &2, &3], vec![&4, &5]]);
    /// ```
    ///
    /// [`classes`]: #method.classes
    /// [`iter`]: #method.iter
    #[inline]
    pub fn sets(&self) -> Result<Sets<T>, InvalidInitialMapping<T>> where
        T: Clone,
    {
        Ok(Sets {
            classes: self.classes()?,
        })
    }

    /// Adds `element` if needed and returns the index of its representative.
    fn find_element(&mut self, element: T) -> usize {
        let index = self.map.materialize(element);

        self.find_index(index)
    }

    /// Returns the index of the representative of `index`, making sure it is materialized.
    ///
    /// A chain from a seeded mapping can end at a value that was never an element,
    /// that value becomes an element here. A cycle is broken at its lowest index.
    fn find_index(&mut self, index: usize) -> usize {
        loop {
            match self.walk(index) {
                End::Root(root) => {
                    self.compress(index, root);
                    self.map.materialize_index(root);

                    return root
                },
                End::Cycle(lowest) => {
                    warn!(index = lowest, "breaking a parent cycle in the initial mapping");
                    self.map.set_parent(lowest, lowest);
                },
            }
        }
    }

    /// Returns the representative of `index` or the reason the mapping is invalid.
    fn checked_root(&self, index: usize) -> Result<usize, InvalidInitialMapping<T>> where
        T: Clone,
    {
        let reason = match self.walk(index) {
            End::Root(root) => {
                self.compress(index, root);

                if self.map.is_materialized(root) {
                    return Ok(root)
                }

                Reason::Dangling
            },
            End::Cycle(_) => Reason::Cycle,
        };

        debug!(index, %reason, "invalid initial mapping");

        Err(InvalidInitialMapping {
            element: self.map.key(index).clone(),
            reason,
        })
    }

    /// Groups the materialized indices by the root `root_of` returns for them.
    ///
    /// Groups are ordered by their first member.
    fn group<E, F>(&self, mut root_of: F) -> Result<Vec<(usize, Vec<usize>)>, E> where
        F: FnMut(usize) -> Result<usize, E>,
    {
        let slots = self.map.slot_count();
        let mut done = bit_vec![false; slots];
        // For each root that is done the position of its group.
        let mut positions = vec![0; slots];
        let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();

        for index in self.map.materialized_indices() {
            let root = root_of(index)?;

            if done[root] {
                groups[positions[root]].1.push(index);
            } else {
                done.set(root, true);
                positions[root] = groups.len();
                groups.push((root, vec![index]));
            }
        }

        Ok(groups)
    }

    /// Groups that can not fail, for formatting.
    fn groups(&self) -> Vec<(usize, Vec<usize>)> {
        match self.group(|index| Ok::<_, Infallible>(self.root_of(index))) {
            Ok(groups) => groups,
            Err(never) => match never {},
        }
    }
}

impl<T, S> DisjointSet<T, S> {
    /// Follows the parents of `index` without changing them.
    ///
    /// This takes at most `slot_count` steps.
    fn walk(&self, mut index: usize) -> End {
        // A chain that has not reached a root after visiting every slot has a cycle.
        for _ in 0 ..= self.map.slot_count() {
            let parent = self.map.parent(index);

            if parent == index {
                return End::Root(index)
            }

            index = parent;
        }

        End::Cycle(self.lowest_on_cycle(index))
    }

    /// Returns the lowest index on the cycle that `start` is part of.
    fn lowest_on_cycle(&self, start: usize) -> usize {
        let mut lowest = start;
        let mut current = self.map.parent(start);

        while current != start {
            lowest = usize::min(lowest, current);
            current = self.map.parent(current);
        }

        lowest
    }

    /// Points every slot on the path from `index` to `root` directly at `root`.
    ///
    /// `root` must be where `walk` ended for `index`.
    fn compress(&self, mut index: usize, root: usize) {
        while index != root {
            let parent = self.map.parent(index);
            self.map.set_parent(index, root);

            index = parent;
        }
    }

    /// The root of `index`, without materializing anything.
    ///
    /// On a cycle its lowest index stands in for the root.
    fn root_of(&self, index: usize) -> usize {
        match self.walk(index) {
            End::Root(root) => {
                self.compress(index, root);

                root
            },
            End::Cycle(lowest) => lowest,
        }
    }
}

impl<T> Default for DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Prints every element with its representative in a form `disjoint_set!` accepts.
impl<T, S> fmt::Debug for DisjointSet<T, S> where
    T: fmt::Debug + Eq + Hash,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("DisjointSet(")?;
        formatter.debug_map()
            .entries(self.map.materialized_indices().map(|index| {
                (self.map.key(index), self.map.key(self.root_of(index)))
            }))
            .finish()?;
        formatter.write_str(")")
    }
}

/// Prints every set as its representative followed by its members.
///
/// ```
/// use disjoint_set::DisjointSet;
///
/// let mut disjoint_set = DisjointSet::new();
/// disjoint_set.union(1, 2);
/// disjoint_set.union(3, 4);
///
/// assert_eq!(disjoint_set.to_string(), "DisjointSet(2 <- [1, 2], 4 <- [3, 4])");
/// ```
impl<T, S> fmt::Display for DisjointSet<T, S> where
    T: fmt::Display + Eq + Hash,
    S: BuildHasher,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("DisjointSet(")?;

        for (position, (root, members)) in self.groups().into_iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }

            write!(formatter, "{} <- [", self.map.key(root))?;
            for (i, member) in members.into_iter().enumerate() {
                if i > 0 {
                    formatter.write_str(", ")?;
                }
                write!(formatter, "{}", self.map.key(member))?;
            }
            formatter.write_str("]")?;
        }

        formatter.write_str(")")
    }
}

/// Two `DisjointSet`s are equal if they contain the same elements divided in the same sets.
///
/// The representatives and the insertion order do not matter.
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_set;
/// #
/// # fn main() {
/// assert_eq!(disjoint_set![1 => 1, 2 => 1], disjoint_set![1 => 2, 2 => 2]);
/// assert_ne!(disjoint_set![1 => 1, 2 => 1], disjoint_set![1 => 1, 2 => 2]);
/// # }
/// ```
impl<T, S1, S2> PartialEq<DisjointSet<T, S2>> for DisjointSet<T, S1> where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &DisjointSet<T, S2>) -> bool {
        if self.len() != other.len() {
            return false
        }

        // We map the roots of self to the roots of other and back.
        let mut forward = vec![!0; self.map.slot_count()];
        let mut backward = vec![!0; other.map.slot_count()];

        for index in self.map.materialized_indices() {
            let other_index = match other.map.index_of(self.map.key(index)) {
                Some(other_index) => other_index,
                None => return false,
            };

            let self_root = self.root_of(index);
            let other_root = other.root_of(other_index);

            if forward[self_root] == !0 && backward[other_root] == !0 {
                // If we have not seen either root we add the relation.
                forward[self_root] = other_root;
                backward[other_root] = self_root;
            } else if forward[self_root] != other_root || backward[other_root] != self_root {
                return false
            }
        }

        true
    }
}

impl<T, S> Eq for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{}

/// Returns the representative of an element.
///
/// # Panics
///
/// If the element was never added, use [`representative`] to get an `Option`.
///
/// [`representative`]: struct.DisjointSet.html#method.representative
impl<'a, T, Q, S> ops::Index<&'a Q> for DisjointSet<T, S> where
    T: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = T;

    fn index(&self, element: &'a Q) -> &T {
        match self.representative(element) {
            Some(representative) => representative,
            None => panic!("element is not in the DisjointSet"),
        }
    }
}

impl<T> FromIterator<T> for DisjointSet<T, RandomState> where
    T: Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut disjoint_set = Self::with_capacity(iter.size_hint().0);
        disjoint_set.extend(iter);

        disjoint_set
    }
}

/// Adds every element that is not present yet in its own set.
impl<T, S> Extend<T> for DisjointSet<T, S> where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.map.materialize(element);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for DisjointSet<T, S> where
    T: Eq + Hash + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I) where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().cloned());
    }
}

#[cfg(feature = "rayon")]
impl<T> FromParallelIterator<T> for DisjointSet<T, RandomState> where
    T: Eq + Hash + Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self where
        I: IntoParallelIterator<Item = T>,
    {
        let mut disjoint_set = Self::new();
        disjoint_set.par_extend(par_iter);

        disjoint_set
    }
}

/// The elements are produced in parallel and then added in the order of the iterator.
#[cfg(feature = "rayon")]
impl<T, S> ParallelExtend<T> for DisjointSet<T, S> where
    T: Eq + Hash + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I) where
        I: IntoParallelIterator<Item = T>,
    {
        let elements: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(elements);
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for DisjointSet<T, RandomState> where
    T: Arbitrary + Eq + Hash + Clone + 'static,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        use std::collections::hash_map;

        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut disjoint_set = Self::with_capacity(vec.len());

            // We map a `set_number` to the first element of that set.
            let mut map = hash_map::HashMap::with_capacity(vec.len());

            for (element, set_number) in vec {
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        let first: &T = occupied.get();
                        disjoint_set.union(element, first.clone());
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        vacant.insert(element.clone());
                        disjoint_set.find(element);
                    },
                }
            }

            disjoint_set
        }).boxed()
    }
}

/// An iterator over the elements of a `DisjointSet<T, S>` and their representatives.
///
/// This struct is created by the [`iter`] method on [`DisjointSet<T, S>`].
/// See its documentation for more.
///
/// [`iter`]: struct.DisjointSet.html#method.iter
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
#[derive(Clone)]
pub struct Iter<'a, T: 'a, S: 'a> {
    disjoint_set: &'a DisjointSet<T, S>,
    indices: iter::Cloned<slice::Iter<'a, usize>>,
}

impl<'a, T, S> Iterator for Iter<'a, T, S> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<(&'a T, &'a T)> {
        let map = &self.disjoint_set.map;
        let index = self.indices.next()?;
        let root = self.disjoint_set.root_of(index);

        Some((map.key(index), map.key(root)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, T, S> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T, S> FusedIterator for Iter<'a, T, S> {}

/// One set of a `DisjointSet<T, S>` with its representative.
///
/// This struct is created by the [`classes`] method on [`DisjointSet<T, S>`].
///
/// [`classes`]: struct.DisjointSet.html#method.classes
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class<'a, T: 'a> {
    representative: &'a T,
    members: Vec<&'a T>,
}

impl<'a, T> Class<'a, T> {
    #[inline]
    pub fn representative(&self) -> &'a T {
        self.representative
    }

    /// The members in insertion order, the representative included.
    #[inline]
    pub fn members(&self) -> &[&'a T] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`, every class contains at least its representative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool where
        T: PartialEq,
    {
        self.members.iter().any(|&member| member == element)
    }

    #[inline]
    pub fn into_members(self) -> Vec<&'a T> {
        self.members
    }
}

impl<'a, T> IntoIterator for Class<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> std::vec::IntoIter<&'a T> {
        self.members.into_iter()
    }
}

/// An iterator over all sets of a `DisjointSet<T, S>`.
///
/// This struct is created by the [`classes`] method on [`DisjointSet<T, S>`].
/// See its documentation for more.
///
/// [`classes`]: struct.DisjointSet.html#method.classes
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Classes<'a, T: 'a> {
    iter: std::vec::IntoIter<Class<'a, T>>,
}

impl<'a, T> Iterator for Classes<'a, T> {
    type Item = Class<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Class<'a, T>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Classes<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Class<'a, T>> {
        self.iter.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Classes<'a, T> {}

impl<'a, T> FusedIterator for Classes<'a, T> {}

/// An iterator over the members of all sets of a `DisjointSet<T, S>`.
///
/// This struct is created by the [`sets`] method on [`DisjointSet<T, S>`].
///
/// [`sets`]: struct.DisjointSet.html#method.sets
/// [`DisjointSet<T, S>`]: struct.DisjointSet.html
#[derive(Clone, Debug)]
pub struct Sets<'a, T: 'a> {
    classes: Classes<'a, T>,
}

impl<'a, T> Iterator for Sets<'a, T> {
    type Item = Vec<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Vec<&'a T>> {
        self.classes.next().map(Class::into_members)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.classes.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Sets<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Vec<&'a T>> {
        self.classes.next_back().map(Class::into_members)
    }
}

impl<'a, T> ExactSizeIterator for Sets<'a, T> {}

impl<'a, T> FusedIterator for Sets<'a, T> {}

#[cfg(test)]
mod tests {
    use {
        std::{
            collections::{hash_map::DefaultHasher, HashSet},
            hash::BuildHasherDefault,
        },
        proptest::prelude::*,
        super::*,
    };

    #[test]
    fn find_adds_absent_element() {
        let mut disjoint_set = DisjointSet::new();

        assert!(!disjoint_set.contains(&1));
        assert_eq!(disjoint_set.find(1), &1);
        assert!(disjoint_set.contains(&1));
    }

    #[test]
    fn holds_different_kinds_of_elements() {
        let mut strings = DisjointSet::new();
        assert!(!strings.connected("a", "b"));

        let mut tuples = DisjointSet::new();
        assert!(!tuples.connected((1, 2, 3), (1, 2, 4)));
        tuples.union((1, 2, 3), (1, 2, 4));
        assert!(tuples.connected((1, 2, 4), (1, 2, 3)));

        let mut options = DisjointSet::new();
        assert_eq!(options.find(None::<bool>), &None);
        assert_eq!(options.find(Some(true)), &Some(true));
    }

    #[test]
    fn unites_correctly() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.union(3, 4);
        disjoint_set.union(1, 6);
        disjoint_set.union(8, 2);

        assert!(disjoint_set.connected(6, 8));
        assert!(disjoint_set.connected(8, 6));

        let sets: HashSet<Vec<i32>> = disjoint_set.sets().unwrap()
            .map(|set| {
                let mut set: Vec<i32> = set.into_iter().cloned().collect();
                set.sort();
                set
            })
            .collect();
        let expected: HashSet<Vec<i32>> = vec![vec![1, 2, 6, 8], vec![3, 4]].into_iter().collect();

        assert_eq!(sets, expected);
    }

    #[test]
    fn union_attaches_first_root_to_second() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.union(2, 3);

        assert_eq!(disjoint_set.find(3), &3);
        assert_eq!(disjoint_set.find(1), &3);
    }

    #[test]
    fn union_of_same_set_is_noop() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.union(2, 1);

        assert_eq!(disjoint_set.find(1), &2);
        assert_eq!(disjoint_set.len(), 2);
    }

    #[test]
    fn iter_yields_representatives() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);

        let pairs: Vec<_> = disjoint_set.iter().unwrap()
            .map(|(&element, &representative)| (element, representative))
            .collect();

        assert_eq!(pairs, vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn is_empty_until_first_element() {
        let mut disjoint_set = DisjointSet::new();
        assert!(disjoint_set.is_empty());

        disjoint_set.union(1, 2);
        assert!(!disjoint_set.is_empty());
    }

    #[test]
    fn sets_follow_unions() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.union(2, 3);
        assert_eq!(disjoint_set.sets().unwrap().collect::<Vec<_>>(), vec![vec![&1, &2, &3]]);

        disjoint_set.union(4, 5);
        assert_eq!(
            disjoint_set.sets().unwrap().collect::<Vec<_>>(),
            vec![vec![&1, &2, &3], vec![&4, &5]],
        );
    }

    #[test]
    fn classes_carry_representatives() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);

        let classes: Vec<_> = disjoint_set.classes().unwrap().collect();

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].representative(), &2);
        assert!(classes[0].contains(&1));
        assert!(classes[0].contains(&2));
        assert_eq!(classes[0].len(), 2);
    }

    #[test]
    fn long_chain_resolves() {
        let mut disjoint_set = DisjointSet::new();

        // Every union attaches the whole chain below the next element.
        for i in 0 .. 2000 {
            disjoint_set.union(i, i + 1);
        }

        assert_eq!(disjoint_set.find(0), &2000);
        assert_eq!(disjoint_set.len(), 2001);
    }

    #[test]
    fn very_long_chain_resolves() {
        let mut disjoint_set = DisjointSet::new();

        for i in 0 .. 200_000u32 {
            disjoint_set.union(i, i + 1);
        }

        assert!(disjoint_set.connected(0, 200_000));
        assert_eq!(disjoint_set.amount_of_sets(), 1);
    }

    #[test]
    fn find_compresses_path() {
        let mut disjoint_set = DisjointSet::new();
        for i in 0 .. 100 {
            disjoint_set.union(i, i + 1);
        }

        disjoint_set.find(0);

        let root = disjoint_set.map.index_of(&100).unwrap();
        for index in 0 ..= 100 {
            assert_eq!(disjoint_set.map.parent(index), root);
        }
    }

    #[test]
    fn deep_recursion() {
        let students: Vec<_> = (0 .. 1025).map(|id| ("Stanford", id)).collect();
        let mut disjoint_set = DisjointSet::new();

        for (i, &first) in students.iter().enumerate() {
            for &second in &students[i + 1 ..] {
                if !disjoint_set.connected(first, second) && first.0 == second.0 {
                    disjoint_set.union(first, second);
                }
            }
        }

        assert_eq!(disjoint_set.amount_of_sets(), 1);
        assert_eq!(disjoint_set.len(), 1025);
    }

    #[test]
    fn dangling_parent_is_invalid() {
        let disjoint_set = DisjointSet::from_mapping(vec![(1, 2), (2, 3)]);

        assert_eq!(disjoint_set.len(), 2);
        assert!(!disjoint_set.contains(&3));

        let expected = InvalidInitialMapping {
            element: 1,
            reason: Reason::Dangling,
        };
        assert_eq!(disjoint_set.iter().err(), Some(expected.clone()));
        assert_eq!(disjoint_set.validate(), Err(expected.clone()));
        assert_eq!(disjoint_set.classes().err(), Some(expected.clone()));
        assert_eq!(disjoint_set.sets().err(), Some(expected));
    }

    #[test]
    fn find_adds_dangling_parent() {
        let mut disjoint_set = DisjointSet::from_mapping(vec![(1, 2), (2, 3)]);

        assert_eq!(disjoint_set.find(1), &3);
        assert!(disjoint_set.contains(&3));
        assert_eq!(disjoint_set.len(), 3);

        let pairs: Vec<_> = disjoint_set.iter().unwrap().collect();
        assert_eq!(pairs, vec![(&1, &3), (&2, &3), (&3, &3)]);
    }

    #[test]
    fn cycle_is_invalid_and_broken_by_find() {
        let mut disjoint_set = DisjointSet::from_mapping(vec![(1, 2), (2, 1)]);

        assert_eq!(
            disjoint_set.validate(),
            Err(InvalidInitialMapping { element: 1, reason: Reason::Cycle }),
        );

        assert_eq!(disjoint_set.find(2), &1);
        assert!(disjoint_set.connected(1, 2));
        assert!(disjoint_set.validate().is_ok());
    }

    #[test]
    fn parent_named_before_its_pair_keeps_order() {
        let disjoint_set = DisjointSet::from_mapping(vec![(1, 3), (2, 2), (3, 3)]);

        let pairs: Vec<_> = disjoint_set.iter().unwrap()
            .map(|(&element, &representative)| (element, representative))
            .collect();
        assert_eq!(pairs, vec![(1, 3), (2, 2), (3, 3)]);
        assert_eq!(format!("{:?}", disjoint_set), "DisjointSet({1: 3, 2: 2, 3: 3})");
        assert_eq!(disjoint_set.to_string(), "DisjointSet(3 <- [1, 3], 2 <- [2])");
        assert_eq!(disjoint_set, disjoint_set![1 => 3, 2 => 2, 3 => 3]);
    }

    #[test]
    fn dangling_parent_is_added_last() {
        let mut disjoint_set = DisjointSet::from_mapping(vec![(1, 3), (2, 2)]);
        disjoint_set.find(1);

        let elements: Vec<_> = disjoint_set.iter().unwrap().map(|(&element, _)| element).collect();
        assert_eq!(elements, vec![1, 2, 3]);
    }

    #[test]
    fn formatting_never_fails_on_invalid_mapping() {
        let disjoint_set = DisjointSet::from_mapping(vec![(1, 2), (2, 3)]);

        assert_eq!(format!("{:?}", disjoint_set), "DisjointSet({1: 3, 2: 3})");
        assert_eq!(disjoint_set.to_string(), "DisjointSet(3 <- [1, 2])");
    }

    #[test]
    fn equality_ignores_representatives() {
        let first = DisjointSet::from_mapping(vec![(1, 1), (2, 1)]);
        let second = DisjointSet::from_mapping(vec![(1, 2), (2, 2)]);

        assert_eq!(first, second);
        assert_ne!(first, DisjointSet::from_mapping(vec![(1, 1), (2, 2)]));
        assert_ne!(first, DisjointSet::from_mapping(vec![(1, 1), (3, 1)]));
        assert_ne!(first, DisjointSet::from_mapping(vec![(1, 1)]));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut first = DisjointSet::new();
        first.union(1, 2);
        first.find(3);

        let mut second = DisjointSet::new();
        second.find(3);
        second.union(2, 1);

        assert_eq!(first, second);
    }

    #[test]
    fn equality_across_hashers() {
        let mut first = DisjointSet::new();
        first.union("a", "b");

        let mut second = DisjointSet::with_hasher(BuildHasherDefault::<DefaultHasher>::default());
        second.union("b", "a");

        assert_eq!(first, second);
    }

    #[test]
    fn from_iterable_makes_singletons() {
        assert_eq!(DisjointSet::from_iterable(Vec::<u8>::new()), DisjointSet::new());

        let disjoint_set = DisjointSet::from_iterable(vec!['a', 'b', 'c', 'a']);
        assert_eq!(disjoint_set.len(), 3);
        assert_eq!(disjoint_set.sets().unwrap().count(), 3);
        assert!(disjoint_set.sets().unwrap().all(|set| set.len() == 1));
    }

    #[test]
    fn debug_is_reproducible() {
        let disjoint_set = disjoint_set![1 => 1, 2 => 1];
        assert_eq!(format!("{:?}", disjoint_set), "DisjointSet({1: 1, 2: 1})");

        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.find(3);
        assert_eq!(format!("{:?}", disjoint_set), "DisjointSet({1: 2, 2: 2, 3: 3})");
        assert_eq!(disjoint_set, disjoint_set![1 => 2, 2 => 2, 3 => 3]);
    }

    #[test]
    fn display_lists_sets() {
        let mut disjoint_set = DisjointSet::new();
        assert_eq!(disjoint_set.to_string(), "DisjointSet()");

        disjoint_set.union(1, 2);
        assert_eq!(disjoint_set.to_string(), "DisjointSet(2 <- [1, 2])");
    }

    #[test]
    fn representative_does_not_add() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union("a", "b");

        assert_eq!(disjoint_set.representative("a"), Some(&"b"));
        assert_eq!(disjoint_set.representative("c"), None);
        assert!(!disjoint_set.contains("c"));
        assert_eq!(disjoint_set["a"], "b");
    }

    #[test]
    #[should_panic]
    fn index_of_absent_element_panics() {
        let disjoint_set: DisjointSet<u8> = DisjointSet::new();

        let _ = disjoint_set[&0u8];
    }

    #[test]
    fn macro_forms() {
        let empty: DisjointSet<u8> = disjoint_set![];
        assert!(empty.is_empty());

        let singletons = disjoint_set![1, 2, 3,];
        assert_eq!(singletons.amount_of_sets(), 3);

        let mapped = disjoint_set![1 => 2, 2 => 2,];
        assert_eq!(mapped.amount_of_sets(), 1);
    }

    #[test]
    fn extend_adds_singletons() {
        let mut disjoint_set = DisjointSet::new();
        disjoint_set.union(1, 2);
        disjoint_set.extend(&[2, 3, 4]);

        assert_eq!(disjoint_set.len(), 4);
        assert_eq!(disjoint_set.amount_of_sets(), 3);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn collects_in_parallel() {
        let disjoint_set: DisjointSet<u32> = (0 .. 1000u32).into_par_iter().collect();

        assert_eq!(disjoint_set.len(), 1000);
        assert_eq!(disjoint_set.amount_of_sets(), 1000);

        let keys: Vec<_> = disjoint_set.map.keys().cloned().collect();
        assert_eq!(keys, (0 .. 1000).collect::<Vec<_>>());
    }

    fn union_pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0 .. 32u8, 0 .. 32u8), 0 .. 64)
    }

    fn build(unions: &[(u8, u8)]) -> DisjointSet<u8> {
        let mut disjoint_set = DisjointSet::new();
        for &(a, b) in unions {
            disjoint_set.union(a, b);
        }

        disjoint_set
    }

    /// A quadratic model of the partition: every element stores a label.
    fn labels(unions: &[(u8, u8)]) -> Vec<Option<u8>> {
        let mut labels = vec![None; 256];

        for &(a, b) in unions {
            let label_a = *labels[a as usize].get_or_insert(a);
            let label_b = *labels[b as usize].get_or_insert(b);

            for label in labels.iter_mut() {
                if *label == Some(label_a) {
                    *label = Some(label_b);
                }
            }
        }

        labels
    }

    proptest! {
        #[test]
        fn find_is_idempotent(unions in union_pairs(), element in 0 .. 40u8) {
            let mut disjoint_set = build(&unions);

            let root = *disjoint_set.find(element);
            prop_assert_eq!(*disjoint_set.find(root), root);
        }

        #[test]
        fn unioned_elements_stay_connected(unions in union_pairs()) {
            let mut disjoint_set = DisjointSet::new();

            for (i, &(a, b)) in unions.iter().enumerate() {
                disjoint_set.union(a, b);

                for &(x, y) in &unions[..= i] {
                    prop_assert!(disjoint_set.connected(x, y));
                }
            }
        }

        #[test]
        fn connected_is_symmetric(unions in union_pairs(), a in 0 .. 40u8, b in 0 .. 40u8) {
            let mut disjoint_set = build(&unions);

            prop_assert_eq!(disjoint_set.connected(a, b), disjoint_set.connected(b, a));
        }

        #[test]
        fn matches_label_model(unions in union_pairs()) {
            let mut disjoint_set = build(&unions);
            let labels = labels(&unions);

            for a in 0 .. 32u8 {
                for b in 0 .. 32u8 {
                    let expected = match (labels[a as usize], labels[b as usize]) {
                        (Some(label_a), Some(label_b)) => label_a == label_b,
                        _ => a == b,
                    };

                    prop_assert_eq!(disjoint_set.connected(a, b), expected);
                }
            }
        }

        #[test]
        fn classes_partition_elements(unions in union_pairs()) {
            let mut disjoint_set = build(&unions);
            let classes: Vec<_> = disjoint_set.classes().unwrap()
                .map(|class| (*class.representative(), class.into_members().into_iter().cloned().collect::<Vec<_>>()))
                .collect();

            let mut seen = HashSet::new();
            for (_representative, members) in &classes {
                for &member in members {
                    prop_assert!(seen.insert(member));
                }
            }
            prop_assert_eq!(seen.len(), disjoint_set.len());
            prop_assert_eq!(classes.len(), disjoint_set.amount_of_sets());

            for (representative, members) in classes {
                prop_assert!(members.contains(&representative));

                for member in members {
                    prop_assert_eq!(*disjoint_set.find(member), representative);
                }
            }
        }

        #[test]
        fn equality_ignores_union_order(unions in union_pairs()) {
            let forward = build(&unions);
            let swapped: Vec<_> = unions.iter().rev().map(|&(a, b)| (b, a)).collect();
            let backward = build(&swapped);

            prop_assert_eq!(&forward, &backward);
        }

        #[test]
        fn iter_round_trips(unions in union_pairs()) {
            let disjoint_set = build(&unions);
            let rebuilt = DisjointSet::from_mapping(
                disjoint_set.iter().unwrap().map(|(&element, &representative)| (element, representative))
            );

            prop_assert!(rebuilt.validate().is_ok());
            prop_assert_eq!(rebuilt, disjoint_set);
        }
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn arbitrary_is_valid(disjoint_set in any::<DisjointSet<u8>>()) {
            prop_assert!(disjoint_set.validate().is_ok());
            prop_assert_eq!(disjoint_set.clone(), disjoint_set.clone());
            prop_assert_eq!(disjoint_set.classes().unwrap().len(), disjoint_set.amount_of_sets());
        }
    }
}
