//! Frontier entries and the per-search entry arena.
//!
//! Back-pointers are arena handles ([`EntryId`]) rather than references, so
//! a whole chain of predecessors lives in one `Vec` owned by the search call.

use std::cmp::Ordering;

use crate::edge::Edge;

/// Handle of an entry in an [`EntryArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Uniform-cost frontier entry.
///
/// Immutable once created. The start entry has no incoming edge and no
/// back-pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct UcsEntry<V> {
    /// The vertex this entry reaches.
    pub state: V,
    /// Edge taken from the predecessor. `None` for the start entry.
    pub incoming_edge: Option<Edge<V>>,
    /// Predecessor entry in the same arena. `None` for the start entry.
    pub back_pointer: Option<EntryId>,
    /// Sum of edge weights along the back-pointer chain.
    pub cost_to_here: f64,
}

impl<V> UcsEntry<V> {
    /// The root entry for `start`.
    #[must_use]
    pub fn root(start: V) -> Self {
        Self {
            state: start,
            incoming_edge: None,
            back_pointer: None,
            cost_to_here: 0.0,
        }
    }
}

/// A* frontier entry: a [`UcsEntry`] plus the heuristic estimate to the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct AstarEntry<V> {
    /// State, predecessor and path cost.
    pub base: UcsEntry<V>,
    /// `guess_cost(state, goal)` at creation time.
    pub heuristic: f64,
}

/// Common view over frontier entries used by the best-first driver.
pub trait FrontierEntry<V> {
    fn base(&self) -> &UcsEntry<V>;

    /// The frontier ordering value. Lower pops first.
    fn priority(&self) -> f64;
}

impl<V> FrontierEntry<V> for UcsEntry<V> {
    fn base(&self) -> &UcsEntry<V> {
        self
    }

    fn priority(&self) -> f64 {
        self.cost_to_here
    }
}

impl<V> FrontierEntry<V> for AstarEntry<V> {
    fn base(&self) -> &UcsEntry<V> {
        &self.base
    }

    fn priority(&self) -> f64 {
        self.base.cost_to_here + self.heuristic
    }
}

/// Append-only storage for the entries created during one search call.
#[derive(Debug)]
pub struct EntryArena<E> {
    entries: Vec<E>,
}

impl<E> EntryArena<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store an entry and return its handle.
    pub fn insert(&mut self, entry: E) -> EntryId {
        self.entries.push(entry);
        EntryId(self.entries.len() - 1)
    }

    /// Look up an entry. Handles are only ever produced by this arena, so a
    /// stale handle is a bug in the caller.
    #[must_use]
    pub fn get(&self, id: EntryId) -> &E {
        &self.entries[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for EntryArena<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; equal priorities pop in creation order, which makes
/// every search run reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    /// The entry's [`FrontierEntry::priority`] at push time.
    pub priority: f64,
    /// Position in the push sequence of one search call.
    pub creation_order: u64,
    /// The entry this key refers to.
    pub entry: EntryId,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
