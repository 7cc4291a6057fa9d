//! Search entry point and the best-first expansion loop.
//!
//! Uniform-cost search and A* share [`best_first`]; they differ only in the
//! entry type pushed onto the frontier, and therefore in its ordering.

use std::collections::HashMap;

use log::{debug, trace};

use crate::contract::Graph;
use crate::edge::Edge;
use crate::frontier::PriorityQueue;
use crate::node::{EntryArena, EntryId, FrontierEntry, FrontierKey, UcsEntry};
use crate::result::SearchResult;

/// A path-search algorithm bound to one graph.
pub trait SearchAlgorithm<'g, G: Graph + ?Sized> {
    /// Short identifier used in logs and by the CLI (`random`, `ucs`, `astar`).
    fn name(&self) -> &'static str;

    /// The graph this algorithm searches.
    fn graph(&self) -> &'g G;

    /// Search for a path from `start` to `goal`.
    ///
    /// Runs to completion. Not finding a path is reported through
    /// `success == false`, never as an error.
    fn search(&self, start: &G::Vertex, goal: &G::Vertex) -> SearchResult<'g, G>;
}

/// Walk back-pointers from `id` to the root and return the incoming edges in
/// start-to-goal order. The root entry contributes no edge.
#[must_use]
pub fn extract_path<V: Clone, E: FrontierEntry<V>>(arena: &EntryArena<E>, id: EntryId) -> Vec<Edge<V>> {
    let mut path = Vec::new();
    let mut current = Some(id);

    while let Some(id) = current {
        let entry = arena.get(id).base();
        if let Some(edge) = &entry.incoming_edge {
            path.push(edge.clone());
        }
        current = entry.back_pointer;
    }

    path.reverse();
    path
}

/// Frontier plus the arena its keys point into.
struct Frontier<E> {
    queue: PriorityQueue<FrontierKey>,
    arena: EntryArena<E>,
    next_creation_order: u64,
}

impl<E> Frontier<E> {
    fn push<V>(&mut self, entry: E)
    where
        E: FrontierEntry<V>,
    {
        let priority = entry.priority();
        let id = self.arena.insert(entry);
        self.queue.add(FrontierKey {
            priority,
            creation_order: self.next_creation_order,
            entry: id,
        });
        self.next_creation_order += 1;
    }
}

/// Run best-first search from `start` to `goal`.
///
/// `make_entry` turns a uniform-cost entry into the frontier entry type, which
/// decides the ordering. Every pop counts as an iteration, including pops of
/// stale duplicates that are discarded because their state was already
/// finalized at a lower or equal cost.
pub(crate) fn best_first<'g, G, E, F>(
    algorithm: &str,
    graph: &'g G,
    start: &G::Vertex,
    goal: &G::Vertex,
    make_entry: F,
) -> SearchResult<'g, G>
where
    G: Graph + ?Sized,
    E: FrontierEntry<G::Vertex>,
    F: Fn(UcsEntry<G::Vertex>) -> E,
{
    debug!("{algorithm}: searching {start} --> {goal}");

    let mut frontier = Frontier {
        queue: PriorityQueue::new(),
        arena: EntryArena::new(),
        next_creation_order: 0,
    };
    let mut closed: HashMap<G::Vertex, f64> = HashMap::new();
    let mut iterations: u64 = 0;
    let mut stale_pops: u64 = 0;

    frontier.push(make_entry(UcsEntry::root(start.clone())));

    while let Ok(key) = frontier.queue.remove_min() {
        iterations += 1;
        let entry = frontier.arena.get(key.entry).base();

        if closed
            .get(&entry.state)
            .is_some_and(|&best| best <= entry.cost_to_here)
        {
            trace!(
                "{algorithm}: discarding stale entry for {} at cost {}",
                entry.state,
                entry.cost_to_here
            );
            stale_pops += 1;
            continue;
        }

        if entry.state == *goal {
            let cost = entry.cost_to_here;
            let path = extract_path(&frontier.arena, key.entry);
            debug!(
                "{algorithm}: reached {goal} at cost {cost} after {iterations} iterations \
                 ({stale_pops} stale, {} entries, frontier high water {})",
                frontier.arena.len(),
                frontier.queue.high_water()
            );
            return SearchResult::found(graph, start.clone(), goal.clone(), cost, path, iterations);
        }

        let state = entry.state.clone();
        let cost_to_here = entry.cost_to_here;
        closed.insert(state.clone(), cost_to_here);

        for edge in graph.outgoing_edges(&state) {
            let next_cost = cost_to_here + edge.weight();
            if closed
                .get(edge.end())
                .is_some_and(|&best| best <= next_cost)
            {
                continue;
            }
            trace!("{algorithm}: push {} at cost {next_cost}", edge.end());
            frontier.push(make_entry(UcsEntry {
                state: edge.end().clone(),
                incoming_edge: Some(edge),
                back_pointer: Some(key.entry),
                cost_to_here: next_cost,
            }));
        }
    }

    debug!(
        "{algorithm}: frontier exhausted without reaching {goal} after {iterations} iterations \
         ({stale_pops} stale, {} finalized)",
        closed.len()
    );
    SearchResult::not_found(graph, start.clone(), goal.clone(), iterations)
}
