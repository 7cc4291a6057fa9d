//! Pathfinder Search: generic best-first path search over abstract graphs.
//!
//! The crate depends on no concrete graph. Anything implementing
//! [`Graph`](contract::Graph) can be searched; concrete graph families live in
//! `pathfinder_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathfinder_search  ←  pathfinder_harness
//! (frontier, entries,    (graph families, runner, CLI)
//!  algorithms)
//! ```
//!
//! # Key types
//!
//! - [`Edge`](edge::Edge) — immutable directed weighted edge
//! - [`Graph`](contract::Graph) — capability contract the algorithms consume
//! - [`PriorityQueue`](frontier::PriorityQueue) — min-queue, no decrease-key
//! - [`UcsEntry`](node::UcsEntry) / [`AstarEntry`](node::AstarEntry) — frontier entries
//! - [`SearchAlgorithm`](search::SearchAlgorithm) — implemented by
//!   [`RandomSearch`](random::RandomSearch),
//!   [`UniformCostSearch`](ucs::UniformCostSearch) and
//!   [`AstarSearch`](astar::AstarSearch)
//! - [`SearchResult`](result::SearchResult) — outcome, validation, rendering, report

#![forbid(unsafe_code)]

pub mod astar;
pub mod contract;
pub mod edge;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod random;
pub mod report;
pub mod result;
pub mod search;
pub mod ucs;
