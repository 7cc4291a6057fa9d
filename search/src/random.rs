//! Random-walk baseline.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::contract::Graph;
use crate::policy::SearchPolicy;
use crate::result::SearchResult;
use crate::search::SearchAlgorithm;

/// Unweighted random walk from `start`, hoping to hit `goal`.
///
/// Gives up at a dead end or after `policy.random_walk_cap` iterations, so a
/// failed result does not mean the goal is unreachable. Only useful as a
/// sanity baseline.
#[derive(Debug)]
pub struct RandomSearch<'g, G: Graph + ?Sized> {
    graph: &'g G,
    policy: SearchPolicy,
}

impl<'g, G: Graph + ?Sized> RandomSearch<'g, G> {
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self::with_policy(graph, SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(graph: &'g G, policy: SearchPolicy) -> Self {
        Self { graph, policy }
    }

    fn rng(&self) -> StdRng {
        match self.policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl<'g, G: Graph + ?Sized> SearchAlgorithm<'g, G> for RandomSearch<'g, G> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn graph(&self) -> &'g G {
        self.graph
    }

    fn search(&self, start: &G::Vertex, goal: &G::Vertex) -> SearchResult<'g, G> {
        let mut rng = self.rng();
        let mut iterations: u64 = 0;
        let mut cost = 0.0;
        let mut path = Vec::new();
        let mut current = start.clone();

        // The start state is always examined, even with a zero cap.
        loop {
            iterations += 1;
            if current == *goal {
                debug!("random: reached {goal} after {iterations} steps");
                return SearchResult::found(
                    self.graph,
                    start.clone(),
                    goal.clone(),
                    cost,
                    path,
                    iterations,
                );
            }
            if iterations >= self.policy.random_walk_cap {
                debug!("random: gave up after {iterations} steps");
                break;
            }

            let Some(edge) = self.graph.outgoing_edges(&current).choose(&mut rng).cloned() else {
                debug!("random: dead end at {current} after {iterations} steps");
                break;
            };
            cost += edge.weight();
            current = edge.end().clone();
            path.push(edge);
        }

        SearchResult::not_found(self.graph, start.clone(), goal.clone(), iterations)
    }
}
