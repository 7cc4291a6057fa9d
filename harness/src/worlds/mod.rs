//! Graph families served by the runner.

pub mod adjacency;
pub mod grid;
pub mod npuzzle;
pub mod word_ladder;
