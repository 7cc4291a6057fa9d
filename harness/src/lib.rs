//! Pathfinder Harness: concrete graph families and the query runner.
//!
//! The harness does NOT implement search logic; it delegates to
//! `pathfinder_search`. Graph families provide vertices and edges only;
//! the runner owns parsing, timing, validation and output.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod point;
pub mod runner;
pub mod worlds;
