//! Query runner: binds an algorithm to a graph and answers start/goal pairs.
//!
//! # Pipeline
//!
//! ```text
//! parse_vertex(start), parse_vertex(goal)
//!   → search() (timed) → validate() → render() | report JSON
//! ```
//!
//! Parse errors are reported on the error stream and the next query runs.
//! Any other failure aborts the run.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::{info, warn};
use pathfinder_search::astar::AstarSearch;
use pathfinder_search::contract::Graph;
use pathfinder_search::error::SearchError;
use pathfinder_search::policy::SearchPolicy;
use pathfinder_search::random::RandomSearch;
use pathfinder_search::result::{RenderOptions, SearchResult};
use pathfinder_search::search::SearchAlgorithm;
use pathfinder_search::ucs::UniformCostSearch;

use crate::contract::LoadError;

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmKind {
    Random,
    Ucs,
    Astar,
}

/// Which graph family `--graph` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphKind {
    #[value(name = "AdjacencyGraph")]
    AdjacencyGraph,
    #[value(name = "GridGraph")]
    GridGraph,
    #[value(name = "NPuzzle")]
    NPuzzle,
    #[value(name = "WordLadder")]
    WordLadder,
}

/// Error during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// Building the graph failed.
    Load(LoadError),
    /// Parsing a vertex or validating the policy failed.
    Search(SearchError),
    /// Caller-supplied arguments are unusable (e.g. an odd query count).
    InvalidArgument { detail: String },
    /// Writing output or reading interactive input failed.
    Io { detail: String },
    /// The JSON report could not be produced.
    Report { detail: String },
}

impl std::fmt::Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "cannot load graph: {e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::InvalidArgument { detail } => write!(f, "invalid argument: {detail}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Report { detail } => write!(f, "cannot build report: {detail}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for RunnerError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<SearchError> for RunnerError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<std::io::Error> for RunnerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            detail: e.to_string(),
        }
    }
}

/// How query results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    pub render: RenderOptions,
    /// Emit one JSON report per query instead of the text rendering.
    pub json: bool,
}

/// Instantiate the algorithm named by `kind` over `graph`.
///
/// # Errors
///
/// [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn make_algorithm<'g, G>(
    kind: AlgorithmKind,
    graph: &'g G,
    policy: SearchPolicy,
) -> Result<Box<dyn SearchAlgorithm<'g, G> + 'g>, SearchError>
where
    G: Graph + ?Sized + 'g,
{
    policy.validate()?;
    Ok(match kind {
        AlgorithmKind::Random => Box::new(RandomSearch::with_policy(graph, policy)),
        AlgorithmKind::Ucs => Box::new(UniformCostSearch::new(graph)),
        AlgorithmKind::Astar => Box::new(AstarSearch::new(graph)),
    })
}

/// A finished query with its wall-clock time.
#[derive(Debug)]
pub struct QueryOutcome<'g, G: Graph + ?Sized> {
    pub result: SearchResult<'g, G>,
    pub elapsed: Duration,
}

/// Parse `start_text` and `goal_text`, run one search, and write the result.
///
/// # Errors
///
/// [`RunnerError::Search`] with [`SearchError::Parse`] for an unparsable
/// vertex; [`RunnerError::Io`] or [`RunnerError::Report`] if output fails.
pub fn search_once<'g, G>(
    algorithm: &dyn SearchAlgorithm<'g, G>,
    start_text: &str,
    goal_text: &str,
    options: &RunOptions,
    out: &mut dyn Write,
) -> Result<QueryOutcome<'g, G>, RunnerError>
where
    G: Graph + ?Sized + 'g,
{
    let graph = algorithm.graph();
    let start = graph.parse_vertex(start_text.trim())?;
    let goal = graph.parse_vertex(goal_text.trim())?;

    info!("{}: searching {start} --> {goal}", algorithm.name());
    let clock = Instant::now();
    let result = algorithm.search(&start, &goal);
    let elapsed = clock.elapsed();

    if let Err(e) = result.validate() {
        warn!("{}: {e}", algorithm.name());
    }

    if options.json {
        let digest = result.digest().map_err(|e| RunnerError::Report {
            detail: e.to_string(),
        })?;
        let line = serde_json::json!({
            "algorithm": algorithm.name(),
            "digest": digest,
            "elapsed_seconds": elapsed.as_secs_f64(),
            "result": result.to_json_value(),
        });
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "Searching: {start} --> {goal}")?;
        writeln!(
            out,
            "Searching the graph took {:.2} seconds.",
            elapsed.as_secs_f64()
        )?;
        writeln!(out, "{}", result.render(&options.render))?;
        writeln!(out)?;
    }

    Ok(QueryOutcome { result, elapsed })
}

/// Answer one query, reporting a parse error on `err` instead of failing.
/// Returns whether a search ran.
fn answer<'g, G>(
    algorithm: &dyn SearchAlgorithm<'g, G>,
    start: &str,
    goal: &str,
    options: &RunOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, RunnerError>
where
    G: Graph + ?Sized + 'g,
{
    match search_once(algorithm, start, goal, options, out) {
        Ok(_) => Ok(true),
        Err(RunnerError::Search(e @ SearchError::Parse { .. })) => {
            writeln!(err, "Parse error!")?;
            writeln!(err, "{e}")?;
            writeln!(err)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Run alternating start/goal queries. Returns how many searches ran.
///
/// # Errors
///
/// [`RunnerError::InvalidArgument`] for an odd number of queries; output
/// failures as in [`search_once`].
pub fn run_queries<'g, G>(
    algorithm: &dyn SearchAlgorithm<'g, G>,
    queries: &[String],
    options: &RunOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<usize, RunnerError>
where
    G: Graph + ?Sized + 'g,
{
    if queries.len() % 2 != 0 {
        return Err(RunnerError::InvalidArgument {
            detail: format!(
                "queries must alternate start and goal, got {} values",
                queries.len()
            ),
        });
    }
    let mut ran = 0;
    for pair in queries.chunks_exact(2) {
        if answer(algorithm, &pair[0], &pair[1], options, out, err)? {
            ran += 1;
        }
    }
    Ok(ran)
}

/// Print `summary`, then prompt for start/goal pairs until an empty start
/// line or end of input. Returns how many searches ran.
///
/// # Errors
///
/// [`RunnerError::Io`] if reading or writing fails.
pub fn run_interactive<'g, G>(
    algorithm: &dyn SearchAlgorithm<'g, G>,
    summary: &str,
    options: &RunOptions,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<usize, RunnerError>
where
    G: Graph + ?Sized + 'g,
{
    writeln!(out, "{summary}")?;
    writeln!(out)?;
    let mut ran = 0;
    loop {
        writeln!(out, "(ENTER to quit)")?;
        let Some(start) = prompt(input, out, "Start: ")? else {
            break;
        };
        let Some(goal) = prompt(input, out, "Goal: ")? else {
            break;
        };
        writeln!(out)?;
        if answer(algorithm, &start, &goal, options, out, err)? {
            ran += 1;
        }
    }
    writeln!(out, "Bye bye, hope to see you again soon!")?;
    Ok(ran)
}

/// Read one trimmed line after `label`. `None` at end of input or on an
/// empty line.
fn prompt(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
) -> Result<Option<String>, RunnerError> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    Ok((!line.is_empty()).then(|| line.to_owned()))
}
