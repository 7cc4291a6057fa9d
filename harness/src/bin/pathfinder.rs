//! `pathfinder`: run a search algorithm over a graph loaded from disk.
//!
//! ```text
//! pathfinder -a astar -t GridGraph -g maps/maze.map -q 1:1 39:18
//! pathfinder -a ucs -t NPuzzle -g 3 -q /_AB/CDE/FGH/ /ABC/DEF/GH_/
//! pathfinder -a ucs -t WordLadder -g words.txt      # interactive
//! ```

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use pathfinder_harness::contract::GraphSummary;
use pathfinder_harness::runner::{
    make_algorithm, run_interactive, run_queries, AlgorithmKind, GraphKind, RunOptions,
};
use pathfinder_harness::worlds::adjacency::AdjacencyGraph;
use pathfinder_harness::worlds::grid::GridGraph;
use pathfinder_harness::worlds::npuzzle::NPuzzle;
use pathfinder_harness::worlds::word_ladder::WordLadder;
use pathfinder_search::contract::Graph;
use pathfinder_search::policy::{SearchPolicy, DEFAULT_RANDOM_WALK_CAP};
use pathfinder_search::result::RenderOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(
    name = "pathfinder",
    about = "Find paths in graphs with random walk, uniform-cost search or A*"
)]
struct Cli {
    /// Search algorithm to run
    #[arg(short = 'a', long, value_enum)]
    algorithm: AlgorithmKind,

    /// Type of graph
    #[arg(short = 't', long = "graphtype", value_enum)]
    graph_type: GraphKind,

    /// The graph itself: a file path, or the puzzle size for NPuzzle
    #[arg(short = 'g', long)]
    graph: String,

    /// Alternating start and goal vertices; omit for interactive mode
    #[arg(short = 'q', long, num_args = 0..)]
    queries: Option<Vec<String>>,

    /// Print one JSON report per query instead of text
    #[arg(long)]
    json: bool,

    /// Seed for the random walk
    #[arg(long)]
    seed: Option<u64>,

    /// Step limit for the random walk
    #[arg(long, default_value_t = DEFAULT_RANDOM_WALK_CAP)]
    random_walk_cap: u64,

    /// Do not draw grid graphs
    #[arg(long)]
    no_draw: bool,

    #[arg(long, default_value_t = 100)]
    max_width: usize,

    #[arg(long, default_value_t = 25)]
    max_height: usize,
}

impl Cli {
    fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            random_walk_cap: self.random_walk_cap,
            seed: self.seed,
        }
    }

    fn run_options(&self) -> RunOptions {
        RunOptions {
            render: RenderOptions {
                draw_graph: !self.no_draw,
                max_width: self.max_width,
                max_height: self.max_height,
                with_weight: true,
            },
            json: self.json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let path = Path::new(&cli.graph);
    match cli.graph_type {
        GraphKind::AdjacencyGraph => run(&AdjacencyGraph::load(path)?, &cli),
        GraphKind::GridGraph => run(&GridGraph::load(path)?, &cli),
        GraphKind::NPuzzle => run(&NPuzzle::from_arg(&cli.graph)?, &cli),
        GraphKind::WordLadder => run(&WordLadder::load(path)?, &cli),
    }
}

fn run<G: Graph + GraphSummary>(graph: &G, cli: &Cli) -> anyhow::Result<()> {
    let algorithm = make_algorithm(cli.algorithm, graph, cli.policy())?;
    let options = cli.run_options();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match cli.queries.as_deref() {
        Some(queries) if !queries.is_empty() => {
            run_queries(algorithm.as_ref(), queries, &options, &mut out, &mut err)
                .context("running queries")?;
        }
        _ => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let summary = graph.summary(&mut rng);
            let stdin = io::stdin();
            run_interactive(
                algorithm.as_ref(),
                &summary,
                &options,
                &mut stdin.lock(),
                &mut out,
                &mut err,
            )
            .context("interactive session")?;
        }
    }
    out.flush()?;
    Ok(())
}
