//! Command line front end for races and step traces.
//!
//! Usage:
//!   algo-race                                  # Race the first two sorting algorithms
//!   algo-race --category mst --rounds 5        # Five Kruskal vs Prim races
//!   algo-race --list                           # List categories and algorithms
//!   algo-race --trace dijkstra --nodes 8       # Step trace on a random graph
//!   algo-race --help                           # Show help

use algo_race::config::RaceConfig;
use algo_race::graph::create_random_graph_with;
use algo_race::race::Arena;
use algo_race::registry::{build_catalog, Category};
use algo_race::trace::{run_bellman_ford, run_dijkstra};
use algo_race::tui;
use algo_race::utils::runner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::process;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Print an error and exit with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Parse the value following `flag`.
fn take_value<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        fail(format!("{} expects a value", flag));
    };
    raw.parse()
        .unwrap_or_else(|_| fail(format!("invalid value '{}' for {}", raw, flag)))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut category = Category::Sorting;
    let mut algos: Option<(String, String)> = None;
    let mut size: usize = 1000;
    let mut rounds: usize = 1;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut json_path: Option<String> = None;
    let mut trace: Option<String> = None;
    let mut nodes: usize = 6;
    let mut density: f64 = 0.3;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--category" => {
                let name: String = take_value(&args, &mut i, "--category");
                category = name.parse().unwrap_or_else(|e| fail(e));
            }
            "--algos" => {
                let list: String = take_value(&args, &mut i, "--algos");
                match list.split_once(',') {
                    Some((a, b)) => algos = Some((a.trim().to_string(), b.trim().to_string())),
                    None => fail("--algos expects two comma-separated ids"),
                }
            }
            "--size" => size = take_value(&args, &mut i, "--size"),
            "--rounds" => rounds = take_value(&args, &mut i, "--rounds"),
            "--seed" => seed = Some(take_value(&args, &mut i, "--seed")),
            "--csv" => csv_path = Some(take_value(&args, &mut i, "--csv")),
            "--json" => json_path = Some(take_value(&args, &mut i, "--json")),
            "--trace" => trace = Some(take_value(&args, &mut i, "--trace")),
            "--nodes" => nodes = take_value(&args, &mut i, "--nodes"),
            "--density" => density = take_value(&args, &mut i, "--density"),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Run with --help for usage.");
                process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_catalog(&build_catalog());
        return;
    }

    tui::print_header();

    if let Some(algorithm) = trace {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let graph = create_random_graph_with(&mut rng, nodes, density);
        tui::print_graph(&graph);
        match algorithm.as_str() {
            "dijkstra" => tui::print_dijkstra_trace(&run_dijkstra(&graph, 0)),
            "bellman-ford" | "bellmanford" => {
                tui::print_bellman_ford_trace(&run_bellman_ford(&graph, 0))
            }
            other => fail(format!(
                "unknown trace '{}' (expected dijkstra or bellman-ford)",
                other
            )),
        }
        return;
    }

    let mut config = RaceConfig::default();
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
    let mut arena = Arena::new(config);

    let (first, second) = match algos {
        Some(pair) => pair,
        None => {
            let ids = arena.catalog().describe(category);
            match ids.as_slice() {
                [a, b, ..] => (a.id.to_string(), b.id.to_string()),
                _ => fail(format!("category '{}' has fewer than two algorithms", category)),
            }
        }
    };

    let report = runner::run_rounds(&mut arena, category, &first, &second, size, rounds)
        .unwrap_or_else(|e| fail(e));

    if let Some(last) = arena.last_result() {
        tui::print_race_result(last);
    }
    if report.results.len() > 1 {
        tui::print_rounds_summary(&report);
    }
    tui::print_leaderboard(arena.leaderboard(), category);

    if let Some(path) = csv_path {
        match runner::export_csv(&path, arena.leaderboard()) {
            Ok(_) => println!("Leaderboard exported to {}", path),
            Err(e) => fail(format!("failed to write {}: {}", path, e)),
        }
    }
    if let Some(path) = json_path {
        match runner::export_json(&path, arena.history()) {
            Ok(_) => println!("Race history exported to {}", path),
            Err(e) => fail(format!("failed to write {}: {}", path, e)),
        }
    }
}
