//! Chroma CLI entry point.
//!
//! Loads a social-network edge list, colors it with the speculative
//! parallel engine (or the sequential baseline), and writes the
//! assignment file plus an appending CSV report row.

use anyhow::Result;
use chroma_core::load_edge_list;
use chroma_engine::{sequential_greedy, EngineConfig, SpeculativeColoring};
use chroma_report::{append_csv_row, write_assignment, RunMetrics, RunRecord, Timer};
use clap::Parser;
use std::io::Write;

/// Chroma version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(version = VERSION)]
#[command(about = "Parallel speculative greedy graph coloring", long_about = None)]
struct Args {
    /// Input edge-list file path
    ///
    /// Text file with one edge per line, two whitespace-separated integer
    /// user ids. Lines starting with '#' or failing to parse are skipped.
    ///
    /// Example: --input facebook_combined.txt
    #[arg(short, long)]
    input: String,

    /// Coloring algorithm: parallel (default) or sequential
    ///
    /// - parallel: speculative round-based engine on a worker pool
    /// - sequential: single-threaded greedy baseline
    ///
    /// Example: --algorithm sequential
    #[arg(long, default_value = "parallel")]
    algorithm: String,

    /// Worker thread count for the parallel engine
    ///
    /// Overrides the CHROMA_NUM_THREADS environment variable. When neither
    /// is set, the platform's detected hardware concurrency is used.
    ///
    /// Example: --threads 8
    #[arg(short, long)]
    threads: Option<usize>,

    /// Output path for the original-id → color assignment file
    ///
    /// Example: --output user_colours.txt
    #[arg(short, long, default_value = "user_colours.txt")]
    output: String,

    /// CSV report path (rows are appended; header written when empty)
    ///
    /// Defaults to results_parallel.csv or results_sequential.csv
    /// depending on --algorithm.
    ///
    /// Example: --report results.csv
    #[arg(long)]
    report: Option<String>,

    /// JSON-lines telemetry path (one record appended per run)
    ///
    /// Example: --telemetry telemetry_coloring.jsonl
    #[arg(long, default_value = "telemetry_coloring.jsonl")]
    telemetry: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Chroma {} - Starting", VERSION);

    let (algorithm_label, default_report) = match args.algorithm.as_str() {
        "parallel" => ("Parallel", "results_parallel.csv"),
        "sequential" => ("Sequential", "results_sequential.csv"),
        unknown => {
            anyhow::bail!("Unknown algorithm: {}. Valid values: parallel, sequential", unknown);
        }
    };
    let report_path = args.report.as_deref().unwrap_or(default_report);

    // Load graph; an unreadable input is fatal
    let graph = load_edge_list(&args.input)?;
    log::info!("Graph loaded:");
    log::info!("  Nodes: {}", graph.vertex_count());
    log::info!("  Edges: {}", graph.edge_count());
    log::info!("  Density: {:.6}", graph.density());

    let config = EngineConfig {
        num_threads: args.threads,
    };
    let threads = match args.algorithm.as_str() {
        "parallel" => config.resolve_threads()?,
        _ => 1,
    };

    let mut timer = Timer::new();
    timer.start();
    let solution = match args.algorithm.as_str() {
        "parallel" => {
            log::info!("Running speculative engine with {} thread(s)", threads);
            SpeculativeColoring::new(config).color(&graph)?
        }
        _ => {
            log::info!("Running sequential baseline");
            sequential_greedy(&graph)
        }
    };
    timer.stop();

    let metrics = RunMetrics::collect(&solution, timer.elapsed_seconds());

    log::info!("--- {} Greedy Coloring ---", algorithm_label);
    log::info!("  Total Colors Used   : {}", metrics.total_colors);
    log::info!("  Rounds              : {}", metrics.rounds);
    log::info!("  Execution Time (s)  : {:.6}", metrics.execution_time_secs);
    log::info!("  CPU Time (s)        : {:.6}", metrics.cpu_time_secs);
    log::info!("  Mean Color Value    : {:.6}", metrics.mean_color);
    log::info!("  Color Variance      : {:.6}", metrics.color_variance);

    write_assignment(&args.output, &graph, &solution)?;

    let record = RunRecord::from_metrics(algorithm_label, threads, &metrics);
    append_csv_row(report_path, &record)?;
    log::info!("Run record appended to: {}", report_path);

    // Emit telemetry
    let telemetry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "algorithm": algorithm_label,
        "input": args.input,
        "threads": threads,
        "graph": {
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "density": graph.density(),
        },
        "results": {
            "total_colors": metrics.total_colors,
            "rounds": metrics.rounds,
            "execution_time_secs": metrics.execution_time_secs,
            "cpu_time_secs": metrics.cpu_time_secs,
            "mean_color": metrics.mean_color,
            "color_variance": metrics.color_variance,
        }
    });

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.telemetry)?
        .write_all(format!("{}\n", telemetry).as_bytes())?;
    log::info!("Telemetry written to: {}", args.telemetry);

    log::info!("Coloring complete. Results saved to {}", args.output);
    Ok(())
}
