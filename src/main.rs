//! Landscape renderer: scrolls a scene and writes the visible frame as SVG
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>       JSON scene config (missing fields use defaults)
//!   --seed <SEED>         Random seed (overrides config)
//!   --cursor <X>          Starting cursor position (default: 0)
//!   --scroll <DELTA>      Scroll distance per step (default: 0)
//!   --steps <N>           Number of scroll steps (default: 0)
//!   --output <PATH>       SVG output file (default: landscape.svg)
//!   --chunks-json <PATH>  Also write a JSON summary of the stored chunks

use std::path::PathBuf;
use std::time::Instant;

use inkscroll::core::Result;
use inkscroll::scene::{SceneConfig, SceneManager, ScrollOutcome};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => SceneConfig::from_json_file(path)?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = parse_u32_arg(&args, "--seed") {
        config.seed = seed;
    }
    if let Some(cursor) = parse_f64_arg(&args, "--cursor") {
        config.initial_cursor = cursor;
    }
    let delta = parse_f64_arg(&args, "--scroll").unwrap_or(0.0);
    let steps = parse_usize_arg(&args, "--steps").unwrap_or(0);
    let output = parse_str_arg(&args, "--output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("landscape.svg"));
    let chunks_json = parse_str_arg(&args, "--chunks-json").map(PathBuf::from);

    println!("=== Inkscroll Landscape ===");
    println!("Seed:     {}", config.seed);
    println!("Viewport: {} x {}", config.viewport_width, config.viewport_height);
    println!("Cursor:   {}", config.initial_cursor);
    println!("Scroll:   {} x {}", steps, delta);
    println!("Output:   {}", output.display());
    println!();

    let start = Instant::now();
    let mut manager = SceneManager::new(config)?;
    manager.update();

    let mut regenerations = 0;
    for _ in 0..steps {
        if manager.scroll(delta) == ScrollOutcome::Regenerated {
            regenerations += 1;
        }
    }
    if manager.needs_update() {
        manager.update();
    } else {
        manager.compose();
    }

    std::fs::write(&output, manager.svg_document())?;

    if let Some(path) = chunks_json {
        let chunks: Vec<_> = manager.state().chunks.iter().collect();
        std::fs::write(&path, serde_json::to_string_pretty(&chunks)?)?;
        println!("Chunk summary: {}", path.display());
    }

    let loaded = manager.loaded_span();
    println!("Loaded span:  [{}, {}]", loaded.min, loaded.max);
    println!("Spans planned: {}", manager.spans_planned());
    println!("Regenerations: {}", regenerations);
    println!("Chunks held:   {}", manager.chunk_count());
    println!("View box:      {}", manager.view_box());
    println!("Done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
