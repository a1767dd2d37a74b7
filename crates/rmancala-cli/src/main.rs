//! rmancala: カラハの局面を反復深化で探索して最善手を表示する

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rmancala_core::search::{IterationInfo, SearchLimits, Searcher, StopToken};
use rmancala_core::types::MAX_DEPTH;
use rmancala_core::{Depth, Position};

mod report;

use report::{Report, format_pv};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side to move: 0 (north) or 1 (south)
    player: String,

    /// Seed counts of the 14 cells, starting at cell 0 (north's store)
    #[arg(required = true, allow_negative_numbers = true)]
    cells: Vec<String>,

    /// Iterative deepening ceiling
    #[arg(long, default_value_t = MAX_DEPTH, value_parser = clap::value_parser!(i32).range(0..))]
    max_depth: Depth,

    /// Time budget in milliseconds; on expiry the search stops like on Ctrl-C
    #[arg(long, value_name = "MS")]
    movetime: Option<u64>,

    /// Print the final report as a single JSON object
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let root = Position::from_args(&args.player, &args.cells).context("invalid position")?;

    let mut searcher = Searcher::new(StopToken::new());
    let stop = searcher.stop_token().clone();
    if let Err(e) = ctrlc::set_handler(move || stop.raise()) {
        log::warn!("failed to install Ctrl-C handler: {e}");
    }

    let mut limits = SearchLimits::new().max_depth(args.max_depth);
    if let Some(ms) = args.movetime {
        limits = limits.move_time(Duration::from_millis(ms));
    }
    log::debug!("root {root}, limits {limits:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{root} = ...")?;

    // コールバック内では `?` が使えないので最初の書き込みエラーだけ覚えておく
    let mut write_error: Option<io::Error> = None;
    let result = searcher.iterative_deepening(&root, &limits, |info: &IterationInfo<'_>| {
        if write_error.is_some() {
            return;
        }
        let line = writeln!(out, "depth {}: val={} pv={}", info.depth, info.value, format_pv(info.pv))
            .and_then(|()| out.flush());
        if let Err(e) = line {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e).context("failed to write search progress");
    }

    let report = Report::new(&root, &result).context("failed to build the report")?;
    if args.json {
        serde_json::to_writer(&mut out, &report).context("failed to serialize the report")?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
