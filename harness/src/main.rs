use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pancake_harness::input::parse_stack;
use pancake_harness::prompt::prompt_stack;
use pancake_harness::random::{random_stack, DEFAULT_RANDOM_SIZE};
use pancake_harness::render::render_outcome;
use pancake_harness::runner::{run, RunConfig};
use pancake_search::SearchPolicy;

/// pancake: sort a pancake stack with the fewest total flipped plates, via A*.
#[derive(Parser)]
#[command(name = "pancake", version, about)]
struct Cli {
    /// Stack to sort, top first: "3124" or "3, 1, 2, 4". The largest plate must be last.
    #[arg(long, conflicts_with = "random")]
    stack: Option<String>,
    /// Sort a randomized stack instead of reading one.
    #[arg(long)]
    random: bool,
    /// Plate count for --random.
    #[arg(long, default_value_t = DEFAULT_RANDOM_SIZE, requires = "random")]
    size: u32,
    /// Seed for the random stack (also used by "r" at the interactive prompt).
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many node expansions.
    #[arg(long)]
    max_expansions: Option<u64>,
    /// Stop after this many milliseconds of search.
    #[arg(long)]
    time_limit_ms: Option<u64>,
    /// Print the JSON search report instead of the flip sequence.
    #[arg(long)]
    json: bool,
    /// Also write the JSON search report to this file.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let stack = if let Some(text) = &cli.stack {
        parse_stack(text).with_context(|| format!("invalid --stack {text:?}"))?
    } else if cli.random {
        random_stack(cli.size, cli.seed).context("invalid --size")?
    } else {
        let stdin = io::stdin();
        prompt_stack(stdin.lock(), io::stdout(), cli.seed)?.into_stack()
    };

    let policy = SearchPolicy {
        max_expansions: cli.max_expansions,
        time_limit: cli.time_limit_ms.map(Duration::from_millis),
    };

    let config = RunConfig {
        stack,
        policy,
        report_path: cli.report,
    };

    let mut stdout = io::stdout().lock();
    if !cli.json {
        writeln!(stdout, "Running search...")?;
    }

    let output = run(config)?;

    if cli.json {
        let bytes = serde_json::to_vec_pretty(&output.report)?;
        stdout.write_all(&bytes)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", render_outcome(&output.root, &output.result))?;
        writeln!(
            stdout,
            "A* search time: {:.2} seconds",
            output.elapsed.as_secs_f64()
        )?;
    }

    Ok(())
}
