//! arena-app: run one autopiloted session and print the outcome.
//!
//! Usage:
//!   arena-app [--config arena.json] [--fast] [--max-ticks N]

use std::process;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_app::game_loop::{spawn_game_loop, LoopOptions, Pacing};
use arena_core::commands::PlayerCommand;
use arena_sim::SimConfig;

struct Args {
    config: Option<String>,
    options: LoopOptions,
}

fn main() -> anyhow::Result<()> {
    init_tracing("info");

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => SimConfig::from_json_file(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => SimConfig::default(),
    };
    info!(
        seed = config.seed,
        world = %format!("{}x{}", config.world_width, config.world_height),
        tick_rate = config.tick_rate,
        pacing = ?args.options.pacing,
        "starting arena"
    );

    let (_state, handle) = spawn_game_loop(config, args.options, [PlayerCommand::StartSession])
        .context("spawning game loop")?;

    let summary = match handle.join() {
        Ok(summary) => summary,
        Err(_) => bail!("game loop thread panicked"),
    };
    info!(
        phase = ?summary.phase,
        ticks = summary.ticks,
        secs = summary.elapsed_secs,
        kills = summary.kills,
        hp = summary.hp,
        wave = summary.wave,
        max_waves = summary.max_waves,
        "session finished"
    );
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args {
        config: None,
        options: LoopOptions::default(),
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                parsed.config = Some(args.next().context("--config needs a path")?);
            }
            "--fast" => parsed.options.pacing = Pacing::Fixed,
            "--max-ticks" => {
                let value = args.next().context("--max-ticks needs a number")?;
                parsed.options.max_ticks = value
                    .parse()
                    .with_context(|| format!("invalid tick count: {value}"))?;
            }
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => bail!("Unknown argument: {other}"),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    eprintln!(
        "arena-app: headless arena shooter session\n\
         \n\
         Options:\n\
         \x20 --config <path>    JSON simulation config (missing fields use defaults)\n\
         \x20 --fast             fixed-step, no sleeping\n\
         \x20 --max-ticks <n>    stop after n ticks\n\
         \n\
         Log level follows RUST_LOG (default: info)."
    );
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
