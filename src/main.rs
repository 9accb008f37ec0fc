mod cli;
mod config;
mod error;
mod input;
mod locator;
mod metrics;
mod pipeline;
mod registry;
mod report;
mod types;

use crate::error::ScoreError;
use clap::Parser;
use futures::StreamExt;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

fn init_logging(cli: &cli::Cli) {
    // Records own stdout, so diagnostics go to stderr. RUST_LOG wins over flags.
    let default_directive = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "modelscore=info",
            _ => "modelscore=debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    types::scoring::verify_weights()?;

    if let Some(mode) = cli.tooling_mode() {
        return Err(ScoreError::UnsupportedMode(mode.to_string()));
    }

    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?;
    let concurrency = cli.concurrency.unwrap_or_else(|| cfg.concurrency());
    types::config::validate_concurrency(concurrency)?;

    let locators = input::read_locators(Path::new(&cli.target))?;
    let registry = registry::Registry::from_settings(&cfg.registry_settings(), cli.offline)?;
    info!(
        locators = locators.len(),
        concurrency,
        configured = registry.is_configured(),
        "starting batch"
    );

    match cli.format {
        cli::RecordFormat::Ndjson => stream_ndjson(&locators, &registry, concurrency).await,
        cli::RecordFormat::Md => print_markdown(&locators, &registry, concurrency).await,
    }
}

/// Prints each record as soon as it is next in input order. On Ctrl-C the
/// records already printed stay flushed and the batch is abandoned.
async fn stream_ndjson(
    locators: &[String],
    registry: &registry::Registry,
    concurrency: usize,
) -> Result<i32, ScoreError> {
    let records = pipeline::record_stream(locators, registry, concurrency);
    tokio::pin!(records);
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let mut interrupt_armed = true;
    loop {
        tokio::select! {
            next = records.next() => match next {
                Some(record) => println!(
                    "{}",
                    report::render(std::slice::from_ref(&record), report::OutputFormat::Ndjson)?
                ),
                None => return Ok(exit_code::SUCCESS),
            },
            signal = &mut interrupt, if interrupt_armed => match signal {
                Ok(()) => return Err(ScoreError::Interrupted),
                Err(err) => {
                    warn!(error = %err, "cannot listen for Ctrl-C");
                    interrupt_armed = false;
                }
            }
        }
    }
}

async fn print_markdown(
    locators: &[String],
    registry: &registry::Registry,
    concurrency: usize,
) -> Result<i32, ScoreError> {
    let records = tokio::select! {
        records = pipeline::evaluate_batch(locators, registry, concurrency) => records,
        Ok(()) = tokio::signal::ctrl_c() => return Err(ScoreError::Interrupted),
    };
    println!("{}", report::render(&records, report::OutputFormat::Md)?);
    Ok(exit_code::SUCCESS)
}

#[tokio::main]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_code::FAILURE
            } else {
                exit_code::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    init_logging(&cli);

    match run(cli).await {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::FAILURE);
        }
    }
}
