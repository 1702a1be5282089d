//! Terminal reviewer for analyzed chess games.
//!
//! Submits a PGN URL to the analysis backend and lets the user step through
//! the analyzed moves at a prompt.

mod command;
mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chess_review::{AnalysisController, AnalysisService};
use chess_review_client::{ClientConfig, HttpAnalysisService};
use clap::Parser;
use command::{Command, HELP};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-review")]
#[command(about = "Step through an engine-analyzed chess game")]
struct Cli {
    /// URL of the PGN game to analyze
    game_url: String,
    /// Analysis endpoint (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Config file to use instead of ./review.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Width of the evaluation bar in characters
    #[arg(short, long, default_value = "40")]
    width: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ClientConfig::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    tracing::info!(endpoint = %config.endpoint, "Using analysis backend");

    let service = HttpAnalysisService::new(&config).context("Failed to build HTTP client")?;
    let mut controller = AnalysisController::new();

    analyze(&mut controller, &service, &cli.game_url, cli.width).await;
    run_prompt(&mut controller, &service, cli.width).await
}

async fn analyze<S: AnalysisService>(
    controller: &mut AnalysisController,
    service: &S,
    url: &str,
    width: usize,
) {
    println!("Analyzing...");
    controller.submit(service, url).await;
    println!(
        "{}",
        render::render_outcome(controller.state(), controller.store(), width)
    );
}

fn print_position(controller: &AnalysisController, width: usize) {
    println!("{}", render::render_view(controller.store(), width));
}

async fn run_prompt<S: AnalysisService>(
    controller: &mut AnalysisController,
    service: &S,
    width: usize,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Next) => {
                if controller.store_mut().step_forward() {
                    print_position(controller, width);
                } else if controller.store().is_empty() {
                    println!("Nothing to review");
                } else {
                    println!("Already at the last move");
                }
            }
            Ok(Command::Previous) => {
                if controller.store_mut().step_backward() {
                    print_position(controller, width);
                } else if controller.store().is_empty() {
                    println!("Nothing to review");
                } else {
                    println!("Already at the first move");
                }
            }
            Ok(Command::Analyze(url)) => analyze(controller, service, &url, width).await,
            Ok(Command::List) => print!("{}", render::render_move_list(controller.store())),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
