//! Terminal host for the component showcase.
//!
//! # Responsibility
//! - Instantiate the three units and feed them stdin commands.
//! - Start the counter ticker at startup and stop it before exit.

mod command;
mod shell;

use clap::Parser;
use command::parse_command;
use log::{info, warn};
use shell::{Outcome, Shell};
use showcase_core::{default_log_level, init_logging, load_config, PresentationalConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Interactive component showcase")]
struct Args {
    /// JSON card config; the built-in demo card is used when absent.
    #[arg(long, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging stays off without it.
    #[arg(long)]
    log_dir: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("showcase: {err}");
            return ExitCode::FAILURE;
        }
    }

    let card = match args.config.as_ref() {
        Some(path) => match load_config(path) {
            Ok(card) => card,
            Err(err) => {
                eprintln!("showcase: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => PresentationalConfig::demo(),
    };

    let mut shell = Shell::new(card);
    if let Err(err) = shell.start() {
        eprintln!("showcase: {err}");
        return ExitCode::FAILURE;
    }
    info!("event=session_start module=cli status=ok");
    println!("showcase {} (type `help`)", showcase_core::core_version());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("event=stdin_read module=cli status=error error={err}");
                eprintln!("showcase: failed to read input: {err}");
                break;
            }
        };

        match parse_command(&line) {
            Ok(command) => match shell.execute(command) {
                Outcome::Print(text) => print!("{}", with_trailing_newline(text)),
                Outcome::Quit => break,
            },
            Err(command::ParseError::Empty) => {}
            Err(err) => println!("{err}"),
        }
    }

    shell.shutdown().await;
    info!(
        "event=session_end module=cli status=ok tasks={} count={}",
        shell.tasks().total_count(),
        shell.counter().count()
    );
    ExitCode::SUCCESS
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
