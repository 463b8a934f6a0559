use clap::Parser;
use classboard::cli::{Cli, Shell};
use classboard::error::ClassboardError;
use classboard::infrastructure::{Clock, Config, FixedClock, SystemClock};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "classboard=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ClassboardError> {
    let config = Config::discover(cli.config.as_deref())?;

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    info!(today = %clock.today(), "starting session");

    let mut shell = Shell::new(config, clock);
    let stdout = io::stdout();
    let stderr = io::stderr();

    match cli.script {
        Some(path) => {
            let file = File::open(&path).map_err(|source| ClassboardError::Script {
                path: path.clone(),
                source,
            })?;
            shell.run(
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
                false,
            )
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(
                stdin.lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
                interactive,
            )
        }
    }
}
