use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use gambit_term::{GameEnd, Session};

#[derive(Parser, Debug)]
#[command(about = "gambit: two-player chess in the terminal", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
    info!("gambit starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    let end = session.run()?;
    if end == GameEnd::InputClosed {
        println!();
    }
    Ok(())
}
