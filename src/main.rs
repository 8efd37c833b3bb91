use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use table_top::{
    logging,
    session::{self, SessionConfig},
};
use tracing_subscriber::EnvFilter;

/// Moves an object across a table and reports where it ends up.
#[derive(Parser, Debug)]
#[command(name = "table-top", version)]
struct Args {
    /// Table size and object position, e.g. "4,4,2,2". Read from the console when omitted.
    #[arg(long)]
    table: Option<String>,

    /// Command indices, e.g. "1,4,1,3,2,3,2,4,1,0". Read from the console when omitted.
    #[arg(long)]
    commands: Option<String>,

    /// Do not print captions before reading input.
    #[arg(long)]
    no_captions: bool,

    /// Log the object state after every command.
    #[arg(long)]
    debug: bool,

    /// Run the built-in scenarios instead of reading input.
    #[arg(long, conflicts_with_all = ["table", "commands"])]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut term = Term::stdout();
    if args.demo {
        return session::run_demo(&mut term).context("demo failed");
    }

    let config = SessionConfig {
        print_captions: !args.no_captions,
        table: args.table,
        commands: args.commands,
    };
    session::run_session(&mut term, &config).context("simulation failed")?;
    Ok(())
}

fn setup_logging(debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter(debug, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
