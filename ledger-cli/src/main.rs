mod commands;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use ledger_core::{CachedClient, MockResponder, cache::DEFAULT_CACHE_TTL};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "xem-cli", version, about = "Query the mock XEM ledger from the terminal")]
struct Cli {
    /// Print raw JSON payloads instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Heartbeat, chain height and node info
    Status,
    /// Look up an account by address (hyphens and case are ignored)
    Account { address: String },
    /// Look up a transaction by its 64-character hash
    Tx { hash: String },
    /// Name of a transaction type code
    TxType { code: u32 },
    /// Decode a hex message payload
    DecodeMessage {
        payload: String,
        #[arg(long = "type", default_value_t = 1)]
        kind: u32,
    },
    /// Convert a network timestamp (seconds since the network epoch) to UTC
    Epoch { timestamp: u32 },
    /// Show the sample address and hash the mock ledger knows about
    Samples,
    /// Interactive prompt accepting the commands above
    Shell,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CachedClient::new(MockResponder::new(), DEFAULT_CACHE_TTL);

    match cli.command {
        Command::Shell => run_shell(&client, cli.json),
        command => match commands::run(&client, command, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("✗ {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run_shell(client: &CachedClient<MockResponder>, json: bool) -> ExitCode {
    println!(
        "Commands: status | account <address> | tx <hash> | tx-type <code> | decode-message <hex> [--type N] | epoch <ts> | samples | exit"
    );
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ {}", e);
                return ExitCode::FAILURE;
            }
        }
        let args: Vec<&str> = line.split_whitespace().collect();
        match args.as_slice() {
            [] => continue,
            ["exit"] | ["quit"] => break,
            _ => {}
        }
        let parsed = Cli::try_parse_from(std::iter::once("xem-cli").chain(args.iter().copied()));
        match parsed {
            Ok(Cli {
                command: Command::Shell,
                ..
            }) => println!("Already in the shell"),
            Ok(cli) => {
                if let Err(e) = commands::run(client, cli.command, json || cli.json) {
                    println!("✗ {}", e);
                }
            }
            Err(e) => println!("{}", e),
        }
    }
    ExitCode::SUCCESS
}
