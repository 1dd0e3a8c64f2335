use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use human_panic::setup_panic;
use mailscope::prelude::*;
use tracing::{enabled, error, info, Level};

/// mailscope
///
/// Reads raw email headers, pulls out the sender, authentication
/// and routing details, and flags messages that look spoofed.
/// The analysis is saved as a timestamped JSON document.
#[derive(Parser)]
#[clap(author, version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(flatten)]
    config: ConfigOptions,

    // `analyze` arguments, used when no sub-command is given
    #[clap(flatten)]
    analyze: AnalyzeArgs,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
struct VersionArgs {
    #[arg(long, action)]
    pub short: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a raw email header file and save the findings.
    #[clap(alias("a"))]
    Analyze(AnalyzeArgs),
    /// Print version info and exit
    #[clap(alias("v"))]
    Version(VersionArgs),
}

#[tokio::main]
async fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();
    let opts = Cli::parse();

    let (guard, file_location) = match opts
        .logging
        .configure_logging(&opts.config.get_run_id(), "root")
    {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Unable to configure logging: {}", e);
            std::process::exit(2);
        }
    };
    let error_code = run_subcommand(opts).await;

    if error_code != 0 || enabled!(Level::DEBUG) {
        info!(target: "user", "More detailed logs at {}", file_location);
    }

    // exit() skips destructors, flush the log file first
    drop(guard);
    std::process::exit(error_code);
}

async fn run_subcommand(opts: Cli) -> i32 {
    let loaded_config = match opts.config.load_config() {
        Err(e) => {
            error!(target: "user", "Failed to load configuration: {}", e);
            return 2;
        }
        Ok(c) => c,
    };

    let command = opts
        .command
        .unwrap_or(Command::Analyze(opts.analyze));

    handle_commands(&loaded_config, &command)
        .await
        .unwrap_or_else(|e| {
            error!(target: "user", "Critical Error. {}", e);
            1
        })
}

async fn handle_commands(found_config: &FoundConfig, command: &Command) -> Result<i32> {
    match command {
        Command::Analyze(args) => analyze_root(found_config, args).await,
        Command::Version(args) => print_version(args),
    }
}

fn print_version(args: &VersionArgs) -> Result<i32> {
    if args.short {
        println!("mailscope {}", env!("CARGO_PKG_VERSION"));
    } else {
        info!(target: "always", "{}: {:60}", "Version".white().bold(), env!("CARGO_PKG_VERSION"));
    }

    Ok(0)
}
