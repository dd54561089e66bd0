mod cli;

use clap::{Parser, Subcommand};
use cli::check::CheckCmd;
use cli::run::RunCmd;
use sevmon_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "sevmon",
    version,
    about = "sevmon: min/max/mean severity queries over timestamped log events"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process a command file and write one result line per command (default)
    Run(RunCmd),

    /// Parse and pre-scan a command file without writing results
    Check(CheckCmd),
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Some(Command::Run(cmd)) => cli::run::run(cmd),
        Some(Command::Check(cmd)) => cli::check::run(cmd),
        None => cli::run::run(RunCmd::default()),
    };

    if let Err(e) = result {
        eprintln!("sevmon error: {e:#}");
        std::process::exit(1);
    }
}
