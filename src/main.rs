use clap::Parser;
use tradesizer::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
