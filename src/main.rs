use clap::Parser;
use gfim_history::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
