//! lit CLI - side-by-side literate documentation generator.
//!
//! `lit [OPTIONS] [FILES]...` writes one HTML page per source file, with
//! comment text rendered as markdown next to the highlighted code.

mod error;
mod generate;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;
use output::Output;

/// lit - side-by-side literate documentation generator.
#[derive(Parser)]
#[command(name = "lit", version, about)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to ERROR
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.args.execute(&output) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
