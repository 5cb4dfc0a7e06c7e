use anyhow::Result;
use clap::Parser;
use lintgate::{Cli, MissingTool, Output};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = Output::new(cli.verbose, cli.quiet);
    match cli.run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            if let Some(missing) = e.downcast_ref::<MissingTool>() {
                output.critical(&missing.to_string());
                output.error("Install it, or pass --skip-tool-check to bypass this check");
                process::exit(MissingTool::EXIT_CODE);
            }
            Err(e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "lintgate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LINTGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
