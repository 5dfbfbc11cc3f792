//! Callq CLI - interactive call-center simulator
//!
//! Binary name: `callq`

use std::io;

use anyhow::Result;
use callq::cli::build_cli;
use callq::menu;
use callq_core::CallCenter;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    // Logs go to stderr so the interactive transcript on stdout stays clean
    let default_level = if matches.get_flag("quiet") {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("call center open");

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut stdin.lock(), &mut stdout.lock(), CallCenter::new())
}
