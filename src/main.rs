//! Pasteport adapter entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pasteport::cli::{app, args::Cli};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries operation output only.
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Grammar failures share the uniform failure exit code; help and
    // version keep reporting success.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let failed = e.use_stderr();
            let _ = e.print();
            return if failed {
                ExitCode::from(app::EXIT_FAILURE)
            } else {
                ExitCode::from(app::EXIT_SUCCESS)
            };
        }
    };

    app::run(cli).await
}
