//! CLI entry point for shelly.

mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "SHELLY_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too and are not failures.
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let code = app::entry::run(args).await;
    std::process::exit(code);
}

/// Route diagnostics to stderr, quiet unless `SHELLY_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
