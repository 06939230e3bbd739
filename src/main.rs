//! # blogline Main Entry Point

use anyhow::Result;
use blogline::cmd_args::CommandLineArgs;
use blogline::{AppController, TerminalEventStream, TerminalRenderStream};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    let log_path = blogline::logging::init(cmd_args.verbose())?;
    tracing::info!(
        "blogline {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_path.display()
    );

    let mut app = AppController::with_io_streams(
        cmd_args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    let result = app.run().await;
    if let Err(e) = &result {
        tracing::error!("blogline exited with error: {:#}", e);
    }
    result
}
