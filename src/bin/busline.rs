use std::{io, process::ExitCode, time::Instant};

use busline::document;
use tracing::{error, info};

/// Reads a request document from stdin and writes the answers to stdout.
fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let now = Instant::now();
    match document::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => {
            info!("Processing took {:?}", now.elapsed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to process request document: {err}");
            ExitCode::FAILURE
        }
    }
}
