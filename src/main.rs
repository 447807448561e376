use std::io::{self, BufWriter};
use std::process::ExitCode;

use containers::driver;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the command results, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match driver::run(stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("bucket-map: {error}");
            ExitCode::FAILURE
        },
    }
}
