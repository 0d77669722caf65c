use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tapline::{
    Config, FileSink, HostEvent, Sink, StdoutSink, TapReporter, handle_host_event, plain_error,
    verbatim_user_agent,
};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let workspace = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&workspace);

    // Optional first argument overrides the configured report path.
    let outfile = std::env::args().nth(1).map(PathBuf::from).or(config.output.file);

    let sink: Box<dyn Sink> = match outfile {
        Some(path) => Box::new(FileSink::create(&path)?),
        None => Box::new(StdoutSink),
    };

    let mut reporter = TapReporter::new(
        sink,
        Box::new(verbatim_user_agent),
        Box::new(plain_error),
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<HostEvent>(line) {
            Ok(event) => handle_host_event(&mut reporter, event)?,
            Err(err) => {
                // Hosts may interleave banners and other noise; skip it.
                tracing::debug!(%err, line, "ignoring non-event input");
            }
        }
    }

    if reporter.failures() > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
