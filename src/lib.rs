//! TAP version 13 reporter for browser test runs.
//!
//! A host test runner drives the lifecycle hooks on [`TapReporter`]; the
//! bundled binary adapts an NDJSON event stream on stdin into those hooks.

pub mod config;
pub mod events;
pub mod models;
pub mod reporter;
pub mod sink;

pub use config::Config;
pub use events::{HostEvent, handle_host_event};
pub use models::{Browser, SpecInfo, SpecResult, SpecStatus};
pub use reporter::{FormatError, FormatUserAgent, TapReporter, plain_error, verbatim_user_agent};
pub use sink::{FileSink, Sink, StdoutSink};
