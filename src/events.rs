use anyhow::Result;
use serde::Deserialize;

use crate::models::{Browser, SpecInfo};
use crate::reporter::TapReporter;

/// Lifecycle events streamed by the host, one JSON object per line.
///
/// `spec-result` carries the host's spec descriptor plus the terminal
/// state string; the dispatcher fans it out to the matching reporter
/// callback.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostEvent {
    RunStart,
    BrowserStart {
        browser: Browser,
    },
    SpecResult {
        browser: Browser,
        state: String,
        #[serde(flatten)]
        spec: SpecInfo,
    },
    BrowserComplete {
        browser: Browser,
    },
    RunComplete,
}

/// Feed one host event into the reporter.
pub fn handle_host_event(reporter: &mut TapReporter, event: HostEvent) -> Result<()> {
    match event {
        HostEvent::RunStart => reporter.on_run_start(),

        HostEvent::BrowserStart { browser } => {
            reporter.on_browser_start(&browser);
            Ok(())
        }

        HostEvent::SpecResult {
            browser,
            state,
            spec,
        } => {
            match state.as_str() {
                "passed" => reporter.spec_success(&browser, &spec),
                "failed" => reporter.spec_failure(&browser, &spec),
                "skipped" => reporter.spec_skipped(&browser, &spec),
                other => {
                    tracing::warn!(state = other, "dropping spec result with unknown state");
                }
            }
            Ok(())
        }

        HostEvent::BrowserComplete { browser } => reporter.on_browser_complete(&browser),

        HostEvent::RunComplete => reporter.on_run_complete(),
    }
}
