use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Browser, BrowserSuite, RunState, SpecInfo, SpecResult};
use crate::reporter::{FormatError, FormatUserAgent};
use crate::sink::Sink;

/// Renders one test run as a TAP version 13 stream.
///
/// The host drives the hooks in a fixed serial order: run start, then per
/// browser a start / spec-callback / complete sequence (browsers may
/// interleave), then run complete. Output happens on run start, browser
/// complete and run complete; spec callbacks only accumulate.
pub struct TapReporter {
    state: RunState,
    sink: Box<dyn Sink>,
    format_ua: Box<dyn FormatUserAgent>,
    format_error: Box<dyn FormatError>,
}

#[derive(Serialize)]
struct FailureBlock<'a> {
    failures: &'a [String],
}

impl TapReporter {
    pub fn new(
        sink: Box<dyn Sink>,
        format_ua: Box<dyn FormatUserAgent>,
        format_error: Box<dyn FormatError>,
    ) -> Self {
        Self {
            state: RunState::new(),
            sink,
            format_ua,
            format_error,
        }
    }

    /// Failing specs recorded so far in the current run.
    pub fn failures(&self) -> usize {
        self.state.failures
    }

    pub fn on_run_start(&mut self) -> Result<()> {
        self.state.reset();
        self.sink.write_line("TAP version 13")
    }

    pub fn on_browser_start(&mut self, browser: &Browser) {
        let name = self.format_ua.format_user_agent(&browser.full_name);
        self.state.register(&browser.id, name);
    }

    pub fn spec_success(&mut self, browser: &Browser, spec: &SpecInfo) {
        self.suite_mut(browser).specs.push(SpecResult::passed(spec));
    }

    pub fn spec_failure(&mut self, browser: &Browser, spec: &SpecInfo) {
        let failures = spec
            .log
            .iter()
            .map(|err| self.format_error.format_error(err))
            .collect();
        self.suite_mut(browser)
            .specs
            .push(SpecResult::failed(spec, failures));
        self.state.failures += 1;
    }

    pub fn spec_skipped(&mut self, browser: &Browser, spec: &SpecInfo) {
        self.suite_mut(browser).specs.push(SpecResult::skipped(spec));
        self.state.skips += 1;
    }

    pub fn on_browser_complete(&mut self, browser: &Browser) -> Result<()> {
        // A browser that timed out before its start was recorded has no
        // suite; it is excluded from the stream entirely.
        let Some(suite) = self.state.take_suite(&browser.id) else {
            return Ok(());
        };

        self.sink.write_line(&format!("# {}", suite.name))?;
        for spec in &suite.specs {
            let index = self.state.next_index();
            self.write_result_line(index, &suite.name, spec)?;
            if !spec.failures.is_empty() {
                self.write_failure_block(&spec.failures)?;
            }
        }
        self.state.total += suite.specs.len();
        Ok(())
    }

    pub fn on_run_complete(&mut self) -> Result<()> {
        let total = self.state.total as i64;
        let failures = self.state.failures as i64;
        self.sink.write_line("")?;
        self.sink.write_line(&format!("1..{total}"))?;
        self.sink.write_line(&format!("# tests {total}"))?;
        self.sink.write_line(&format!("# pass {}", total - failures))?;
        if self.state.skips > 0 {
            self.sink.write_line(&format!("# skip {}", self.state.skips))?;
        }
        self.sink.write_line(&format!("# fail {failures}"))?;
        if self.state.failures == 0 {
            self.sink.write_line("# ok")?;
        }
        Ok(())
    }

    /// Spec callbacks assume the browser was registered by
    /// `on_browser_start`; anything else is a host defect.
    fn suite_mut(&mut self, browser: &Browser) -> &mut BrowserSuite {
        self.state
            .suite_mut(&browser.id)
            .expect("spec callback for a browser that never started")
    }

    fn write_result_line(
        &mut self,
        index: usize,
        browser_name: &str,
        spec: &SpecResult,
    ) -> Result<()> {
        let mut line = format!(
            "{} {} {} :: {} :: {}",
            spec.status.as_str(),
            index,
            browser_name,
            spec.suite.join(" "),
            spec.description,
        );
        if spec.skipped {
            line.push_str(" # SKIP");
        }
        self.sink.write_line(&line)
    }

    /// Diagnostic block framed by `  ---` / `  ...`, with the serialized
    /// `failures:` mapping indented four spaces and sequence entries
    /// nested two further under the key.
    fn write_failure_block(&mut self, failures: &[String]) -> Result<()> {
        self.sink.write_line("  ---")?;
        let yaml = serde_yaml::to_string(&FailureBlock { failures })
            .context("failed to serialize failure details")?;
        for (i, line) in yaml.trim_end_matches('\n').lines().enumerate() {
            if line.is_empty() {
                self.sink.write_line("")?;
            } else if i == 0 {
                self.sink.write_line(&format!("    {line}"))?;
            } else {
                self.sink.write_line(&format!("      {line}"))?;
            }
        }
        self.sink.write_line("  ...")
    }
}
