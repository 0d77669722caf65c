use std::collections::HashMap;

use super::result::SpecResult;

/// Specs recorded for one browser, in completion order.
#[derive(Debug)]
pub struct BrowserSuite {
    /// Short display label produced by the user-agent formatter.
    pub name: String,
    pub specs: Vec<SpecResult>,
}

impl BrowserSuite {
    pub fn new(name: String) -> Self {
        Self {
            name,
            specs: Vec::new(),
        }
    }
}

/// Accumulator for a single run. Created at run start, discarded at run end.
///
/// The test index is global across browsers: it advances once per emitted
/// result line, never per browser.
#[derive(Debug, Default)]
pub struct RunState {
    suites: HashMap<String, BrowserSuite>,
    pub total: usize,
    pub failures: usize,
    pub skips: usize,
    next_index: usize,
}

impl RunState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.reset();
        state
    }

    /// Clear all suites and counters; the index restarts at 1.
    pub fn reset(&mut self) {
        self.suites.clear();
        self.total = 0;
        self.failures = 0;
        self.skips = 0;
        self.next_index = 1;
    }

    /// Register an empty suite for a browser that has started reporting.
    pub fn register(&mut self, browser_id: &str, name: String) {
        self.suites
            .insert(browser_id.to_string(), BrowserSuite::new(name));
    }

    pub fn suite_mut(&mut self, browser_id: &str) -> Option<&mut BrowserSuite> {
        self.suites.get_mut(browser_id)
    }

    /// Detach a browser's suite for rendering. None when the browser was
    /// never registered (it timed out before start was observed).
    pub fn take_suite(&mut self, browser_id: &str) -> Option<BrowserSuite> {
        self.suites.remove(browser_id)
    }

    /// Hand out the next global 1-based test index.
    pub fn next_index(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }
}
