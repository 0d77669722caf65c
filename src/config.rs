use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Controls where the TAP stream is written.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the report file, relative to the working directory.
    /// Unset means the stream goes to stdout.
    /// Example: "reports/tap.txt"
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load `tapline.toml` from the working directory, falling back to
    /// defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("tapline.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }
}
