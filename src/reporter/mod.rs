pub mod tap;

pub use tap::TapReporter;

/// Maps a browser's full user agent string to a short display label.
///
/// Label derivation is the host's concern; the renderer only consumes
/// the result. Implemented for any `Fn(&str) -> String`.
pub trait FormatUserAgent {
    fn format_user_agent(&self, full_name: &str) -> String;
}

impl<F> FormatUserAgent for F
where
    F: Fn(&str) -> String,
{
    fn format_user_agent(&self, full_name: &str) -> String {
        self(full_name)
    }
}

/// Renders one raw error value from a failing spec's log into a display
/// string. No indentation is applied at this stage.
pub trait FormatError {
    fn format_error(&self, error: &serde_json::Value) -> String;
}

impl<F> FormatError for F
where
    F: Fn(&serde_json::Value) -> String,
{
    fn format_error(&self, error: &serde_json::Value) -> String {
        self(error)
    }
}

/// Fallback user-agent formatter: the full name is already the label.
pub fn verbatim_user_agent(full_name: &str) -> String {
    full_name.to_string()
}

/// Fallback error formatter: string errors pass through unchanged,
/// anything else renders as compact JSON.
pub fn plain_error(error: &serde_json::Value) -> String {
    match error.as_str() {
        Some(s) => s.to_string(),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_user_agent_passes_through() {
        assert_eq!(verbatim_user_agent("Chrome 90"), "Chrome 90");
    }

    #[test]
    fn plain_error_unwraps_strings() {
        assert_eq!(plain_error(&serde_json::json!("boom")), "boom");
    }

    #[test]
    fn plain_error_renders_objects_as_json() {
        assert_eq!(
            plain_error(&serde_json::json!({"message": "boom"})),
            r#"{"message":"boom"}"#
        );
    }
}
