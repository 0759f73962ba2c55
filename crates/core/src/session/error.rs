use thiserror::Error;

/// Errors that can occur when loading the session fixture.
///
/// Loading is all-or-nothing: a single malformed record rejects the whole
/// fixture rather than letting an invalid date reach the store.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("malformed session fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_error_display_includes_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FixtureError::Parse(cause);
        assert!(error.to_string().starts_with("malformed session fixture:"));
    }
}
