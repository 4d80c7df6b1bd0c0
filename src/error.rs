//! Typed errors kept in query state.

/// A failed fetch, captured for display instead of being propagated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
}

impl QueryError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for QueryError {
    fn from(e: anyhow::Error) -> Self {
        // Alternate format keeps the context chain on one line.
        Self {
            message: format!("{:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_keeps_context_chain() {
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"));
        let err = err.context("Failed to fetch markets").unwrap_err();

        let query_err = QueryError::from(err);
        assert_eq!(query_err.message(), "Failed to fetch markets: connection refused");
        assert_eq!(query_err.to_string(), query_err.message());
    }
}
