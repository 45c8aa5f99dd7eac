//! Incoming chat queries.

use serde::{Deserialize, Serialize};

/// A raw chat message, as received from the caller.
///
/// Created per request and discarded once resolution returns. The message
/// may be empty or whitespace-only; the cascade answers those with a
/// prompt-for-input response rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    message: String,
}

impl ChatQuery {
    /// Create a new query from a raw message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        ChatQuery {
            message: message.into(),
        }
    }

    /// The raw message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for ChatQuery {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ChatQuery {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_construction() {
        let query = ChatQuery::new("tienen stock de mouse");
        assert_eq!(query.message(), "tienen stock de mouse");

        let query: ChatQuery = "hola".into();
        assert_eq!(query.message(), "hola");
    }
}
