//! Connection configuration for the search engine client.

use std::env;

/// Environment variable holding the search engine URL.
pub const NODE_ENV: &str = "ELASTICSEARCH_NODE";

/// Environment variable holding the basic-auth username.
pub const USERNAME_ENV: &str = "ELASTICSEARCH_USERNAME";

/// Environment variable holding the basic-auth password.
pub const PASSWORD_ENV: &str = "ELASTICSEARCH_PASSWORD";

/// Default search engine URL.
pub const DEFAULT_NODE: &str = "http://localhost:9200";

/// Basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters needed to build a search engine client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Search engine URL (e.g., "http://localhost:9200").
    pub node: String,
    /// Basic-auth credentials, `None` for anonymous access.
    pub credentials: Option<Credentials>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            node: DEFAULT_NODE.to_string(),
            credentials: None,
        }
    }
}

impl ConnectionConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTICSEARCH_NODE`: search engine URL (default: http://localhost:9200)
    /// - `ELASTICSEARCH_USERNAME` / `ELASTICSEARCH_PASSWORD`: basic auth, only
    ///   applied when both are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let node = lookup(NODE_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_NODE.to_string());

        let username = lookup(USERNAME_ENV).filter(|value| !value.is_empty());
        let password = lookup(PASSWORD_ENV).filter(|value| !value.is_empty());

        // One without the other means anonymous access.
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Self { node, credentials }
    }

    /// Set basic-auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}
