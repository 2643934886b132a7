//! Client configuration: server URL and the current bearer token.

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_server_url(DEFAULT_SERVER_URL)
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the server URL from `CLIENT_API_URL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("CLIENT_API_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::with_server_url(url),
            None => Self::default(),
        }
    }

    /// Configuration for a given server URL (trailing slashes are dropped)
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { server_url, token: None }
    }

    /// Set the bearer token (`Bearer <jwt>`, as returned by login)
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
