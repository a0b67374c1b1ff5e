//! Configuration for the chat widget.
//!
//! Provides sensible defaults with the ability to customize behavior
//! through builder methods or environment variables.

use std::str::FromStr;

use reqwest::Url;

use crate::error::ConfigError;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
/// Path of the send-message endpoint.
pub const DEFAULT_MESSAGE_PATH: &str = "/api/message";
/// Path of the savings statistics endpoint.
pub const DEFAULT_STATS_PATH: &str = "/api/stats";

/// Environment variable holding the backend origin.
pub const ENV_API_BASE: &str = "SUMCHAT_API_BASE";
/// Environment variable selecting the [`SendPolicy`].
pub const ENV_SEND_POLICY: &str = "SUMCHAT_SEND_POLICY";
/// Environment variable toggling the savings panel.
pub const ENV_SAVINGS_PANEL: &str = "SUMCHAT_SAVINGS_PANEL";

/// How overlapping sends are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendPolicy {
    /// Every send issues its own request; replies are appended in the
    /// order they arrive, which may differ from the order sent.
    #[default]
    Concurrent,
    /// A send while another request is in flight is refused and the
    /// input is left untouched.
    Serialized,
}

impl FromStr for SendPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(SendPolicy::Concurrent),
            "serialized" | "serialised" => Ok(SendPolicy::Serialized),
            other => Err(ConfigError::UnknownSendPolicy(other.to_string())),
        }
    }
}

/// Where the backend endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute origin (plus optional prefix) without trailing slash.
    base: String,
    message_path: String,
    stats_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_API_BASE.to_string(),
            message_path: DEFAULT_MESSAGE_PATH.to_string(),
            stats_path: DEFAULT_STATS_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for a backend at `base` (e.g. the page origin).
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base: parse_base(base)?,
            ..Default::default()
        })
    }

    /// Override the send-message endpoint path.
    pub fn message_path(mut self, path: impl Into<String>) -> Result<Self, ConfigError> {
        self.message_path = validate_path(path.into())?;
        Ok(self)
    }

    /// Override the statistics endpoint path.
    pub fn stats_path(mut self, path: impl Into<String>) -> Result<Self, ConfigError> {
        self.stats_path = validate_path(path.into())?;
        Ok(self)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL of the send-message endpoint.
    pub fn message_url(&self) -> String {
        self.join(&self.message_path)
    }

    /// Absolute URL of the statistics endpoint.
    pub fn stats_url(&self) -> String {
        self.join(&self.stats_path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn parse_base(base: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };
    let url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_string()),
        scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
    }
}

fn validate_path(path: String) -> Result<String, ConfigError> {
    if path.starts_with('/') {
        Ok(path)
    } else {
        Err(ConfigError::InvalidPath(path))
    }
}

/// Everything the widget needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Explicit backend origin; `None` means "use the page origin".
    pub api_base: Option<String>,
    pub send_policy: SendPolicy,
    /// Whether the page shell carries the savings panel elements.
    pub savings_panel: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self {
            api_base: None,
            send_policy: SendPolicy::default(),
            savings_panel: true,
        }
    }

    /// Read overrides from the process environment.
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (process env, compile-time env, tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(base) = lookup(ENV_API_BASE).filter(|b| !b.trim().is_empty()) {
            config.api_base = Some(base);
        }

        if let Some(policy) = lookup(ENV_SEND_POLICY) {
            match policy.parse() {
                Ok(policy) => config.send_policy = policy,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_SEND_POLICY, e),
            }
        }

        if let Some(flag) = lookup(ENV_SAVINGS_PANEL) {
            config.savings_panel = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        config
    }

    /// Set an explicit backend origin.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    pub fn send_policy(mut self, policy: SendPolicy) -> Self {
        self.send_policy = policy;
        self
    }

    /// Resolve the client configuration, falling back to `page_origin`
    /// and finally to [`DEFAULT_API_BASE`].
    pub fn client_config(&self, page_origin: Option<&str>) -> Result<ClientConfig, ConfigError> {
        let base = self
            .api_base
            .as_deref()
            .or(page_origin)
            .unwrap_or(DEFAULT_API_BASE);
        ClientConfig::new(base)
    }
}
