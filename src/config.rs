//! Client configuration: where the API lives and who is submitting.

/// Base path of the JSON API.
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Identity attached to submissions until real sessions exist.
pub const PLACEHOLDER_USER_ID: u64 = 1;

/// Settings shared by every handler on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub user_id: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_id: PLACEHOLDER_USER_ID,
        }
    }
}

impl ClientConfig {
    /// Build a config from optional overrides, keeping defaults for
    /// anything absent, blank or unparsable.
    ///
    /// In the browser the overrides come from `data-api-base` and
    /// `data-user-id` on `<body>`.
    pub fn from_overrides(api_base: Option<&str>, user_id: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.to_string();
        }
        if let Some(id) = user_id.and_then(|id| id.trim().parse::<u64>().ok()) {
            config.user_id = id;
        }
        config
    }

    /// Join the API base with an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.user_id, 1);
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let config = ClientConfig::from_overrides(Some("https://deli.example/api/v2/"), None);
        assert_eq!(config.url("/recipes"), "https://deli.example/api/v2/recipes");
        assert_eq!(config.url("users/register"), "https://deli.example/api/v2/users/register");
    }

    #[test]
    fn test_bad_overrides_keep_defaults() {
        let config = ClientConfig::from_overrides(Some("   "), Some("guest"));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_user_id_override() {
        let config = ClientConfig::from_overrides(None, Some(" 42 "));
        assert_eq!(config.user_id, 42);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
