//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Address, site root and reload port come from `[package.metadata.leptos]`
//! and are read separately by `get_configuration`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public origin the site is reached at, for the startup log
    /// Example: https://realconsultantsmortgage.com
    pub public_url: Option<String>,

    /// Whether responses are Brotli/Gzip compressed
    /// Disabled with COMPRESSION=off (or false / 0), e.g. behind a CDN that compresses
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PUBLIC_URL").ok(),
            std::env::var("COMPRESSION").ok(),
        )
    }

    /// Build from raw values; empty strings count as unset
    pub fn from_vars(public_url: Option<String>, compression: Option<String>) -> Self {
        let public_url = public_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let compression = compression
            .map(|value| parse_switch(&value))
            .unwrap_or(true);

        Self {
            public_url,
            compression,
        }
    }

    /// Check if a public URL is configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// URL to report at startup: the public origin, or the local bind address
    pub fn display_url(&self, site_addr: &str) -> String {
        match &self.public_url {
            Some(url) => url.clone(),
            None => format!("http://{site_addr}"),
        }
    }
}

/// Off switches are explicit; anything else keeps the feature on
fn parse_switch(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_vars(None, None);
        assert!(config.public_url.is_none());
        assert!(config.compression);
        assert!(!config.has_public_url());
    }

    #[test]
    fn test_public_url_trailing_slash_trimmed() {
        let config = Config::from_vars(Some("https://example.com/".to_string()), None);
        assert_eq!(config.public_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_empty_public_url_is_unset() {
        let config = Config::from_vars(Some("   ".to_string()), None);
        assert!(!config.has_public_url());
    }

    #[test]
    fn test_compression_switch() {
        for off in ["0", "false", "OFF", " no "] {
            assert!(!Config::from_vars(None, Some(off.to_string())).compression, "{off}");
        }
        for on in ["1", "true", "on", "yes", ""] {
            assert!(Config::from_vars(None, Some(on.to_string())).compression, "{on}");
        }
    }

    #[test]
    fn test_display_url() {
        let local = Config::from_vars(None, None);
        assert_eq!(local.display_url("127.0.0.1:3000"), "http://127.0.0.1:3000");

        let public = Config::from_vars(Some("https://example.com".to_string()), None);
        assert_eq!(public.display_url("127.0.0.1:3000"), "https://example.com");
    }
}
