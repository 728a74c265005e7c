use std::env;

/// Client configuration, read from the environment with sensible defaults.
///
/// The dashboard talks to one fixed API host and one fixed image host; both
/// are injectable here so staging and test environments need no code change.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the affiliate REST API, without trailing slash
    pub api_base_url: String,
    /// Base URL of the image host serving profile uploads
    pub image_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env::var("DASHBOARD_API_URL")
            .unwrap_or_else(|_| "https://api.cashlink.example".to_string());

        let image_base_url = env::var("DASHBOARD_IMAGE_URL")
            .unwrap_or_else(|_| api_base_url.clone());

        let request_timeout_secs = env::var("DASHBOARD_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "DASHBOARD_REQUEST_TIMEOUT_SECS must be a valid number")?;

        let config = Self {
            api_base_url,
            image_base_url,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.api_base_url.starts_with("http") {
            return Err("api_base_url must be an http(s) URL".to_string());
        }

        if self.request_timeout_secs < 1 || self.request_timeout_secs > 120 {
            return Err("request_timeout_secs must be between 1 and 120".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.cashlink.example".to_string(),
            image_base_url: "https://api.cashlink.example".to_string(),
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = Config {
            api_base_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
