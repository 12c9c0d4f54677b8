use crate::error::Error;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.porkbun.com/api/json/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    /// Deadline applied to each HTTP request.
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Config::default();
        if let Some(api_url) = var("PORKBUN_API_URL") {
            config = config.with_api_url(api_url);
        }
        if let Some(raw) = var("PORKBUN_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORKBUN_TIMEOUT_SECS: {raw}")))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Points the client at another base URL, e.g. a local mock server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_api_url_strips_trailing_slash() {
        let config = Config::default().with_api_url("http://127.0.0.1:8080/");
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_vars_defaults() {
        assert_eq!(Config::from_vars(vars(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_from_vars_trims_url_and_reads_timeout() {
        let config = Config::from_vars(vars(&[
            ("PORKBUN_API_URL", "http://localhost:9000/api/"),
            ("PORKBUN_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_vars_invalid_timeout() {
        let result = Config::from_vars(vars(&[("PORKBUN_TIMEOUT_SECS", "soon")]));
        assert_matches!(result, Err(Error::Config(ref m)) if m.contains("soon"));
    }
}
