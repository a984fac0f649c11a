use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

// Read once at startup, never mutated afterwards
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub hf_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, so tests don't
    /// have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let api_url = lookup("HF_API_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // An empty token is the same as no token
        let hf_token = lookup("HF_TOKEN").filter(|t| !t.is_empty());

        Ok(Self {
            host,
            port,
            api_url,
            hf_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.hf_token.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("HF_API_URL", "http://localhost:1234/v1/chat/completions"),
            ("HF_TOKEN", "hf_secret"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.api_url, "http://localhost:1234/v1/chat/completions");
        assert_eq!(config.hf_token.as_deref(), Some("hf_secret"));
    }

    #[test]
    fn empty_token_means_unauthenticated() {
        let config = Config::from_lookup(lookup_from(&[("HF_TOKEN", "")])).unwrap();
        assert!(config.hf_token.is_none());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));
    }
}
