use crate::ChatError;
use secrecy::SecretString;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ChatError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_key = get("COACH_CHAT_API_KEY")
            .ok_or_else(|| ChatError::Config("COACH_CHAT_API_KEY missing".into()))?;
        let base_url = get("COACH_CHAT_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = get("COACH_CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let timeout = get("COACH_CHAT_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Ok(Self {
            api_key: SecretString::new(api_key.into()),
            base_url,
            model,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_missing_api_key() {
        let get = |k: &str| match k {
            "COACH_CHAT_API_KEY" => None,
            "COACH_CHAT_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(res.is_err());
    }

    #[test]
    fn from_env_reads_values_and_defaults() {
        let get = |k: &str| match k {
            "COACH_CHAT_API_KEY" => Some("sekrit".into()),
            "COACH_CHAT_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "http://localhost");
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn from_env_parses_timeout_override() {
        let get = |k: &str| match k {
            "COACH_CHAT_API_KEY" => Some("sekrit".into()),
            "COACH_CHAT_TIMEOUT_SECS" => Some("3".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }
}
