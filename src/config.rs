//! Runtime settings, read from the environment (and `.env` when present).

use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1/pdf/process";
/// Matches the extraction service's own upload limit.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const ENV_API_URL: &str = "AUTOFORM_API_URL";
const ENV_MAX_FILE_SIZE: &str = "AUTOFORM_MAX_FILE_SIZE";
const ENV_TIMEOUT_SECS: &str = "AUTOFORM_TIMEOUT_SECS";
const ENV_DEBUG: &str = "AUTOFORM_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Endpoint that accepts the multipart document upload.
    pub api_url: String,
    /// Largest document (bytes) the client will send.
    pub max_file_size: u64,
    pub timeout: Duration,
    /// Raises the default log level to `debug`.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            settings.api_url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_MAX_FILE_SIZE) {
            settings.max_file_size = parse_u64(ENV_MAX_FILE_SIZE, &raw)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            settings.timeout = Duration::from_secs(parse_u64(ENV_TIMEOUT_SECS, &raw)?);
        }
        if let Some(raw) = get(ENV_DEBUG) {
            settings.debug = parse_bool(ENV_DEBUG, &raw)?;
        }

        Ok(settings)
    }

    /// Apply a CLI `--api-url` override.
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        self
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| AppError::usage(format!("Invalid {key} '{raw}': {e}")))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::usage(format!("Invalid {key} '{raw}': expected true or false"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::EXIT_USAGE;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.max_file_size, 10_485_760);
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("AUTOFORM_API_URL", " http://extract:9000/process "),
            ("AUTOFORM_MAX_FILE_SIZE", "2048"),
            ("AUTOFORM_TIMEOUT_SECS", "5"),
            ("AUTOFORM_DEBUG", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(settings.api_url, "http://extract:9000/process");
        assert_eq!(settings.max_file_size, 2048);
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert!(settings.debug);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let settings = Settings::from_lookup(lookup(&[("AUTOFORM_MAX_FILE_SIZE", "  ")])).unwrap();
        assert_eq!(settings.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn invalid_values_are_usage_errors() {
        let err = Settings::from_lookup(lookup(&[("AUTOFORM_MAX_FILE_SIZE", "10MB")])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert!(err.message().contains("AUTOFORM_MAX_FILE_SIZE"));

        let err = Settings::from_lookup(lookup(&[("AUTOFORM_DEBUG", "maybe")])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn cli_override_wins() {
        let settings = Settings::default().with_api_url(Some("http://other/process"));
        assert_eq!(settings.api_url, "http://other/process");
        let settings = Settings::default().with_api_url(None);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }
}
