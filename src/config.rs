use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::{error::LagError, lag::Lag};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub lag: LagSettings,
    #[serde(default = "default_samples")]
    pub samples: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct LagSettings {
    pub minimum_ms: u64,
    #[serde(default)]
    pub maximum_ms: Option<u64>,
}

fn default_samples() -> usize {
    5
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LagError> {
        let bytes = tokio::fs::read(path).await?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, LagError> {
        let config: Config = serde_json::from_slice(bytes)?;
        // Reject bad windows at load time, not on first use.
        Lag::try_from(config.lag)?;
        Ok(config)
    }

    pub fn lag(&self) -> Result<Lag, LagError> {
        Lag::try_from(self.lag)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lag: LagSettings {
                minimum_ms: 10,
                maximum_ms: Some(20),
            },
            samples: default_samples(),
        }
    }
}

impl TryFrom<LagSettings> for Lag {
    type Error = LagError;

    fn try_from(settings: LagSettings) -> Result<Self, Self::Error> {
        Lag::window(
            Duration::from_millis(settings.minimum_ms),
            settings.maximum_ms.map(Duration::from_millis),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parses_a_jittered_window() {
        let config =
            Config::from_slice(br#"{"lag": {"minimum_ms": 10, "maximum_ms": 20}, "samples": 3}"#)
                .unwrap();
        assert_eq!(config.samples, 3);
        assert_eq!(
            config.lag().unwrap(),
            Lag::between(Duration::from_millis(10), Duration::from_millis(20)).unwrap()
        );
    }

    #[test]
    fn missing_maximum_means_fixed_lag() {
        let config = Config::from_slice(br#"{"lag": {"minimum_ms": 7}}"#).unwrap();
        assert_eq!(config.samples, 5);
        assert_eq!(config.lag().unwrap(), Lag::fixed(Duration::from_millis(7)));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let result = Config::from_slice(br#"{"lag": {"minimum_ms": 20, "maximum_ms": 10}}"#);
        assert!(matches!(result, Err(LagError::InvalidArgument { .. })));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let result = Config::from_slice(b"{\"lag\": ");
        assert!(matches!(result, Err(LagError::Config(_))));
    }

    #[test]
    fn default_config_is_valid() {
        let lag = Config::default().lag().unwrap();
        assert_eq!(lag.minimum(), Duration::from_millis(10));
        assert_eq!(lag.maximum(), Some(Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"lag": {"minimum_ms": 1, "maximum_ms": 2}, "samples": 9}"#)
            .unwrap();
        file.flush().unwrap();

        let config = Config::load(file.path()).await.unwrap();
        assert_eq!(config.samples, 9);
        assert_eq!(config.lag.maximum_ms, Some(2));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.json")).await;
        assert!(matches!(result, Err(LagError::Io(_))));
    }
}
