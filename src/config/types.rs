//! Configuration type definitions.

use crate::constants::{DEFAULT_GAP_THRESHOLD, DEFAULT_LOUDNESS_THRESHOLD, DEFAULT_MIN_DURATION};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default analysis settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// RMS loudness threshold (fraction of full scale, 0.0-1.0).
    pub loudness_threshold: f32,

    /// Minimum range duration in seconds.
    pub min_duration: u64,

    /// Maximum gap in seconds between loud frames of one range.
    pub gap_threshold: u64,

    /// Output formats.
    pub formats: Vec<OutputFormat>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            loudness_threshold: DEFAULT_LOUDNESS_THRESHOLD,
            min_duration: DEFAULT_MIN_DURATION,
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            formats: vec![OutputFormat::Json],
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"shouting_ranges": [...]}` JSON document.
    Json,
    /// Audacity label track.
    Audacity,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Audacity => write!(f, "audacity"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "audacity" | "labels" => Ok(Self::Audacity),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert_eq!(
            "audacity".parse::<OutputFormat>().ok(),
            Some(OutputFormat::Audacity)
        );
        assert_eq!(
            "labels".parse::<OutputFormat>().ok(),
            Some(OutputFormat::Audacity)
        );
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Audacity.to_string(), "audacity");
    }

    #[test]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.loudness_threshold, 0.1);
        assert_eq!(defaults.min_duration, 3);
        assert_eq!(defaults.gap_threshold, 5);
        assert_eq!(defaults.formats, vec![OutputFormat::Json]);
    }
}
