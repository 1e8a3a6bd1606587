//! Configuration validation.

use crate::config::Config;
use crate::constants::threshold;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if !(threshold::MIN..=threshold::MAX).contains(&defaults.loudness_threshold) {
        return Err(Error::ConfigValidation {
            message: format!(
                "loudness_threshold must be between {} and {}, got {}",
                threshold::MIN,
                threshold::MAX,
                defaults.loudness_threshold
            ),
        });
    }

    if defaults.formats.is_empty() {
        return Err(Error::ConfigValidation {
            message: "formats must name at least one output format".to_string(),
        });
    }

    Ok(())
}
