//! Validator configuration parsed from environment variables.
//!
//! The only tunable is the maximum parenthesis nesting depth. It can be
//! overridden via the `CMDB_FILTER_MAX_DEPTH` environment variable.

use std::env;

use crate::errors::ConfigError;

/// Default maximum nesting depth of bracketed and negated statements.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable overriding [`FilterConfig::max_depth`].
pub const MAX_DEPTH_VAR: &str = "CMDB_FILTER_MAX_DEPTH";

/// Configuration for the expression validator.
///
/// # Environment Variables
///
/// - `CMDB_FILTER_MAX_DEPTH`: maximum number of nested parentheses accepted
///   before an expression is rejected as too complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Maximum parenthesis nesting depth.
    pub max_depth: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FilterConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if an environment variable
    /// contains an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if a looked-up value is not a
    /// positive integer.
    ///
    /// # Examples
    /// ```
    /// use cmdb_filter::FilterConfig;
    /// let config = FilterConfig::from_lookup(|_| Some("8".to_string()))
    ///     .expect("example value is valid");
    /// assert_eq!(config.max_depth, 8);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_depth = lookup(MAX_DEPTH_VAR)
            .map_or(Ok(DEFAULT_MAX_DEPTH), |val| parse_max_depth(&val))?;
        Ok(Self { max_depth })
    }

    /// Apply an optional override to an existing configuration.
    #[must_use]
    pub fn apply_overrides(mut self, max_depth: Option<usize>) -> Self {
        if let Some(depth) = max_depth {
            self.max_depth = depth;
        }
        self
    }

    /// Create a new configuration with the specified nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

fn parse_max_depth(val: &str) -> Result<usize, ConfigError> {
    match val.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ConfigError::InvalidConfig(format!(
            "invalid max depth '{val}', expected a positive integer"
        ))),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_uses_documented_depth() {
        assert_eq!(FilterConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn missing_variable_falls_back_to_default() {
        let config = FilterConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn lookup_reads_the_documented_key() {
        let config = FilterConfig::from_lookup(|key| {
            (key == "CMDB_FILTER_MAX_DEPTH").then(|| " 12 ".to_string())
        })
        .unwrap();
        assert_eq!(config.max_depth, 12);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("deep")]
    #[case("")]
    fn rejects_non_positive_depths(#[case] raw: &str) {
        let err = FilterConfig::from_lookup(|_| Some(raw.to_string())).unwrap_err();
        assert!(err.to_string().contains("invalid max depth"));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = FilterConfig::default().apply_overrides(Some(3));
        assert_eq!(config.max_depth, 3);

        let config = FilterConfig::default().apply_overrides(None);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn with_max_depth_builder() {
        assert_eq!(FilterConfig::default().with_max_depth(2).max_depth, 2);
    }
}
