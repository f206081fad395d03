//! Error types for the page model.

use thiserror::Error;

/// A section key that is not one of the page's anchors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0:?}")]
pub struct UnknownSection(pub String);

/// Failures while talking to the rendering environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("{call} failed: {message}")]
    Js { call: &'static str, message: String },
}

/// Invalid site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid parallax rate `{name}`: {value}")]
    ParallaxRate { name: &'static str, value: f64 },

    #[error("intersection thresholds must not be empty")]
    NoThresholds,

    #[error("intersection threshold {0} is outside [0, 1]")]
    Threshold(f64),

    #[error("invalid root margin {0:?}: expected 1 to 4 `px` or `%` lengths")]
    RootMargin(String),
}

/// A contact form submission that a collaborator refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}
