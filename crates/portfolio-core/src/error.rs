//! Error types for the portfolio core

use std::path::PathBuf;

use thiserror::Error;

use crate::form::FormField;

/// Errors raised while loading or validating the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written back out as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The carousel has nothing to rotate through
    #[error("Carousel needs at least one image")]
    NoCarouselImages,

    /// A skill level outside of 0-100
    #[error("Skill '{name}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    /// A repeating timer configured with a zero period
    #[error("Timer '{name}' must have a non-zero period")]
    ZeroPeriod { name: &'static str },
}

/// Reasons a contact form submission is not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(FormField),

    /// The email field does not look like an address
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
