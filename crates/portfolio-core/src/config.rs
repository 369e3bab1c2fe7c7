//! Site configuration
//!
//! Every field has a default equal to the content the site ships with, so a
//! config file only needs the parts it wants to change.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{ConfigError, ConfigResult};
use crate::notify::ToastTimeline;
use crate::profile::{default_social_links, Profile, SocialLink};

/// Timer durations, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long the loading splash stays up after mount
    pub splash_ms: u64,
    /// Period of the about-section carousel
    pub carousel_interval_ms: u64,
    /// Delay between submit and the toast sliding in
    pub toast_enter_ms: u64,
    /// How long the toast stays fully visible
    pub toast_visible_ms: u64,
    /// Exit transition before the toast is removed
    pub toast_exit_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_ms: 3000,
            carousel_interval_ms: 3000,
            toast_enter_ms: 100,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
        }
    }
}

impl TimingConfig {
    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    /// Returns the enter/exit timeline used by the toast notifier.
    pub fn toast_timeline(&self) -> ToastTimeline {
        ToastTimeline {
            enter: Duration::from_millis(self.toast_enter_ms),
            exit: Duration::from_millis(self.toast_exit_ms),
        }
    }

    /// Checks the timer invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        // tokio intervals panic on a zero period
        if self.carousel_interval_ms == 0 {
            return Err(ConfigError::ZeroPeriod { name: "carousel" });
        }
        Ok(())
    }

    /// Create a config with every timer shortened, for demos and previews
    pub fn quick() -> Self {
        Self {
            splash_ms: 500,
            carousel_interval_ms: 1000,
            ..Self::default()
        }
    }
}

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Start in dark mode
    pub start_dark: bool,

    /// Owner profile and contact details
    pub profile: Profile,

    /// Timer durations
    pub timing: TimingConfig,

    /// Skills, projects and carousel images
    pub catalog: Catalog,

    /// "Follow Me" links, in display order
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            start_dark: false,
            profile: Profile::default(),
            timing: TimingConfig::default(),
            catalog: Catalog::default(),
            social: default_social_links(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks the invariants the view relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        self.timing.validate()?;
        self.catalog.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.start_dark);
        assert_eq!(config.social.len(), 5);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let toml = r#"
            start_dark = true

            [profile]
            name = "Jane Doe"

            [timing]
            carousel_interval_ms = 5000
        "#;
        let config = SiteConfig::from_toml_str(toml).unwrap();

        assert!(config.start_dark);
        assert_eq!(config.profile.name, "Jane Doe");
        assert_eq!(config.profile.headline, Profile::default().headline);
        assert_eq!(config.timing.carousel_interval_ms, 5000);
        assert_eq!(config.timing.splash_ms, 3000);
        assert_eq!(config.catalog, Catalog::default());
    }

    #[test]
    fn test_custom_carousel_images() {
        let toml = r#"
            [catalog]
            carousel_images = ["a.jpg", "b.jpg"]
        "#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.catalog.image_count(), 2);
        // Other lists keep their defaults
        assert_eq!(config.catalog.skills.len(), 7);
    }

    #[test]
    fn test_empty_carousel_rejected() {
        let toml = r#"
            [catalog]
            carousel_images = []
        "#;
        assert!(matches!(
            SiteConfig::from_toml_str(toml),
            Err(ConfigError::NoCarouselImages)
        ));
    }

    #[test]
    fn test_zero_carousel_period_rejected() {
        let toml = r#"
            [timing]
            carousel_interval_ms = 0
        "#;
        assert!(matches!(
            SiteConfig::from_toml_str(toml),
            Err(ConfigError::ZeroPeriod { name: "carousel" })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            SiteConfig::from_toml_str("start_dark = maybe"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_dumped_config_loads_back() {
        let config = SiteConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nemail = \"jane@example.com\"").unwrap();

        let config = SiteConfig::load_from(file.path()).unwrap();
        assert_eq!(config.profile.email, "jane@example.com");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load_from(Path::new("/nonexistent/portfolio.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_toast_timeline_from_timing() {
        let timeline = TimingConfig::default().toast_timeline();
        assert_eq!(timeline.enter, Duration::from_millis(100));
        assert_eq!(timeline.exit, Duration::from_millis(300));
    }
}
