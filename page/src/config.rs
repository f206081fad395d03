//! Site configuration.
//!
//! The landing app embeds `site.toml` at build time and parses it with
//! [`SiteConfig::from_toml_str`]. Every key is optional; missing keys keep
//! the defaults below. A rejected file means the defaults are used.

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub parallax: ParallaxConfig,
    pub observer: ObserverConfig,
    /// Max tracing level for the browser console (`trace` .. `error`)
    pub log_level: String,
}

/// Names and static asset paths
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub logo: String,
    pub logo_width: u32,
    pub logo_height: u32,
    /// Background texture for the second hero parallax layer
    pub texture: String,
    pub copyright: String,
}

/// Fraction of the page scroll applied to each hero background layer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub gradient_rate: f64,
    pub texture_rate: f64,
}

/// Options handed to the viewport observer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub thresholds: Vec<f64>,
    /// CSS margin applied to the root viewport; negative bottom trims it
    pub root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            parallax: ParallaxConfig::default(),
            observer: ObserverConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Green Innovations Institute".to_string(),
            logo: "/Logo.png".to_string(),
            logo_width: 160,
            logo_height: 40,
            texture: "/abstract-green-nature-pattern.jpg".to_string(),
            copyright: "2024 Green Innovations Institute. Building a sustainable future through innovation and research.".to_string(),
        }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            gradient_rate: 0.5,
            texture_rate: 0.3,
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            thresholds: vec![0.1, 0.3, 0.5],
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("gradient_rate", self.parallax.gradient_rate),
            ("texture_rate", self.parallax.texture_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() {
                return Err(ConfigError::ParallaxRate { name, value });
            }
        }

        if self.observer.thresholds.is_empty() {
            return Err(ConfigError::NoThresholds);
        }
        if let Some(&bad) = self
            .observer
            .thresholds
            .iter()
            .find(|t| !(0.0..=1.0).contains(*t))
        {
            return Err(ConfigError::Threshold(bad));
        }
        if !is_root_margin(&self.observer.root_margin) {
            return Err(ConfigError::RootMargin(self.observer.root_margin.clone()));
        }
        Ok(())
    }

    /// Console log level; unknown names mean `info`.
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

/// CSS margin shorthand as `IntersectionObserver` accepts it: one to four
/// lengths, each in `px` or `%`.
fn is_root_margin(margin: &str) -> bool {
    let tokens: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&tokens.len())
        && tokens.iter().all(|token| {
            token
                .strip_suffix("px")
                .or_else(|| token.strip_suffix('%'))
                .and_then(|number| number.parse::<f64>().ok())
                .is_some_and(f64::is_finite)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.parallax.gradient_rate, 0.5);
        assert_eq!(config.parallax.texture_rate, 0.3);
        assert_eq!(config.observer.thresholds, vec![0.1, 0.3, 0.5]);
        assert_eq!(config.observer.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.brand.logo, "/Logo.png");
        assert_eq!(config.max_level(), Level::INFO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
log_level = "debug"

[parallax]
texture_rate = 0.2

[brand]
name = "Green Innovations"
"#,
        )
        .expect("valid config");

        assert_eq!(config.parallax.gradient_rate, 0.5);
        assert_eq!(config.parallax.texture_rate, 0.2);
        assert_eq!(config.brand.name, "Green Innovations");
        assert_eq!(config.brand.logo_width, 160);
        assert_eq!(config.max_level(), Level::DEBUG);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = SiteConfig::from_toml_str("[observer]\nthresholds = [0.1, 1.5]")
            .expect_err("threshold above 1");
        assert!(matches!(err, ConfigError::Threshold(t) if t == 1.5));
    }

    #[test]
    fn test_rejects_empty_thresholds() {
        let err = SiteConfig::from_toml_str("[observer]\nthresholds = []")
            .expect_err("no thresholds");
        assert!(matches!(err, ConfigError::NoThresholds));
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        let err = SiteConfig::from_toml_str("[parallax]\ngradient_rate = nan")
            .expect_err("nan rate");
        assert!(matches!(
            err,
            ConfigError::ParallaxRate {
                name: "gradient_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_root_margin() {
        for margin in ["fifty pixels", "", "10", "1px 2px 3px 4px 5px", "-50em", "px"] {
            let toml = format!("[observer]\nroot_margin = {margin:?}");
            let err = SiteConfig::from_toml_str(&toml).expect_err(margin);
            assert!(matches!(err, ConfigError::RootMargin(ref m) if m == margin));
        }
    }

    #[test]
    fn test_accepts_root_margin_shorthands() {
        for margin in ["0px", "10% 0px", "0px 0px -50px", "-10px 5% 0px 2.5px"] {
            let toml = format!("[observer]\nroot_margin = {margin:?}");
            let config = SiteConfig::from_toml_str(&toml).expect(margin);
            assert_eq!(config.observer.root_margin, margin);
        }
    }

    #[test]
    fn test_unknown_log_level_means_info() {
        let config = SiteConfig {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(config.max_level(), Level::INFO);
    }
}
