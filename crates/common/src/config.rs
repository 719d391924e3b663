//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every value has a default,
//! so an empty environment is valid; contact overrides fall back to the
//! company details shipped with the catalog.

use std::env;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default hero auto-advance interval
pub const DEFAULT_HERO_INTERVAL_MS: u64 = 6000;
/// Default number of hero slides taken from the head of the catalog
pub const DEFAULT_HERO_SLIDES: usize = 4;
/// Default number of featured projects on the home page
pub const DEFAULT_FEATURED_PROJECTS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Overrides the company WhatsApp number used for deep links
    pub whatsapp: Option<String>,
    /// Overrides the company phone number used for `tel:` links
    pub phone: Option<String>,

    /// Hero carousel
    pub hero_interval_ms: u64,
    pub hero_slides: usize,
    pub featured_projects: usize,

    /// Runtime configuration
    pub rust_log: String,
    pub log_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp: None,
            phone: None,
            hero_interval_ms: DEFAULT_HERO_INTERVAL_MS,
            hero_slides: DEFAULT_HERO_SLIDES,
            featured_projects: DEFAULT_FEATURED_PROJECTS,
            rust_log: "ammaar=info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let whatsapp = env::var("COMPANY_WHATSAPP").ok();
        if let Some(number) = &whatsapp {
            if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(anyhow::anyhow!(
                    "COMPANY_WHATSAPP must contain digits only, got '{}'",
                    number
                ));
            }
        }

        let hero_interval_ms = parse_or("HERO_INTERVAL_MS", defaults.hero_interval_ms)?;
        if hero_interval_ms == 0 {
            return Err(anyhow::anyhow!("HERO_INTERVAL_MS must be greater than zero"));
        }

        let config = Self {
            whatsapp,
            phone: env::var("COMPANY_PHONE").ok(),
            hero_interval_ms,
            hero_slides: parse_or("HERO_SLIDES", defaults.hero_slides)?,
            featured_projects: parse_or("FEATURED_PROJECTS", defaults.featured_projects)?,
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        };

        Ok(config)
    }

    /// Hero auto-advance period
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid ('{}'): {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "COMPANY_WHATSAPP",
            "COMPANY_PHONE",
            "HERO_INTERVAL_MS",
            "HERO_SLIDES",
            "FEATURED_PROJECTS",
            "LOG_FORMAT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.whatsapp, None);
        assert_eq!(config.phone, None);
        assert_eq!(config.hero_interval_ms, 6000);
        assert_eq!(config.hero_slides, 4);
        assert_eq!(config.featured_projects, 3);
        assert_eq!(config.hero_interval(), Duration::from_secs(6));
    }

    #[test]
    #[serial]
    fn test_config_overrides() {
        clear_env();
        env::set_var("HERO_INTERVAL_MS", "2500");
        env::set_var("COMPANY_WHATSAPP", "911234567890");
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config.hero_interval_ms, 2500);
        assert_eq!(config.whatsapp.as_deref(), Some("911234567890"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_interval() {
        clear_env();
        env::set_var("HERO_INTERVAL_MS", "0");
        assert!(SiteConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_values() {
        clear_env();
        env::set_var("HERO_SLIDES", "four");
        let err = SiteConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("HERO_SLIDES"));
        clear_env();

        env::set_var("COMPANY_WHATSAPP", "+91 98765");
        assert!(SiteConfig::from_env().is_err());
        clear_env();
    }
}
