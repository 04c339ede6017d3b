use std::{env, str::FromStr, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::language::Language;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Destination of the contact form handoff
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_contact_address")]
    pub address: String,
    #[serde(default = "default_webmail_host")]
    pub webmail_host: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: default_contact_address(),
            webmail_host: default_webmail_host(),
        }
    }
}

impl ContactConfig {
    pub fn mailbox(&self) -> portfolio_contact::Mailbox {
        portfolio_contact::Mailbox {
            address: self.address.to_owned(),
            webmail_host: self.webmail_host.to_owned(),
        }
    }
}

fn default_contact_address() -> String {
    "ridoan.zisan@gmail.com".to_string()
}

fn default_webmail_host() -> String {
    "mail.google.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComposerConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl ComposerConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn default_latency_ms() -> u64 {
    portfolio_composer::SIMULATED_LATENCY.as_millis() as u64
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.contact.address.contains('@') {
            return Err(format!(
                "Contact address '{}' is not an e-mail address",
                self.contact.address
            ));
        }
        if self.contact.webmail_host.trim().is_empty() {
            return Err("Contact webmail_host must not be empty".to_string());
        }
        if Language::from_str(&self.site.default_language).is_err() {
            return Err(format!(
                "Unsupported default language '{}'",
                self.site.default_language
            ));
        }
        Ok(())
    }

    pub fn default_language(&self) -> Language {
        Language::from_str(&self.site.default_language).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            site: SiteConfig::default(),
            contact: ContactConfig::default(),
            composer: ComposerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().composer.latency(), Duration::from_secs(2));
        assert_eq!(valid().default_language(), Language::En);
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = valid();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_contact_address() {
        let mut config = valid();
        config.contact.address = "not-an-address".to_string();

        assert!(config.validate().is_err());

        let mut config = valid();
        config.contact.webmail_host = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_language() {
        let mut config = valid();
        config.site.default_language = "fr".to_string();

        assert!(config.validate().is_err());

        config.site.default_language = "bn".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_language(), Language::Bn);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = Config::load(Some("does/not/exist.toml".to_string()))
            .expect("defaults are enough to load");

        assert_eq!(config.contact.address, "ridoan.zisan@gmail.com");
        assert_eq!(config.contact.webmail_host, "mail.google.com");
        assert_eq!(config.composer.latency_ms, 2000);
    }
}
