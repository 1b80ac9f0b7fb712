//! Resolved server configuration
//!
//! Layers, later wins: defaults, config file, environment, then whatever
//! the caller applies on top (command-line flags).

use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::file::{ConfigFile, FileConfigProvider};
use crate::client::DEFAULT_API_ENDPOINT;
use crate::logging::LogLevel;

/// Comma separated `service[:category]` list
pub const SERVICES_ENV: &str = "SERVICES";
pub const API_ENDPOINT_ENV: &str = "DIGITALOCEAN_API_ENDPOINT";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `service[:category]` tokens; empty means every service at `basic`
    pub services: Vec<String>,
    pub api_endpoint: String,
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults, then the file at `path` (or the default file), then the environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let provider = match path {
            Some(path) => FileConfigProvider::new(path),
            None => FileConfigProvider::user(),
        };

        let mut config = Self::default();
        config.apply_file(&provider.load()?)?;
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: &ConfigFile) -> ConfigResult<()> {
        if let Some(services) = &file.services {
            self.services = services
                .iter()
                .flat_map(|s| split_service_list(s))
                .collect();
        }
        if let Some(endpoint) = non_empty(file.api_endpoint.as_deref()) {
            self.api_endpoint = endpoint.to_string();
        }
        if let Some(level) = non_empty(file.log_level.as_deref()) {
            self.log_level = parse_log_level(level)?;
        }
        Ok(())
    }

    pub fn apply_env(&mut self) -> ConfigResult<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply variables from `lookup`; empty values are ignored
    pub fn apply_env_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(services) = lookup(SERVICES_ENV).filter(|v| !v.trim().is_empty()) {
            self.services = split_service_list(&services);
        }
        if let Some(endpoint) = lookup(API_ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_endpoint = endpoint.trim().to_string();
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.log_level = parse_log_level(&level)?;
        }
        Ok(())
    }

    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = services;
        self
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.api_endpoint.starts_with("http://") || self.api_endpoint.starts_with("https://")) {
            return Err(ConfigError::Other(format!(
                "api endpoint must be an http(s) URL: {}",
                self.api_endpoint
            )));
        }
        Ok(())
    }
}

/// Split `"droplets:all, networking"` into tokens, dropping empties
pub fn split_service_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_log_level(level: &str) -> ConfigResult<LogLevel> {
    level
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
