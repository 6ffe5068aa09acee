//! Server configuration from the environment (and an optional `.env` file).

use crate::bulk::BulkLimits;
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bulk: BulkLimits,
    /// Mailbox capacity of every resource actor.
    pub actor_buffer_size: usize,
    /// Extra path segments served by generic custom-resource actors.
    pub custom_resource_types: Vec<String>,
    /// Prefix of `location` values in bulk responses.
    pub base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bulk: BulkLimits::default(),
            actor_buffer_size: 32,
            custom_resource_types: vec!["Devices".to_string()],
            base_url: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for absent keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let max_operations = match lookup("BULK_MAX_OPERATIONS") {
            Some(v) => v
                .parse::<usize>()
                .context("BULK_MAX_OPERATIONS must be a non-negative integer")?,
            None => defaults.bulk.max_operations,
        };

        let max_payload_bytes = match lookup("BULK_MAX_PAYLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("BULK_MAX_PAYLOAD_BYTES must be a non-negative integer")?,
            None => defaults.bulk.max_payload_bytes,
        };

        let actor_buffer_size = match lookup("ACTOR_BUFFER_SIZE") {
            Some(v) => v
                .parse::<usize>()
                .context("ACTOR_BUFFER_SIZE must be a positive integer")?,
            None => defaults.actor_buffer_size,
        };
        if actor_buffer_size == 0 {
            anyhow::bail!("ACTOR_BUFFER_SIZE must be a positive integer");
        }

        let custom_resource_types = match lookup("CUSTOM_RESOURCE_TYPES") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            None => defaults.custom_resource_types,
        };

        let base_url = lookup("SCIM_BASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            bulk: BulkLimits {
                max_operations,
                max_payload_bytes,
            },
            actor_buffer_size,
            custom_resource_types,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bulk.max_operations, 1000);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BULK_MAX_OPERATIONS", "10"),
            ("CUSTOM_RESOURCE_TYPES", "Devices, Printers,,"),
            ("SCIM_BASE_URL", "https://directory.example.com/v2"),
        ]))
        .unwrap();

        assert_eq!(config.bulk.max_operations, 10);
        assert_eq!(config.custom_resource_types, vec!["Devices", "Printers"]);
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://directory.example.com/v2")
        );
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("BULK_MAX_OPERATIONS", "many")])).unwrap_err();
        assert!(err.to_string().contains("BULK_MAX_OPERATIONS"));
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        assert!(ServerConfig::from_lookup(lookup(&[("ACTOR_BUFFER_SIZE", "0")])).is_err());
    }
}
