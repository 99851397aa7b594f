//! Registry configuration, read from the environment.

use stockroom_core::{DomainError, DomainResult};

use crate::table::DEFAULT_DECIMAL_PLACES;

pub const ENV_SEED_SAMPLE_DATA: &str = "STOCKROOM_SEED_SAMPLE_DATA";
pub const ENV_DECIMAL_PLACES: &str = "STOCKROOM_DECIMAL_PLACES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Register the sample records on startup.
    pub seed_sample_data: bool,
    /// Precision of floats when the registry is displayed.
    pub display_decimal_places: i32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: false,
            display_decimal_places: DEFAULT_DECIMAL_PLACES as i32,
        }
    }
}

impl RegistryConfig {
    /// Read `STOCKROOM_SEED_SAMPLE_DATA` and `STOCKROOM_DECIMAL_PLACES`.
    ///
    /// Unset values keep their defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED_SAMPLE_DATA) {
            config.seed_sample_data = parse_flag(ENV_SEED_SAMPLE_DATA, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DECIMAL_PLACES) {
            config.display_decimal_places = raw.trim().parse().map_err(|_| {
                DomainError::invalid_argument(format!(
                    "{ENV_DECIMAL_PLACES} is not a number: {raw}"
                ))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, raw: &str) -> DomainResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(DomainError::invalid_argument(format!(
            "{key} must be a boolean flag, got {raw}"
        ))),
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
    fn from_lookup_defaults_when_unset() {
        let config = RegistryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert!(!config.seed_sample_data);
        assert_eq!(config.display_decimal_places, 2);
    }

    #[test]
    fn from_lookup_reads_both_values() {
        let config = RegistryConfig::from_lookup(lookup(&[
            (ENV_SEED_SAMPLE_DATA, "Yes"),
            (ENV_DECIMAL_PLACES, " 3 "),
        ]))
        .unwrap();
        assert!(config.seed_sample_data);
        assert_eq!(config.display_decimal_places, 3);
    }

    #[test]
    fn from_lookup_rejects_garbage() {
        let err =
            RegistryConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLE_DATA, "maybe")])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = RegistryConfig::from_lookup(lookup(&[(ENV_DECIMAL_PLACES, "two")])).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn registry_from_config_seeds_and_validates() {
        let seeded = crate::Registry::from_config(&RegistryConfig {
            seed_sample_data: true,
            display_decimal_places: 1,
        })
        .unwrap();
        assert_eq!(seeded.len(), 13);

        let err = crate::Registry::from_config(&RegistryConfig {
            seed_sample_data: false,
            display_decimal_places: -2,
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn registry_from_config_rejects_excessive_decimal_places() {
        let config = RegistryConfig::from_lookup(lookup(&[(ENV_DECIMAL_PLACES, "70000")])).unwrap();
        let err = crate::Registry::from_config(&config).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let widest = crate::Registry::from_config(&RegistryConfig {
            seed_sample_data: true,
            display_decimal_places: crate::table::MAX_DECIMAL_PLACES as i32,
        })
        .unwrap();
        assert_eq!(widest.to_string().lines().count(), 13);
    }
}
