/*---------- Imports ----------*/
use crate::utils::id::{IdStrategy, UnknownIdStrategy};
use std::env;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error(transparent)]
    Invalid(#[from] UnknownIdStrategy),

    #[error("{key} must be a positive integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}

/*---------- Structs ----------*/

/// Settings every customer Lambda reads once at cold start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub id_strategy: IdStrategy,

    /// Items per scan request for the List Lambda. `None` leaves DynamoDB's
    /// 1MB page as the only limit.
    pub scan_page_limit: Option<i32>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("TABLE_NAME"))?;

        let id_strategy = match lookup("CUSTOMER_ID_STRATEGY") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => IdStrategy::default(),
        };

        let scan_page_limit = match lookup("SCAN_PAGE_LIMIT") {
            Some(value) if !value.trim().is_empty() => match value.trim().parse::<i32>() {
                Ok(limit) if limit > 0 => Some(limit),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "SCAN_PAGE_LIMIT",
                        value,
                    })
                }
            },
            _ => None,
        };

        Ok(Config {
            table_name,
            id_strategy,
            scan_page_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| values.get(key).cloned()
    }

    #[test]
    fn reads_table_name_with_default_strategy() {
        let config = Config::from_lookup(lookup_from(&[("TABLE_NAME", "customers")])).unwrap();

        assert_eq!(config.table_name, "customers");
        assert_eq!(config.id_strategy, IdStrategy::Timestamp);
        assert_eq!(config.scan_page_limit, None);
    }

    #[test]
    fn reads_scan_page_limit() {
        let config = Config::from_lookup(lookup_from(&[
            ("TABLE_NAME", "customers"),
            ("SCAN_PAGE_LIMIT", "25"),
        ]))
        .unwrap();

        assert_eq!(config.scan_page_limit, Some(25));
    }

    #[test]
    fn rejects_non_positive_scan_page_limit() {
        for value in ["0", "-3", "many"] {
            let result = Config::from_lookup(lookup_from(&[
                ("TABLE_NAME", "customers"),
                ("SCAN_PAGE_LIMIT", value),
            ]));

            assert!(matches!(
                result,
                Err(ConfigError::InvalidNumber {
                    key: "SCAN_PAGE_LIMIT",
                    ..
                })
            ));
        }
    }

    #[test]
    fn reads_ulid_strategy() {
        let config = Config::from_lookup(lookup_from(&[
            ("TABLE_NAME", "customers"),
            ("CUSTOMER_ID_STRATEGY", "ulid"),
        ]))
        .unwrap();

        assert_eq!(config.id_strategy, IdStrategy::Ulid);
    }

    #[test]
    fn missing_table_name_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::Missing("TABLE_NAME"))));
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("TABLE_NAME", "customers"),
            ("CUSTOMER_ID_STRATEGY", "sequential"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
