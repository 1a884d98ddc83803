/*---------- Imports ----------*/
use chrono::Utc;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/*---------- Enums ----------*/

/// How new customer ids are minted.
///
/// `Timestamp` renders the current epoch milliseconds as a string. Two creates
/// landing on the same millisecond get the same id and the second overwrites
/// the first. `Ulid` doesn't have that problem and is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Ulid,
}

#[derive(Debug, Error)]
#[error("Unknown id strategy `{0}`, expected `timestamp` or `ulid`")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "ulid" => Ok(IdStrategy::Ulid),
            _ => Err(UnknownIdStrategy(value.to_owned())),
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string_version = match self {
            IdStrategy::Timestamp => "timestamp",
            IdStrategy::Ulid => "ulid",
        };

        write!(f, "{}", string_version)
    }
}

/*---------- Structs ----------*/
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    strategy: IdStrategy,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    pub fn generate(&self) -> String {
        match self.strategy {
            IdStrategy::Timestamp => Utc::now().timestamp_millis().to_string(),
            IdStrategy::Ulid => Ulid::new().to_string(),
        }
    }
}
