use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemperatureError {
    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    OutOfRange(f64),
    #[error("temperature must be a number, got '{0}'")]
    NotANumber(String),
}

/// Sampling temperature, guaranteed to lie in `[0.0, 2.0]`.
///
/// Validation happens at construction, so config files and CLI flags
/// reject out-of-range values before they reach a request.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(value: f64) -> Result<Self, TemperatureError> {
        if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TemperatureError::OutOfRange(value))
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(DEFAULT_TEMPERATURE)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = TemperatureError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(temperature: Temperature) -> Self {
        temperature.0
    }
}

impl FromStr for Temperature {
    type Err = TemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| TemperatureError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
