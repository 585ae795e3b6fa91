use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// Time-in-force instructions for order validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Day order: automatically canceled at end of trading day
    #[serde(rename = "day")]
    DAY,

    /// Immediate or Cancel: execute immediately (partially or fully) and cancel unfilled portion
    #[serde(rename = "ioc")]
    IOC,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::DAY => "day",
            TimeInForce::IOC => "ioc",
        }
    }
}

impl FromStr for TimeInForce {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeInForce::DAY),
            "ioc" => Ok(TimeInForce::IOC),
            _ => Err(ParseEnumError::new("time in force", s)),
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
