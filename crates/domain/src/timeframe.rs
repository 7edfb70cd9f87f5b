use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// How a `Timeframe` positions itself against a deadline: immediately,
/// a number of days before, or on a fixed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeframeType {
    Now,
    Relative,
    Absolute,
}

impl Display for TimeframeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let repr = match self {
            Self::Now => "now",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        };
        write!(f, "{}", repr)
    }
}

#[derive(Error, Debug)]
pub enum InvalidTimeframeTypeError {
    #[error("Timeframe type: {0} is not known")]
    Unknown(String),
}

impl FromStr for TimeframeType {
    type Err = InvalidTimeframeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(Self::Now),
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            _ => Err(InvalidTimeframeTypeError::Unknown(s.to_string())),
        }
    }
}

/// A named offset rule that can apply to a `BaseReminder`. `formula`
/// holds a day count for `Relative` rules and an ISO date for `Absolute`
/// rules, and is `None` for `Now`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    pub id: ID,
    pub name: String,
    #[serde(rename = "type")]
    pub timeframe_type: TimeframeType,
    pub formula: Option<String>,
}

impl Entity for Timeframe {
    fn id(&self) -> ID {
        self.id
    }
}
