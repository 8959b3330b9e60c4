use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemParseError {
    #[error("expected name=weight, got {0:?}")]
    MissingSeparator(String),
    #[error("item name is empty")]
    EmptyName,
    #[error("invalid weight: {0:?}")]
    InvalidWeight(String),
    #[error("weight can't be negative: {0}")]
    NegativeWeight(f64),
}

///
/// A candidate in a draw.
///
/// Names don't need to be unique; two items with the same name are still two
/// separate entries. A weight of 0 means the item can't win.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, alias = "probability")]
    pub weight: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64) -> Item {
        Item {
            name: name.into(),
            weight,
        }
    }

    /// True if the item has a non-blank name and a weight above 0.
    pub fn is_eligible(&self) -> bool {
        !self.name.trim().is_empty() && self.weight > 0.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}%", self.name, self.weight)
    }
}

/// Parses `name=weight`, where the weight may carry a trailing `%`.
impl FromStr for Item {
    type Err = ItemParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, weight) = s
            .rsplit_once('=')
            .ok_or_else(|| ItemParseError::MissingSeparator(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemParseError::EmptyName);
        }
        let weight_text = weight.trim();
        let weight_text = weight_text.strip_suffix('%').unwrap_or(weight_text).trim();
        let weight: f64 = weight_text
            .parse()
            .map_err(|_| ItemParseError::InvalidWeight(weight.to_string()))?;
        if !weight.is_finite() {
            return Err(ItemParseError::InvalidWeight(weight.to_string()));
        }
        if weight < 0.0 {
            return Err(ItemParseError::NegativeWeight(weight));
        }
        Ok(Item::new(name, weight))
    }
}
