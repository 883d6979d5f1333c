//! Sort configuration value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which side of each entry drives the ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    Keys,
    Values,
}

/// Semantic type used to compare the selected field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    /// Lexicographic comparison of the text
    #[default]
    String,
    /// Comparison by text length in bytes
    StringLength,
    /// 64-bit signed integer
    Integer,
    /// 64-bit float
    Float,
    /// Calendar timestamp
    DateTime,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Keys => "keys",
            Dimension::Values => "values",
        }
    }
}

impl Interpretation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpretation::String => "string",
            Interpretation::StringLength => "string_length",
            Interpretation::Integer => "integer",
            Interpretation::Float => "float",
            Interpretation::DateTime => "date_time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised dimension or interpretation name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {what}: {input:?}")]
pub struct ParseConfigError {
    what: &'static str,
    input: String,
}

impl FromStr for Dimension {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keys" | "key" => Ok(Dimension::Keys),
            "values" | "value" => Ok(Dimension::Values),
            _ => Err(ParseConfigError {
                what: "dimension",
                input: s.to_string(),
            }),
        }
    }
}

impl FromStr for Interpretation {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(Interpretation::String),
            "string_length" | "string_by_length" | "length" | "len" => {
                Ok(Interpretation::StringLength)
            }
            "integer" | "int" => Ok(Interpretation::Integer),
            "float" | "number" => Ok(Interpretation::Float),
            "date_time" | "datetime" | "date" => Ok(Interpretation::DateTime),
            _ => Err(ParseConfigError {
                what: "interpretation",
                input: s.to_string(),
            }),
        }
    }
}

/// Accumulated sort parameters
///
/// `limit` of `None` or `Some(0)` means the whole map is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub dimension: Dimension,
    pub interpretation: Interpretation,
    pub descending: bool,
    pub limit: Option<usize>,
}

impl SortConfig {
    pub fn new(
        dimension: Dimension,
        interpretation: Interpretation,
        descending: bool,
        limit: Option<usize>,
    ) -> Self {
        Self {
            dimension,
            interpretation,
            descending,
            limit,
        }
    }

    /// Length of the result for a map with `len` entries
    pub fn effective_limit(&self, len: usize) -> usize {
        match self.limit {
            Some(n) if n > 0 => n.min(len),
            _ => len,
        }
    }
}
