//! Enumeration types for the facility directory
//!
//! This module contains the facility category used to select a list within a
//! state entry, and the output formats supported by the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size category of a facility within a state entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCategory {
    /// Major health systems and hospital networks
    Large,
    /// Smaller practices and clinics
    Small,
}

impl FacilityCategory {
    /// Both categories, in the order they appear in a state entry
    pub const ALL: [FacilityCategory; 2] = [FacilityCategory::Large, FacilityCategory::Small];

    /// Field name used for this category in the persisted table
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityCategory::Large => "large",
            FacilityCategory::Small => "small",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact field names `large` and `small` are accepted
impl FromStr for FacilityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(FacilityCategory::Large),
            "small" => Ok(FacilityCategory::Small),
            _ => Err(format!("Unknown facility category: {}", s)),
        }
    }
}

/// Output formats for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one item per line
    Text,
    /// JSON for structured consumers
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
