//! Core types for the facility directory
//!
//! This module contains the enumerations and configuration structures used by
//! the library and the CLI.
//!
//! # Overview
//!
//! - **Enums**: Facility category and output format, parsed from user input
//! - **Configuration**: CLI arguments, JSON config file, and the merged configuration
//!
//! # Usage Example
//!
//! ```rust
//! use facility_directory::types::*;
//!
//! let category: FacilityCategory = "large".parse().unwrap();
//! assert_eq!(category, FacilityCategory::Large);
//!
//! let config = DirectoryConfig {
//!     output_format: "json".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
