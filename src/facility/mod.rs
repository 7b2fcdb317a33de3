//! Facility tables by state
//!
//! This module holds the built-in table of healthcare facilities per U.S. state
//! and the types used to query, build, and export it.
//!
//! # Overview
//!
//! - **StateEntry**: The `large` and `small` facility lists recorded for one state
//! - **FacilityRegistry**: Ordered, read-only table with lookup by exact state name
//! - **TableBuilder**: Rebuilds a table from the large/small CSV exports
//! - **TableStatistics**: Summary counts over a table
//!
//! # Usage Example
//!
//! ```rust
//! use facility_directory::facility::*;
//! use facility_directory::types::FacilityCategory;
//!
//! let registry = FacilityRegistry::builtin();
//!
//! let california = registry.get("California").unwrap();
//! assert!(california.large.contains(&"HCA Healthcare".to_string()));
//!
//! let small = registry.facilities("Texas", FacilityCategory::Small).unwrap();
//! assert!(!small.is_empty());
//!
//! assert!(registry.get("Atlantis").is_err());
//! ```

pub(crate) mod data;
pub mod builder;
pub mod entry;
pub mod registry;
pub mod states;

// Re-export all public types for convenience
pub use builder::{TableBuilder, DEFAULT_MAX_SMALL};
pub use entry::StateEntry;
pub use registry::{FacilityRegistry, TableStatistics, JAVASCRIPT_BINDING, TOP_LARGE_SYSTEMS};
