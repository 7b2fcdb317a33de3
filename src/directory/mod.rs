//! Cross-cutting support for the facility directory
//!
//! This module contains the shared error type and the logging setup used by the
//! library and the `facility-directory` binary.
//!
//! # Usage Example
//!
//! ```rust
//! use facility_directory::directory::*;
//!
//! let error = DirectoryError::not_found("Atlantis");
//! assert!(error.is_lookup_error());
//!
//! let logging = LoggingConfig::new().with_level(tracing::Level::WARN);
//! assert_eq!(logging.default_directive(), "facility_directory=WARN");
//! ```

pub mod error;
pub mod logging;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
