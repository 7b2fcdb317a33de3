//! Configuration structures for the facility directory
//!
//! This module contains the command line interface, the optional JSON
//! configuration file, and the merged DirectoryConfig with its validation.

use super::OutputFormat;
use crate::facility::DEFAULT_MAX_SMALL;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "facility-directory",
    version,
    about = "Facility Directory - Look up large and small healthcare facilities by U.S. state",
    long_about = "Looks up the large health systems and small practices recorded for each U.S. state, and rebuilds or exports the facility table.

EXAMPLES:
    # List every state in the table
    facility-directory states

    # Show both lists for a state
    facility-directory get \"New York\"

    # Show one list as JSON
    facility-directory --format json list Texas large

    # Rebuild the table from CSV exports
    facility-directory build --large large.csv --small small.csv --output table.json

    # Query a rebuilt table instead of the built-in one
    facility-directory --data table.json get Texas

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Facility table to query instead of the built-in one
    #[arg(
        long,
        global = true,
        help = "JSON facility table to use instead of the built-in table"
    )]
    pub data: Option<String>,

    /// Output format for results
    #[arg(
        long,
        global = true,
        help = "Output format (text or json)",
        long_help = "Output format for command results. Supported formats: text, json. Default: text"
    )]
    pub format: Option<String>,

    /// Directory for daily-rolling JSON log files
    #[arg(long, global = true, help = "Also write JSON logs to files in this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, global = true, help = "Emit console logs as JSON")]
    pub log_json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every state name in table order
    States,

    /// Show the large and small facility lists for a state
    Get {
        /// Exact state name, e.g. "New York"
        state: String,
    },

    /// Show one facility list for a state
    List {
        /// Exact state name, e.g. "New York"
        state: String,
        /// Facility category: large or small
        category: String,
    },

    /// Show summary statistics for the table
    Stats,

    /// Write the table as JSON (or JavaScript)
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit a `const FACILITY_BY_STATE = ...;` declaration instead of bare JSON
        #[arg(long)]
        javascript: bool,
    },

    /// Build a table from the large and small facility CSV exports
    Build {
        /// Large facilities CSV (health system by state count matrix)
        #[arg(long)]
        large: String,
        /// Small facilities CSV (Name and State columns)
        #[arg(long)]
        small: String,
        /// Maximum small facility names kept per state
        #[arg(long)]
        max_small: Option<usize>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit a `const FACILITY_BY_STATE = ...;` declaration instead of bare JSON
        #[arg(long)]
        javascript: bool,
    },
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// JSON facility table to use instead of the built-in table
    pub data_path: Option<String>,

    /// Output format for command results
    pub output_format: Option<String>,

    /// Maximum small facility names kept per state when building
    pub max_small: Option<usize>,

    /// Directory for daily-rolling JSON log files
    pub log_directory: Option<String>,

    /// Emit console logs as JSON
    pub log_json: Option<bool>,
}

/// Configuration for the facility directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// JSON facility table to use instead of the built-in table
    pub data_path: Option<String>,

    /// Output format for command results
    pub output_format: String,

    /// Maximum small facility names kept per state when building
    pub max_small: usize,

    /// Directory for daily-rolling JSON log files
    pub log_directory: Option<String>,

    /// Emit console logs as JSON
    pub log_json: bool,
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for directory configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),

    /// Small facility cap is invalid
    #[error("Max small facilities must be greater than 0, got {0}")]
    InvalidMaxSmall(usize),

    /// A configured path is empty
    #[error("Path for {0} must not be empty")]
    EmptyPath(&'static str),
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            output_format: "text".to_string(),
            max_small: DEFAULT_MAX_SMALL,
            log_directory: None,
            log_json: false,
        }
    }
}

impl DirectoryConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            data_path: config_file.data_path.or(defaults.data_path),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            max_small: config_file.max_small.unwrap_or(defaults.max_small),
            log_directory: config_file.log_directory.or(defaults.log_directory),
            log_json: config_file.log_json.unwrap_or(defaults.log_json),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.data {
            config.data_path = Some(value);
        }
        if let Some(value) = args.format {
            config.output_format = value;
        }
        if let Some(value) = args.log_dir {
            config.log_directory = Some(value);
        }
        if args.log_json {
            config.log_json = true;
        }
        if let Some(Command::Build { max_small: Some(value), .. }) = args.command {
            config.max_small = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.get_output_format()?;

        if self.max_small == 0 {
            return Err(ConfigValidationError::InvalidMaxSmall(self.max_small));
        }

        if matches!(self.data_path.as_deref(), Some(path) if path.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyPath("data_path"));
        }

        if matches!(self.log_directory.as_deref(), Some(path) if path.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyPath("log_directory"));
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}
