// Facility Directory - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/facility-directory get "New York"
// ```
//
// Or against a table rebuilt from CSV exports:
//
// ```console
// $ ./target/release/facility-directory build --large large.csv --small small.csv -o table.json
// $ ./target/release/facility-directory --data table.json --format json list Texas small
// ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use facility_directory::facility::states;
use facility_directory::{
    CliArgs, Command, DirectoryConfig, FacilityRegistry, LoggingConfig, OutputFormat,
    StateEntry, TableBuilder, TableStatistics,
};
use std::borrow::Cow;
use std::fs;
use std::io::{self, IsTerminal};
use std::process;
use tracing::{debug, error, info, info_span, Level};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match DirectoryConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let config = match DirectoryConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    let _log_guard = match init_logging(&args, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    let Some(command) = args.command else {
        eprintln!("Error: no command given\n");
        if let Err(e) = CliArgs::command().write_help(&mut io::stderr()) {
            eprintln!("Failed to print usage: {}", e);
        }
        process::exit(1);
    };

    if let Err(e) = run(command, &config) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging based on CLI flags and configuration
fn init_logging(
    args: &CliArgs,
    config: &DirectoryConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, facility_directory::directory::LoggingError>
{
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        // Default: only warnings for normal users
        Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if !io::stderr().is_terminal() {
        logging = logging.without_ansi();
    }
    if config.log_json {
        logging = logging.with_json_format();
    }
    if let Some(dir) = &config.log_directory {
        logging = logging.with_file_logging(dir.clone());
    }
    logging.init()
}

/// Run a single CLI command
fn run(command: Command, config: &DirectoryConfig) -> Result<()> {
    let format = config.get_output_format()?;

    match command {
        Command::States => {
            let registry = load_registry(config)?;
            print_states(&registry.list_states(), format)
        }
        Command::Get { state } => {
            let registry = load_registry(config)?;
            let entry = registry.get(&state)?;
            print_entry(&state, entry, format)
        }
        Command::List { state, category } => {
            let registry = load_registry(config)?;
            let facilities = registry.list_facilities(&state, &category)?;
            print_names(facilities, format)
        }
        Command::Stats => {
            let registry = load_registry(config)?;
            print_statistics(&registry.statistics(), format)
        }
        Command::Export { output, javascript } => {
            let registry = load_registry(config)?;
            write_table(&registry, output.as_deref(), javascript)
        }
        Command::Build { large, small, output, javascript, .. } => {
            let _span = info_span!("build", max_small = config.max_small).entered();
            let registry = TableBuilder::new()
                .with_max_small(config.max_small)
                .build_from_paths(&large, &small)
                .with_context(|| format!("Failed to build facility table from {} and {}", large, small))?;
            write_table(&registry, output.as_deref(), javascript)
        }
    }
}

/// Resolve the table to query: a JSON file when configured, otherwise the built-in one
fn load_registry(config: &DirectoryConfig) -> Result<Cow<'static, FacilityRegistry>> {
    match &config.data_path {
        Some(path) => {
            let registry = FacilityRegistry::load_json_file(path)
                .with_context(|| format!("Failed to load facility table from {}", path))?;
            Ok(Cow::Owned(registry))
        }
        None => {
            debug!("Using built-in facility table");
            Ok(Cow::Borrowed(FacilityRegistry::builtin()))
        }
    }
}

fn print_states(states: &[&str], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(states)?),
        OutputFormat::Text => {
            for state in states {
                println!("{}", state);
            }
        }
    }
    Ok(())
}

fn print_entry(state: &str, entry: &StateEntry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
        OutputFormat::Text => {
            match states::abbreviation(state) {
                Some(abbr) => println!("{} ({})", state, abbr),
                None => println!("{}", state),
            }
            print_category_block("large", &entry.large);
            print_category_block("small", &entry.small);
        }
    }
    Ok(())
}

fn print_category_block(label: &str, names: &[String]) {
    if names.is_empty() {
        println!("  {}: none", label);
        return;
    }
    println!("  {} ({}):", label, names.len());
    for name in names {
        println!("    {}", name);
    }
}

fn print_names(names: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(names)?),
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

fn print_statistics(stats: &TableStatistics, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => {
            println!("Facility Table Statistics:");
            println!("  States: {}", stats.states);
            println!(
                "  Large Facilities: {} ({:.1} per state)",
                stats.total_large,
                stats.average_large_per_state()
            );
            println!(
                "  Small Facilities: {} ({:.1} per state)",
                stats.total_small,
                stats.average_small_per_state()
            );
            println!(
                "  Empty States: {} ({:.1}%)",
                stats.empty_states,
                stats.empty_state_percentage()
            );
            println!("  States Without Large: {}", stats.states_without_large);
            println!("  States Without Small: {}", stats.states_without_small);
            println!("  Distinct Large Systems: {}", stats.distinct_large_systems);
            if !stats.most_widespread_large.is_empty() {
                println!("  Most Widespread Large Systems:");
                for (name, count) in &stats.most_widespread_large {
                    println!("    {} ({} states)", name, count);
                }
            }
        }
    }
    Ok(())
}

/// Write a table to a file or stdout as JSON or JavaScript
fn write_table(registry: &FacilityRegistry, output: Option<&str>, javascript: bool) -> Result<()> {
    let rendered = if javascript { registry.to_javascript()? } else { registry.to_json_pretty()? };

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write facility table to {}", path))?;
            info!(path, states = registry.len(), "Facility table written");
            eprintln!("Wrote {} states to {}", registry.len(), path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
