//! People Core - read-only employee directory CLI.
//!
//! Each subcommand makes one directory call against a folder of CSV sheets
//! and prints the result as JSON. Logs go to stderr.

mod config;
mod error;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use people_core_directory::EmployeeDirectoryService;
use people_core_sheets::CsvDirectory;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "people-core")]
#[command(version, about = "Read-only employee directory over CSV sheets")]
struct Cli {
    /// Directory holding one `<sheet name>.csv` file per sheet
    #[arg(short, long, default_value = ".", global = true)]
    data: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Do not read config.toml from the user config dir
    #[arg(long, global = true)]
    no_user_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the entry page descriptor
    Page,

    /// List the sheets found in the data directory
    Sheets,

    /// List every employee in sheet order
    List,

    /// Show one employee by exact ID
    Detail {
        /// Employee ID to look up
        employee_id: String,
    },

    /// Sorted distinct non-empty values of a field
    Unique {
        /// Field name (employeeId, name, employmentType, activeFlag) or its header label
        field: String,
    },

    /// Log sample rows and fill statistics, print a summary line
    Debug,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref(), !cli.no_user_config)
        .context("Failed to load configuration")?;
    tracing::debug!(data = %cli.data.display(), sheet = %config.sheet_name, "opening directory");
    let source = CsvDirectory::new(&cli.data);
    let service = EmployeeDirectoryService::new(&source, config);

    match cli.command {
        Commands::Page => print_json(&service.render_entry_page()),
        Commands::Sheets => print_json(&source.sheet_names()?),
        Commands::List => print_json(&service.load_all_employees()?),
        Commands::Detail { employee_id } => {
            print_json(&service.get_employee_detail(&employee_id)?)
        }
        Commands::Unique { field } => print_json(&service.get_unique_field_values(&field)?),
        Commands::Debug => {
            println!("{}", service.debug_sample_data_report());
            Ok(())
        }
    }
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
