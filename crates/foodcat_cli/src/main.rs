//! Command-line driver for the food catalog.
//!
//! # Responsibility
//! - Route one command to the matching endpoint and print its JSON body.
//! - Configure the backing file and optional file logging.

use clap::{Parser, Subcommand};
use foodcat_api::{resolve_data_path, ApiResponse};
use foodcat_core::{default_log_level, init_logging, CsvFoodStore, FoodService};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "foodcat", version, about = "Food catalog record keeping")]
struct Cli {
    /// CSV backing file (falls back to FOODCAT_DATA_PATH, then ./data.csv).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true, env = "FOODCAT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[arg(long, global = true, default_value = default_log_level())]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every food, active rows first.
    List,
    /// Search foods whose name contains QUERY (case-insensitive).
    Search { query: Option<String> },
    /// Rename and/or restore a food. Body: {"food_name", "new_name"?, "restore"?}.
    Update {
        #[arg(long)]
        body: String,
    },
    /// Soft-delete a food. Body: {"food_name"}.
    Delete {
        #[arg(long)]
        body: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("foodcat: logging disabled: {err}");
        }
    }

    let data_path = resolve_data_path(cli.data);
    info!(
        "event=cli_start module=cli status=ok data_path={}",
        data_path.display()
    );
    let service = FoodService::new(CsvFoodStore::new(data_path));

    let outcome = match &cli.command {
        Command::List => foodcat_api::list(&service),
        Command::Search { query } => foodcat_api::search(&service, query.as_deref()),
        Command::Update { body } => foodcat_api::update(&service, body),
        Command::Delete { body } => Ok(foodcat_api::delete(&service, body)),
    };

    match outcome {
        Ok(response) => emit(&response),
        Err(err) => {
            eprintln!("foodcat: {err}");
            ExitCode::FAILURE
        }
    }
}

fn emit(response: &ApiResponse) -> ExitCode {
    match serde_json::to_string_pretty(&response.body) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("foodcat: failed to render response: {err}");
            return ExitCode::FAILURE;
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        eprintln!("foodcat: request failed with status {}", response.status);
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_with_global_data_flag() {
        let cli = Cli::parse_from(["foodcat", "search", "egg", "--data", "/tmp/f.csv"]);
        assert!(matches!(cli.command, Command::Search { query: Some(ref q) } if q == "egg"));
        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/f.csv")));
    }
}
