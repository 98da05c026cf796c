#![deny(missing_docs)]

//! # OAS Contract CLI
//!
//! Command Line Interface over a resolved API description.
//!
//! Supported Commands:
//! - `route`: Finds the declared template matching a request path.
//! - `schema`: Extracts the response schema of one path / method / status.
//! - `validate`: Validates a payload file against that schema.
//! - `fixtures`: Writes one schema fixture per row of a case table.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oas_contract_core::{AppResult, ResolvedDocument};

mod fixtures;
mod logging;
mod route;
mod schema;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI contract lookup CLI")]
struct Cli {
    /// Path to the resolved API description (JSON or YAML).
    #[clap(long, global = true, env = "OAS_CONTRACT_SPEC", default_value = "swagger.json")]
    spec: PathBuf,

    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `oas_contract_core=trace`).
    #[clap(long, global = true, env = "OAS_CONTRACT_LOG", default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the path template matching a concrete request path.
    Route(route::RouteArgs),
    /// Print or write the response schema for a path, method and status.
    Schema(schema::SchemaArgs),
    /// Validate a payload against the response schema.
    Validate(validate::ValidateArgs),
    /// Generate schema fixtures for every row of a case table.
    Fixtures(fixtures::FixturesArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let document = ResolvedDocument::load(&cli.spec)?;
    tracing::info!(spec = %cli.spec.display(), "loaded API description");

    match &cli.command {
        Commands::Route(args) => route::execute(args, &document)?,
        Commands::Schema(args) => schema::execute(args, &document)?,
        Commands::Validate(args) => validate::execute(args, &document)?,
        Commands::Fixtures(args) => fixtures::execute(args, &document)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_schema_command() {
        let cli = Cli::try_parse_from([
            "oas-contract",
            "--spec",
            "api.yaml",
            "schema",
            "--path",
            "/users/1",
            "--method",
            "get",
            "--status",
            "200",
        ])
        .unwrap();
        assert_eq!(cli.spec, PathBuf::from("api.yaml"));
        assert!(matches!(cli.command, Commands::Schema(_)));
    }
}
