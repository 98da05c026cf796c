#![deny(missing_docs)]

//! # Schema Command
//!
//! Extracts the response schema for one request and prints it or writes it
//! as a fixture file.

use oas_contract_core::{
    render_fragment, resolve_case, AppError, AppResult, ContractCase, FixtureFormat,
    ResolvedDocument,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Identifies one response: request path, method and status.
#[derive(clap::Args, Debug, Clone)]
pub struct ResponseArgs {
    /// Concrete request path, e.g. `/users/42`.
    #[clap(long)]
    pub path: String,

    /// Method as declared in the document.
    #[clap(long, default_value = "get")]
    pub method: String,

    /// Response status key.
    #[clap(long, default_value = "200")]
    pub status: String,
}

impl ResponseArgs {
    /// The request as a contract case.
    pub fn case(&self) -> ContractCase {
        ContractCase::new(&self.path, &self.method, &self.status)
    }
}

/// Arguments for the schema command.
#[derive(clap::Args, Debug, Clone)]
pub struct SchemaArgs {
    #[clap(flatten)]
    pub response: ResponseArgs,

    /// Output format (`json` or `yaml`).
    /// Defaults to the output file extension, or JSON.
    #[clap(long)]
    pub format: Option<FixtureFormat>,

    /// Output path for the schema file.
    /// If not provided, prints to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the schema extraction.
pub fn execute(args: &SchemaArgs, document: &ResolvedDocument) -> AppResult<()> {
    let resolved = resolve_case(document, &args.response.case())?;
    tracing::info!(template = resolved.template, "resolved response schema");

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(FixtureFormat::from_path))
        .unwrap_or_default();
    let rendered = render_fragment(resolved.schema, format)?;

    match &args.output {
        Some(out_path) => {
            write_output(out_path, &rendered)?;
            println!("Schema written to {:?}", out_path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Writes a file, creating missing parent directories.
pub fn write_output(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::General(format!("Failed to create output directory: {}", e))
            })?;
        }
    }
    fs::write(path, content)
        .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))
}
