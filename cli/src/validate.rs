#![deny(missing_docs)]

//! # Validate Command
//!
//! Checks a payload file against the response schema of one request.

use crate::schema::ResponseArgs;
use oas_contract_core::document::read_value_file;
use oas_contract_core::{check_case, AppResult, ResolvedDocument};
use std::path::PathBuf;

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[clap(flatten)]
    pub response: ResponseArgs,

    /// Payload file (JSON, or YAML for any other extension).
    #[clap(long)]
    pub instance: PathBuf,
}

/// Executes the validation. Violations are returned as `AppError::Validation`.
pub fn execute(args: &ValidateArgs, document: &ResolvedDocument) -> AppResult<()> {
    let instance = read_value_file(&args.instance)?;
    let resolved = check_case(document, &args.response.case(), &instance)?;
    tracing::info!(template = resolved.template, "payload conforms");
    println!("ok");
    Ok(())
}
