#![deny(missing_docs)]

//! # Fixtures Command
//!
//! Resolves every row of a case table and writes one schema fixture per row.

use crate::schema::write_output;
use oas_contract_core::{
    fixture_file_name, load_cases, render_fragment, resolve_case, AppError, AppResult,
    FixtureFormat, ResolvedDocument, ResponseKey,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Arguments for the fixtures command.
#[derive(clap::Args, Debug, Clone)]
pub struct FixturesArgs {
    /// Case table: a YAML or JSON list of `{path, method, status}` rows.
    #[clap(long)]
    pub cases: PathBuf,

    /// Directory receiving the fixture files.
    #[clap(long, default_value = "fixtures")]
    pub out_dir: PathBuf,

    /// Fixture format (`json` or `yaml`).
    #[clap(long, default_value = "json")]
    pub format: FixtureFormat,
}

/// Executes the fixture generation.
///
/// Every row is attempted; unresolved rows are logged and make the command
/// fail once all resolvable rows have been written. Rows resolving to the same
/// response share one fixture. Two different responses whose file names
/// collide fail the command before the first file is overwritten.
pub fn execute(args: &FixturesArgs, document: &ResolvedDocument) -> AppResult<()> {
    let written = generate(args, document)?;
    println!("Generated {} fixtures in {:?}", written.len(), args.out_dir);
    Ok(())
}

fn generate(args: &FixturesArgs, document: &ResolvedDocument) -> AppResult<Vec<PathBuf>> {
    let cases = load_cases(&args.cases)?;
    let mut written = Vec::with_capacity(cases.len());
    let mut unresolved = 0usize;
    // file -> query of the response it holds
    let mut issued: HashMap<PathBuf, String> = HashMap::with_capacity(cases.len());

    for case in &cases {
        let resolved = match resolve_case(document, case) {
            Ok(resolved) => resolved,
            Err(reason) => {
                tracing::warn!(
                    path = case.path.as_str(),
                    method = case.method.as_str(),
                    status = case.status.as_str(),
                    %reason,
                    "skipping unresolved case"
                );
                unresolved += 1;
                continue;
            }
        };

        let key = ResponseKey::new(resolved.template, &case.method, &case.status);
        let out_path = fixture_path(&args.out_dir, &key, args.format);
        let query = key.to_string();
        match issued.get(&out_path) {
            Some(previous) if *previous == query => continue,
            Some(previous) => {
                return Err(AppError::General(format!(
                    "Fixture {:?} would hold both `{}` and `{}`",
                    out_path, previous, query
                )));
            }
            None => {}
        }
        write_output(&out_path, &render_fragment(resolved.schema, args.format)?)?;
        tracing::debug!(query = %key, file = %out_path.display(), "fixture written");
        issued.insert(out_path.clone(), query);
        written.push(out_path);
    }

    if unresolved > 0 {
        return Err(AppError::General(format!(
            "{} of {} cases could not be resolved",
            unresolved,
            cases.len()
        )));
    }
    Ok(written)
}

fn fixture_path(out_dir: &Path, key: &ResponseKey<'_>, format: FixtureFormat) -> PathBuf {
    out_dir.join(fixture_file_name(key, format))
}
