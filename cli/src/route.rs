#![deny(missing_docs)]

//! # Route Command
//!
//! Resolves a concrete request path to its declared template.

use oas_contract_core::{AppResult, ResolvedDocument, RouteTable, Unresolved};

/// Arguments for the route command.
#[derive(clap::Args, Debug, Clone)]
pub struct RouteArgs {
    /// Concrete request path, e.g. `/users/42`.
    pub path: String,
}

/// Executes the route lookup and prints the template plus captured parameters.
pub fn execute(args: &RouteArgs, document: &ResolvedDocument) -> AppResult<()> {
    println!("{}", render(args, document)?);
    Ok(())
}

fn render(args: &RouteArgs, document: &ResolvedDocument) -> AppResult<String> {
    let table = RouteTable::from_document(document);
    let found = table.find(&args.path).ok_or_else(|| Unresolved::NoMatch {
        path: args.path.clone(),
    })?;

    let mut out = found.template.as_str().to_string();
    for (name, value) in &found.params {
        out.push_str(&format!("\n  {} = {}", name, value));
    }
    Ok(out)
}
