#![deny(missing_docs)]

//! # OAS Contract Core
//!
//! Route-template matching and response-schema resolution over fully
//! dereferenced API descriptions (Swagger 2 / OpenAPI 3).
//!
//! Flow: concrete request path → [`find_matching_template`] → template →
//! [`get_response_schema`] → schema fragment → [`validate_instance`].
//!
//! Everything here is a pure function over an immutable [`ResolvedDocument`],
//! so a loaded document can be shared across threads without locking.

/// Shared error types.
pub mod error;

/// Path normalization and template matching.
pub mod routing;

/// Resolved document model and loaders.
pub mod document;

/// Schema fragment type.
pub mod schema;

/// Response schema lookup.
pub mod resolver;

/// Payload validation against response schemas.
pub mod validation;

/// JSON / YAML export of fragments.
pub mod export;

/// End-to-end resolution of request cases.
pub mod contract;

pub use contract::{
    check_case, load_cases, resolve_case, ContractCase, ResolvedContract, Unresolved,
};
pub use document::{Operation, PathItem, ResolvedDocument, ResponseEntry};
pub use error::{AppError, AppResult};
pub use export::{fixture_file_name, render_fragment, FixtureFormat};
pub use resolver::{
    get_response_schema, locate_response, require_response_schema, MissingEntry, ResponseKey,
};
pub use routing::{
    find_matching_template, normalize, normalize_to_string, segments_match, ConcretePath,
    PathTemplate, RouteMatch, RouteTable, Segment,
};
pub use schema::SchemaFragment;
pub use validation::{validate_instance, ValidationFailure};
