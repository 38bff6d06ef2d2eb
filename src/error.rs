//! Error types for parsing navigation intents and sort keys.

use thiserror::Error;

/// Failure to parse a sort key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sort key: {0:?}")]
pub struct SortKeyError(pub String);

/// Failure to parse a navigation intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown intent: {0:?}")]
    UnknownIntent(String),

    #[error("invalid percent-encoding in parameter {param:?}")]
    InvalidEncoding { param: String },
}
