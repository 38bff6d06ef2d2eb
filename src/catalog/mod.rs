//! Publication catalog module.
//!
//! Provides the fixed set of space-biology publications shown as search results.

pub mod models;
pub mod records;

pub use models::ResultRecord;
pub use records::RECORDS;
