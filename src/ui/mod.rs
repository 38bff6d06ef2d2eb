//! UI components module.
//!
//! Contains ratatui widgets for the header and each view.

pub mod about;
pub mod header;
pub mod landing;
pub mod list;
pub mod search;
pub mod sort;

pub use about::render_about;
pub use header::render_header;
pub use landing::render_landing;
pub use list::render_list;
pub use search::render_search;
pub use sort::{render_sort_menu, render_summary};
