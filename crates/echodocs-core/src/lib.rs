//! # echodocs-core - Core Domain Types
//!
//! Foundation crate for echodocs. Provides the content document model,
//! the section filter engine, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`Section`] - One documentation entry: id, title, optional subtitle, blocks
//! - [`Block`] - Tagged union of content block kinds (hr, paragraph, list,
//!   code, echoGet, echoPost)
//! - [`ContentStore`] - The parsed document, loaded once and read-only
//!
//! ### Filtering (`filter`)
//! - [`filter()`] - Derive the visible subsequence of sections for a query
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use echodocs_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod filter;
pub mod logging;
pub mod text;

/// Prelude for common imports used throughout all echodocs crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{Block, ContentStore, Section};
pub use error::{Error, Result, ResultExt};
pub use filter::filter;
pub use text::strip_html;
