//! Error handling for InkKit core
//!
//! The placement and positioning code itself cannot fail; these errors cover
//! lookups driven by user configuration.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for InkKit core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A toolbar name that is not in the toolbar definition table
    #[error("Unknown toolbar: {name}")]
    UnknownToolbar {
        /// The unknown toolbar name.
        name: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
