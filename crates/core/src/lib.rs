//! stransi core
//!
//! Shared error type and structured logging for the stransi workspace.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod logging;

pub use error::StransiError;

/// Core result type for stransi operations
pub type Result<T> = std::result::Result<T, StransiError>;

/// Version information for stransi
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
