//! Error type shared by the control crates.

use thiserror::Error;

/// Errors raised by the switch control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No cursor drawable has been supplied, so no geometry can be computed.
    #[error("switch is not configured: a cursor drawable is required")]
    NotConfigured,
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
