// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The interaction core never fails: gestures and controls clamp instead of
//! erroring. Errors only come from the shell around it (reading the config
//! file, reading a page catalog from disk).

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(CatalogError),
}

/// Reasons a page catalog is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog holds no page at all.
    #[error("catalog is empty")]
    Empty,

    /// Ids must be 1, 2, 3, ... in catalog order.
    #[error("page at position {position} has id {found}, expected {expected}")]
    NonDenseId {
        position: usize,
        expected: u32,
        found: u32,
    },

    /// The catalog file could not be parsed.
    #[error("malformed catalog: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Empty => "error-catalog-empty",
            CatalogError::NonDenseId { .. } => "error-catalog-ids",
            CatalogError::Malformed(_) => "error-catalog-malformed",
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
