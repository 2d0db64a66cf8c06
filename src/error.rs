//! Error types for this crate.
use thiserror::Error;

use std::{fmt::Display, path::PathBuf};

use crate::Sale;

/// Any kind of error that stops an input file from being loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {} does not exist", .path.display())]
    NotFound { path: PathBuf },
    #[error("file {} is not in a valid format: {source}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unexpected error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A problem with a single sales record. These are collected, never fatal.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SaleError {
    #[error("product not found: {}", ProductName(.0))]
    ProductNotFound(Option<String>),
    #[error("invalid sale data: {0}")]
    InvalidSaleData(Sale),
}

struct ProductName<'a>(&'a Option<String>);

impl Display for ProductName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(name) => f.write_str(name),
            None => f.write_str("<none>"),
        }
    }
}
