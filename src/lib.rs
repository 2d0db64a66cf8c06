#![doc = include_str!("../README.md")]
mod catalogue;
pub use catalogue::*;

mod error;
pub use error::*;

mod loader;
pub use loader::*;

mod report;
pub use report::*;

mod sale;
pub use sale::*;

mod usd;
pub use usd::*;

/// The file the results block is written to, unless told otherwise.
pub const DEFAULT_RESULTS_FILE: &str = "SalesResults.txt";
