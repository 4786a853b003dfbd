//! gridfacts - A CLI explaining why cities depend on fossil-fuel power and
//! which clean alternatives replace it
//!
//! This library provides the static energy datasets (fossil-fuel dependencies,
//! clean alternatives, outage impacts) and the query filter that narrows the
//! dependency list for display.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod dataset;
pub mod filter;
pub mod models;
pub mod output;
pub mod paths;
