//! gridfacts - A CLI explaining why cities depend on fossil-fuel power and
//! which clean alternatives replace it
//!
//! Each subcommand renders one section of the story: the fossil-fuel
//! dependencies cities run on today, the impacts of outages, the clean
//! alternatives, and a starter blueprint for switching. `search` narrows the
//! dependency list by a free-text query.

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

mod cli;

/// Main entry point for the gridfacts CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
