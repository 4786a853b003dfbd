//! Data models for gridfacts
//!
//! Core abstractions:
//! - Dependency: a fossil-fuel power source cities rely on, with the reason
//!   it is common, its issue tags, and example deployment locations
//! - Solution: a clean alternative, described by bullet points
//! - Impact: a consequence of outages and fossil dependency
//! - Blueprint: an ordered starter plan for a school or small business

pub mod dependency;
pub mod impact;
pub mod solution;

pub use dependency::Dependency;
pub use impact::Impact;
pub use solution::{Blueprint, Solution};
