//! Testing infrastructure for pricebook integration tests.
//!
//! - `TestWorld`: fluent interface for isolated CLI test environments
//! - `assertions`: assertions over `list --format json` output

pub mod assertions;
pub mod world;

pub use world::{CommandResult, TestWorld};
