//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! expense splitter test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made ledgers for the common split scenarios
//! - `builders`: Builder for constructing ledgers in tests
//! - `assertions`: Custom assertion helpers for balances and plans
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
