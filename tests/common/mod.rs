//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Deterministic and failing fake-data providers
//! - A recording observer for diagnostics
//! - Custom assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
