//! Shared test fixtures for MapColor crates.
//!
//! This crate provides problem instances and checks for testing.
//! It depends on `mapcolor-core` only so every other crate can use it.
//!
//! - [`fixtures`] - Small maps with known answers
//! - [`check`] - Validity checks over a [`SolverResult`](mapcolor_core::SolverResult)
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! mapcolor-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use mapcolor_test::fixtures::{triangle, six_region_map};
//! use mapcolor_test::check::assert_proper_coloring;
//! ```

pub mod check;
pub mod fixtures;

pub use check::{assert_proper_coloring, is_proper};
