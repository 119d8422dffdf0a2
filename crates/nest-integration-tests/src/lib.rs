//! Integration test crate for the LinkNest core engines.
//!
//! This crate has no library code — it only contains integration tests
//! that exercise checkout and upload flows across the workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p nest-integration-tests
//! ```
