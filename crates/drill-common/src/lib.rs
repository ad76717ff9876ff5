//! Common utilities for the drill crates.
//!
//! This crate provides shared infrastructure used by the selector builder,
//! the object helpers, and the command line front end:
//! - **Warning System** - colored terminal output for suspicious input that is
//!   accepted anyway

pub mod warning;
