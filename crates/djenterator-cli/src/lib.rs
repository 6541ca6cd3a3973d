//! Djenterator CLI library
//!
//! Command implementations and helpers behind the `djenterator` binary, exposed
//! as a library so integration tests can drive them directly.

pub mod commands;
pub mod input;
pub mod logging;
pub mod output;
