//! Core library components.
//!
//! Loading secrets files and launching children with them. Nothing in here
//! prints to the terminal or reads process-wide state except the child
//! launch itself.

pub mod config;
pub mod constants;
pub mod launch;
pub mod secrets;
pub mod types;
pub mod validation;
