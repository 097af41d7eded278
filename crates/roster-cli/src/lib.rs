//! Command-line front end for roster validation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
