//! Command-line interface module
//!
//! The single scaffolding command: resolve the settings, validate names,
//! create the directory and write the template.

pub mod app;
