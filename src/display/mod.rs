//! Terminal display module
//!
//! Prints status lines with highlighted paths, with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_status;
