//! Command-line surface: CSV command files replayed through the dispatcher.

pub mod console;
pub mod csv;
