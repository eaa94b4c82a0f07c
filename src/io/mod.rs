//! Input/output operations for the command line front end

/// Preset model and mask pairs
pub mod catalog;
/// Command-line parsing and command execution
pub mod cli;
/// Constants and presentation defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Image loading and saving
pub mod image;
/// Batch progress display
pub mod progress;
