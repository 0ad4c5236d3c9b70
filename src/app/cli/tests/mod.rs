//! Tests for the CLI module
//!
//! Argument parsing and the command-line side of option precedence.
