//! gobundle packs the contents of given files as variables or constants into
//! an auto-generated Go source file. It is meant for use with go:generate.
//!
//! The generated code is compliant with gofmt.

/// Core bundling orchestration
/// Drives sanitization, escaping and emission across the input file list
pub mod bundler;

/// Command-line interface module for the gobundle application
pub mod cli;

/// Run configuration shared by all components
pub mod config;

/// Header and declaration block emission
pub mod emit;

/// Error types and handling for the gobundle application
pub mod error;

/// File content escaping into Go string-literal fragments
pub mod escape;

/// Identifier derivation from file names
/// Handles camel-casing, invalid character filtering and keyword rejection
pub mod ident;

/// Go package name auto-detection from the working directory
pub mod pkgname;
