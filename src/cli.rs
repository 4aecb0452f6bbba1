//! Command-line interface implementation for gobundle.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for gobundle.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gobundle: packs file contents into generated Go source for go generate",
    long_about = None
)]
pub struct Args {
    /// Files to include in the generated output
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// File to write generated code to (stdout if not provided)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Prefix for generated identifiers
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Use const instead of var for the declaration block
    #[arg(short = 'c', long = "const")]
    pub use_const: bool,

    /// Override package name of the generated file.
    /// When omitted, the package name is detected from Go sources in the
    /// current working directory.
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Derive identifiers from the full filename including its extension
    /// (by default the extension is stripped first)
    #[arg(long)]
    pub full_name: bool,

    /// Verbose output; print the name of each file as it is processed
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
