//! Run configuration for gobundle.
//! Holds every setting the bundling components need, resolved once from the
//! command line and immutable for the lifetime of the run.

use std::path::PathBuf;

use crate::cli::Args;
use crate::ident::NamingStrategy;

/// The keyword used for the generated declaration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Var,
    Const,
}

impl DeclKind {
    /// Returns the Go keyword for this declaration kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Var => "var",
            DeclKind::Const => "const",
        }
    }
}

/// Immutable settings for a single bundling run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output file path; stdout when `None`
    pub out_file: Option<PathBuf>,
    /// Explicit package name; auto-detected from the working directory when `None`
    pub pkg_name: Option<String>,
    /// Prefix prepended to every generated identifier
    pub prefix: String,
    /// Whether to emit a `var` or a `const` block
    pub decl: DeclKind,
    /// How identifiers are derived from file names
    pub naming: NamingStrategy,
    /// Print each processed file name to the log
    pub verbose: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            out_file: args.out.clone(),
            pkg_name: args.pkg.clone(),
            prefix: args.prefix.clone(),
            decl: if args.use_const { DeclKind::Const } else { DeclKind::Var },
            naming: if args.full_name {
                NamingStrategy::FullFileName
            } else {
                NamingStrategy::StripExtension
            },
            verbose: args.verbose,
        }
    }
}
