//! Header and declaration block emission.
//!
//! Owns the buffered output stream and reproduces the generated-file layout
//! exactly:
//!
//! ```text
//! // Code generated automatically; DO NOT EDIT.
//!
//! package <pkgname>
//!
//! // These <var|const>s are included from files by go generate.
//! <var|const> (
//!     // file: <path>
//!     <Identifier> = "<escaped contents>"
//! )
//! ```

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::DeclKind;

/// Writes the generated-file header and one declaration block to a buffered
/// stream. The orchestrator opens the block once, writes entries in input
/// order and closes the block once.
pub struct Emitter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Emitter { out: BufWriter::new(out) }
    }

    /// Writes the auto-generated marker and the package clause.
    ///
    /// The marker follows the standard Go convention for generated code
    /// (`^// Code generated .* DO NOT EDIT.$`) so downstream tools skip the
    /// file in lint and diff workflows.
    pub fn write_header(&mut self, pkg_name: &str) -> io::Result<()> {
        writeln!(self.out, "// Code generated automatically; DO NOT EDIT.")?;
        writeln!(self.out)?;
        writeln!(self.out, "package {}", pkg_name)?;
        writeln!(self.out)
    }

    /// Writes the declaration-kind comment and the opening delimiter.
    pub fn open_block(&mut self, decl: DeclKind) -> io::Result<()> {
        writeln!(
            self.out,
            "// These {}s are included from files by go generate.",
            decl.keyword()
        )?;
        write!(self.out, "{} (", decl.keyword())
    }

    /// Starts one entry: the source-file comment, the identifier and the
    /// opening quote of the literal.
    pub fn begin_entry(&mut self, path: &Path, identifier: &str) -> io::Result<()> {
        write!(self.out, "\n\t// file: {}\n", path.display())?;
        write!(self.out, "\t{} = \"", identifier)
    }

    /// Writes one escaped-literal fragment of the current entry.
    pub fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.out.write_all(fragment.as_bytes())
    }

    /// Ends the current entry with the closing quote.
    pub fn end_entry(&mut self) -> io::Result<()> {
        writeln!(self.out, "\"")
    }

    /// Writes the closing delimiter of the declaration block.
    pub fn close_block(&mut self) -> io::Result<()> {
        writeln!(self.out, ")")
    }

    /// Flushes buffered output. Called on every exit path so partial writes
    /// are not silently lost mid-buffer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
