//! Core bundling orchestration.
//! Drives identifier derivation, content escaping and emission across the
//! input file list, strictly one file at a time in the order supplied.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::emit::Emitter;
use crate::error::Result;
use crate::escape::escape_file;
use crate::ident::identifier_for;
use crate::pkgname::resolve_pkg_name;

/// Holds the settings for the bundling process.
pub struct Bundler {
    config: Config,
}

impl Bundler {
    /// Initialises a new Bundler with the given run configuration.
    pub fn new(config: Config) -> Self {
        Bundler { config }
    }

    /// Includes each of the provided files into the output.
    ///
    /// # Arguments
    /// * `files` - Input file paths, processed in the given order
    ///
    /// # Returns
    /// * `Result<()>` - Success or the first error encountered
    ///
    /// # Errors
    /// Fails fast on the first error from any file (open failure, identifier
    /// rejection, read failure). Entries written before the failing file
    /// remain in the output, which must then be discarded by the caller.
    pub fn process_files(&self, files: &[PathBuf]) -> Result<()> {
        let out: Box<dyn Write> = match &self.config.out_file {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };
        let mut emitter = Emitter::new(out);

        // flush even when a file mid-list fails, so nothing written so far
        // is lost in the buffer
        let result = self.run(&mut emitter, files);
        let flushed = emitter.flush();
        result?;
        flushed?;

        Ok(())
    }

    fn run(&self, emitter: &mut Emitter<Box<dyn Write>>, files: &[PathBuf]) -> Result<()> {
        let pkg_name = match &self.config.pkg_name {
            Some(name) => name.clone(),
            None => resolve_pkg_name(Path::new("."))?,
        };

        emitter.write_header(&pkg_name)?;
        emitter.open_block(self.config.decl)?;

        for file in files {
            if self.config.verbose {
                debug!("processing file: {}", file.display());
            }

            let identifier = identifier_for(file, &self.config.prefix, self.config.naming)?;
            emitter.begin_entry(file, &identifier)?;
            for fragment in escape_file(file)? {
                emitter.write_fragment(&fragment?)?;
            }
            emitter.end_entry()?;
        }

        emitter.close_block()?;
        Ok(())
    }
}
