//! gobundle's main application entry point.
//! Handles command-line argument parsing, logger setup and delegates the
//! bundling run to the library, reporting any failure as a one-line
//! diagnostic with a non-zero exit status.

use gobundle::{
    bundler::Bundler,
    cli::get_args,
    config::Config,
    error::default_error_handler,
};

fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = Config::from(&args);
    let bundler = Bundler::new(config);

    if let Err(err) = bundler.process_files(&args.files) {
        default_error_handler(err);
    }
}
