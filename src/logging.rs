//! Logger setup for the command-line front-end.

use log::LevelFilter;

/// Initializes `env_logger` at `Info`, or `Debug` when `verbose` is set.
///
/// An explicit `RUST_LOG` takes precedence over both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
}
