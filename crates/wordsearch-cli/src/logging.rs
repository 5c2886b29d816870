use log::LevelFilter;
use std::env;

/// Initialize logging for the command line tool.
///
/// Logs go to stderr so `--json` output on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `verbose`.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // Tests may initialize more than once
    let _ = builder.try_init();
    log::debug!("logger initialized at {:?} level", level);
}
