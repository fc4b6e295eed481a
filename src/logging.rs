//! Logger setup. Logs go to stderr so stdout carries only the report.

use log::LevelFilter;

/// Initialise `pretty_env_logger` from `RUST_LOG`, defaulting to `warn`.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    let _ = builder.try_init();
}
