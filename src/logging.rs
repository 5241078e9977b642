//! Logger setup. Records go to stderr so stdout carries only the report.

/// Primary filter variable; `RUST_LOG` is consulted when it is unset.
pub const LOG_ENV: &str = "WC_ANALOGUE_LOG";

/// Install the `env_logger` backend. Logging is off unless a filter is given.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let fallback = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());
    let env = env_logger::Env::new().filter_or(LOG_ENV, fallback);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .target(env_logger::Target::Stderr)
        .try_init();
}
