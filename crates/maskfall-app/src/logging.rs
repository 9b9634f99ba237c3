use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. `RUST_LOG` overrides the default level.
///
/// When `verbose` is `true`, debug messages are printed. Otherwise only
/// info level and above are shown.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    // Fails only if a logger is already installed.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
