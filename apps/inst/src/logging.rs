//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "info,inst=debug,inst_install=debug,inst_fs=debug,inst_manifest=debug";

/// Initialize tracing once for the process
///
/// Logs go to stderr so stdout stays clean for the JSON report. In JSON mode
/// logging is off unless debug is requested, in which case records are
/// emitted as JSON lines. `RUST_LOG` overrides the default filter.
pub fn init_tracing(json_mode: bool, debug: bool) {
    let debug_enabled = debug || std::env::var("RUST_LOG").is_ok();

    if json_mode && !debug_enabled {
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
        return;
    }

    let default = if debug { DEBUG_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}
