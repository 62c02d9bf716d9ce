//! Logging bridge for markpane
//!
//! Routes every `log::info!()`, `log::warn!()` etc. to stderr as
//! `[secs.micros] [LEVEL] [target] message` lines, keeping stdout free for
//! command output.
//!
//! Level precedence: the `--log-level` CLI flag, then `RUST_LOG`, then the
//! `log_level` config value (applied once the config is loaded).

use markpane_config::LogLevel;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Global stderr logger
struct LogBridge {
    /// Level came from the CLI flag or `RUST_LOG` and must not be overridden
    explicit: bool,
    /// Serializes writes so lines from different threads never interleave
    sink: Mutex<()>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _guard = self.sink.lock();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the level fixed by the CLI flag or, failing that, by `RUST_LOG`.
///
/// `RUST_LOG` is honoured when it is a bare level name (`debug`, `WARN`);
/// per-module filters are not supported.
fn resolve_level(cli_level: Option<LogLevel>, rust_log: Option<&str>) -> Option<LogLevel> {
    cli_level.or_else(|| rust_log.and_then(LogLevel::parse))
}

/// Install the bridge as the global logger.
///
/// Until [`apply_config_level`] runs, the level is the CLI/env one or the
/// default (`warn`). Calling this twice has no further effect.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG").ok();
    let explicit = resolve_level(cli_level, env_level.as_deref());

    let bridge = LOGGER.get_or_init(|| LogBridge {
        explicit: explicit.is_some(),
        sink: Mutex::new(()),
    });
    if log::set_logger(bridge).is_err() {
        return;
    }
    log::set_max_level(explicit.unwrap_or_default().to_level_filter());
}

/// Apply the configured level unless the CLI flag or `RUST_LOG` already chose one
pub fn apply_config_level(level: LogLevel) {
    match LOGGER.get() {
        Some(bridge) if !bridge.explicit => log::set_max_level(level.to_level_filter()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flag_wins_over_env() {
        assert_eq!(
            resolve_level(Some(LogLevel::Error), Some("trace")),
            Some(LogLevel::Error)
        );
    }

    #[test]
    fn test_env_used_without_flag() {
        assert_eq!(resolve_level(None, Some("DEBUG")), Some(LogLevel::Debug));
    }

    #[test]
    fn test_module_filters_are_ignored() {
        assert_eq!(resolve_level(None, Some("markpane=debug")), None);
        assert_eq!(resolve_level(None, None), None);
    }

    #[test]
    fn test_timestamp_format() {
        let ts = get_timestamp();
        let (secs, micros) = ts.split_once('.').unwrap();
        assert!(secs.parse::<u64>().is_ok());
        assert_eq!(micros.len(), 6);
    }
}
