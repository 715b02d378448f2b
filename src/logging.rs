//! Logger setup for the demo.
//!
//! Everything in the crate logs through the `log` facade; `env_logger` is the
//! backend installed here. Init failures and shader diagnostics go out at
//! `error`, lifecycle events at `info`, resource release and frame-rate
//! samples at `debug`.

use std::sync::Once;

use log::LevelFilter;

/// Level used when neither the config nor `RUST_LOG` names a filter.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Logger configuration carried inside `DemoConfig`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter in `env_logger` syntax (e.g. "debug", "spinmesh=debug").
    /// Takes priority over `RUST_LOG` when set.
    pub env_filter: Option<String>,

    /// Whether log lines are colored.
    pub write_style: env_logger::WriteStyle,

    /// Prefix each line with a millisecond timestamp. Useful when reading the
    /// once-per-second frame-rate samples.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    /// A filter string, from the config or from `RUST_LOG`.
    Spec(String),
    /// Nothing was given; fall back to [`DEFAULT_LEVEL`].
    Default,
}

/// Chooses the filter: the config's explicit filter wins, then a non-empty
/// `RUST_LOG`, then the default level.
///
/// # Parameters
/// - `explicit`: the filter from `LoggingConfig::env_filter`.
/// - `env`: the value of `RUST_LOG`, if it is set.
fn resolve_filter(explicit: Option<String>, env: Option<String>) -> FilterSource {
    explicit
        .or(env)
        .filter(|spec| !spec.trim().is_empty())
        .map_or(FilterSource::Default, FilterSource::Spec)
}

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Call it first thing in `main`, before the window is created, so that
/// backend and context failures are reported through it.
///
/// # Parameters
/// - `config`: filter, color and timestamp settings.
///
/// # Panics
/// Never. Only the first call does anything. If another logger is already
/// installed (for example by a test harness), that logger is kept and this
/// call does nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            FilterSource::Spec(spec) => {
                builder.parse_filters(&spec);
            }
            FilterSource::Default => {
                builder.filter_level(DEFAULT_LEVEL);
            }
        }

        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_environment() {
        assert_eq!(
            resolve_filter(Some("debug".into()), Some("warn".into())),
            FilterSource::Spec("debug".into())
        );
    }

    #[test]
    fn environment_used_when_no_explicit_filter() {
        assert_eq!(
            resolve_filter(None, Some("spinmesh=trace".into())),
            FilterSource::Spec("spinmesh=trace".into())
        );
    }

    #[test]
    fn blank_or_missing_filters_fall_back_to_default() {
        assert_eq!(resolve_filter(None, None), FilterSource::Default);
        assert_eq!(resolve_filter(None, Some("  ".into())), FilterSource::Default);
        assert_eq!(resolve_filter(Some(String::new()), None), FilterSource::Default);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        log::info!("still alive after second init");
    }
}
