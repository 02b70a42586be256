//! `env_logger` setup for the `shape-anneal` binary. The library only emits through
//! the `log` macros and never installs a logger itself.

use {
  env_logger::{fmt::TimestampPrecision, Builder},
  log::LevelFilter,
  std::sync::Once
};

/// Used when neither an explicit filter nor `RUST_LOG` is given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
  /// `env_logger` directives, e.g. "shape_anneal::solver=debug". Takes precedence
  /// over `RUST_LOG`.
  pub filter: Option<String>,
  /// Prefix each record with a millisecond timestamp.
  pub timestamps: bool
}

/// Install the global logger. Only the first call has an effect.
pub fn init_logging(config: &LoggingConfig) {
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    let mut builder = Builder::new();
    match directives(config.filter.as_deref(), std::env::var("RUST_LOG").ok()) {
      Some(directives) => builder.parse_filters(&directives),
      None => builder.filter_level(DEFAULT_LEVEL)
    };
    builder.format_timestamp(config.timestamps.then_some(TimestampPrecision::Millis));

    // a logger installed by an embedding program wins
    if builder.try_init().is_ok() {
      log::debug!("logger installed");
    }
  });
}

fn directives(explicit: Option<&str>, env: Option<String>) -> Option<String> {
  explicit
    .map(str::to_owned)
    .or(env)
    .filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn explicit_filter_wins() {
    assert_eq!(directives(Some("debug"), Some("warn".into())).as_deref(), Some("debug"));
    assert_eq!(directives(None, Some("warn".into())).as_deref(), Some("warn"));
    assert_eq!(directives(None, None), None);
    assert_eq!(directives(Some(" "), None), None);
  }

  #[test] fn init_twice() {
    init_logging(&LoggingConfig::default());
    init_logging(&LoggingConfig { filter: Some("trace".into()), timestamps: true });
  }
}
