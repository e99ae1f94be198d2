//! Logging setup for the command-line tool.
//!
//! Output goes to stderr so key material printed on stdout stays pipeable.

use tracing_subscriber::{
  filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Set `LOG_LINE_NUM=1` to include file and line in log lines.
pub const LINE_NUM_ENVVAR: &str = "LOG_LINE_NUM";

/// Builds the `EnvFilter`; `verbose` adds a global `debug` directive.
pub fn filter(verbose: bool) -> EnvFilter {
  let filt = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
  if verbose {
    filt.add_directive(LevelFilter::DEBUG.into())
  } else {
    filt
  }
}

/// Initializes the global subscriber. Safe to call once per process; later
/// calls are ignored.
pub fn init(verbose: bool) {
  let line_num = std::env::var(LINE_NUM_ENVVAR).is_ok_and(|v| v == "1");

  let stderr_sub = tracing_subscriber::fmt::layer()
    .compact()
    .with_writer(std::io::stderr)
    .with_file(line_num)
    .with_line_number(line_num)
    .with_filter(filter(verbose));

  let _ = tracing_subscriber::registry().with(stderr_sub).try_init();
}
