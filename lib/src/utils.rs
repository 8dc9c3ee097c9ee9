#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

#[cfg(debug_assertions)]
extern crate better_panic;

use tracing::subscriber::SetGlobalDefaultError;

pub fn install_logger() -> Result<(), SetGlobalDefaultError> {
  let subscriber = tracing_subscriber::fmt().compact().finish();
  tracing::subscriber::set_global_default(subscriber)
}

/// Panic reporting plus a compact global tracing subscriber. Call once from
/// the binary entry point.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
  // Human Panic. Only enabled when *not* debugging.
  #[cfg(not(debug_assertions))]
  {
    setup_panic!();
  }

  // Better Panic. Only enabled *when* debugging.
  #[cfg(debug_assertions)]
  {
    better_panic::Settings::debug()
      .most_recent_first(false)
      .lineno_suffix(true)
      .verbosity(better_panic::Verbosity::Full)
      .install();
  }

  install_logger()?;

  Ok(())
}

/// Thread-local subscriber for tests. Keep the returned guard alive for the
/// duration of the test body.
pub fn init_logging_tests() -> tracing::subscriber::DefaultGuard {
  let subscriber = tracing_subscriber::fmt()
    .compact()
    .with_test_writer()
    .finish();
  tracing::subscriber::set_default(subscriber)
}
