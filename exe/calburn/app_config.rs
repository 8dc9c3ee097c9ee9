use std::path::PathBuf;

use serde::Deserialize;

/// Config file format for the serve command (Option fields can be omitted).
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
  /// Port the prediction service listens on
  pub port: Option<u16>,
  /// Path to the workout dataset
  pub dataset: Option<PathBuf>,
}

impl AppConfig {
  // merge configs where the second overwrites the first
  pub fn merge(self, other: Self) -> Self {
    Self {
      port: other.port.or(self.port),
      dataset: other.dataset.or(self.dataset),
    }
  }
}
