pub const FEATURE_DIMENSION: usize = 7;

/// Model input, in the fixed column order below.
pub type FeatureVector = [f64; FEATURE_DIMENSION];

/// Dataset column headers, in training order. The prediction request must
/// assemble its vector in this same order.
pub const FEATURE_COLUMNS: [&str; FEATURE_DIMENSION] = [
  "Age",
  "Weight (kg)",
  "Duration",
  "Steps Taken",
  "Heart Rate (bpm)",
  "Sleep Hours",
  "Daily Calories Intake",
];

pub const TARGET_COLUMN: &str = "Calories Burned";

/// Rows loaded from the dataset file, split into model inputs and targets.
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
  pub features: Vec<FeatureVector>,
  pub targets: Vec<f64>,
}

impl Dataset {
  pub fn len(&self) -> usize {
    self.features.len()
  }

  pub fn is_empty(&self) -> bool {
    self.features.is_empty()
  }
}
