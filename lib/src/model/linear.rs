use std::fmt;

use itertools::Itertools;

use super::types::{FeatureVector, FEATURE_COLUMNS};

/// A fitted linear model: `prediction = bias + weights . features`.
///
/// Built once at startup, then shared read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
  pub weights: FeatureVector,
  pub bias: f64,
}

impl LinearModel {
  pub fn predict(&self, features: &FeatureVector) -> f64 {
    let dot: f64 = self
      .weights
      .iter()
      .zip(features.iter())
      .map(|(w, x)| w * x)
      .sum();
    self.bias + dot
  }
}

impl fmt::Display for LinearModel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let terms = FEATURE_COLUMNS
      .iter()
      .zip(self.weights.iter())
      .map(|(name, w)| format!("{:+.6} * [{}]", w, name));
    write!(f, "calories = {:.6} {}", self.bias, terms.format(" "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn predict_is_bias_plus_dot_product() {
    let model = LinearModel {
      weights: [1.0, 2.0, 0.0, -1.0, 0.5, 0.0, 0.25],
      bias: 10.0,
    };
    let input = [1.0, 1.0, 100.0, 2.0, 4.0, 9.0, 8.0];

    // 10 + 1 + 2 + 0 - 2 + 2 + 0 + 2
    assert_eq!(model.predict(&input), 15.0);
  }

  #[test]
  fn display_names_every_feature() {
    let model = LinearModel {
      weights: [0.0; 7],
      bias: 0.0,
    };
    let printed = model.to_string();
    for name in FEATURE_COLUMNS.iter() {
      assert!(printed.contains(name), "missing {} in: {}", name, printed);
    }
  }
}
