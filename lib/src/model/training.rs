use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use super::linear::LinearModel;
use super::types::{Dataset, FEATURE_DIMENSION};

#[derive(Debug, Error)]
pub enum TrainError {
  #[error("cannot fit a model on an empty dataset")]
  EmptyDataset,
  #[error("normal equations are singular; dataset features are linearly dependent")]
  Singular,
}

/// Ordinary least squares with an intercept term, solved in closed form via
/// the normal equations `(X^T X) w = X^T y`.
///
/// No hyperparameters, no regularization, no train/test split. The solve is
/// deterministic, so the same dataset yields the same weights on every run.
pub fn fit(data: &Dataset) -> Result<LinearModel, TrainError> {
  if data.is_empty() {
    return Err(TrainError::EmptyDataset);
  }

  // design matrix: one row per observation, trailing column of ones for the intercept
  let rows = data.features.len();
  let mut design = DMatrix::zeros(rows, FEATURE_DIMENSION + 1);
  for (i, features) in data.features.iter().enumerate() {
    for (j, value) in features.iter().enumerate() {
      design[(i, j)] = *value;
    }
    design[(i, FEATURE_DIMENSION)] = 1.0;
  }
  let targets = DVector::from_column_slice(&data.targets);

  let design_t = design.transpose();
  let gram = &design_t * &design;
  let moment = design_t * targets;
  let solution = gram.cholesky().ok_or(TrainError::Singular)?.solve(&moment);

  let mut weights = [0.0; FEATURE_DIMENSION];
  for (j, w) in weights.iter_mut().enumerate() {
    *w = solution[j];
  }
  Ok(LinearModel {
    weights,
    bias: solution[FEATURE_DIMENSION],
  })
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::model::types::FeatureVector;

  // twelve workout rows, varied enough for a full-rank design matrix
  fn synthetic_features() -> Vec<FeatureVector> {
    vec![
      [23.0, 62.0, 30.0, 4200.0, 112.0, 7.5, 2100.0],
      [31.0, 78.0, 45.0, 6100.0, 125.0, 6.0, 2450.0],
      [45.0, 85.5, 60.0, 8300.0, 131.0, 5.5, 2700.0],
      [52.0, 70.0, 20.0, 2500.0, 104.0, 8.0, 1900.0],
      [28.0, 90.0, 75.0, 9800.0, 142.0, 6.5, 3100.0],
      [36.0, 66.5, 40.0, 5400.0, 118.0, 7.0, 2300.0],
      [60.0, 74.0, 25.0, 3100.0, 99.0, 6.0, 2000.0],
      [19.0, 58.0, 55.0, 7200.0, 137.0, 8.5, 2250.0],
      [41.0, 95.0, 35.0, 4700.0, 121.0, 5.0, 2850.0],
      [33.0, 81.0, 50.0, 6600.0, 128.0, 7.5, 2600.0],
      [26.0, 68.0, 65.0, 8900.0, 135.0, 6.5, 2400.0],
      [48.0, 77.5, 15.0, 1800.0, 96.0, 7.0, 2150.0],
    ]
  }

  fn dataset_from(model: &LinearModel) -> Dataset {
    let features = synthetic_features();
    let targets = features.iter().map(|x| model.predict(x)).collect();
    Dataset { features, targets }
  }

  #[test]
  fn recovers_exactly_linear_data() {
    let truth = LinearModel {
      weights: [1.5, -2.0, 4.0, 0.05, 3.2, -10.0, 0.1],
      bias: 42.0,
    };
    let fitted = fit(&dataset_from(&truth)).unwrap();

    assert!((fitted.bias - truth.bias).abs() < 1e-3, "bias: {}", fitted.bias);
    for (got, want) in fitted.weights.iter().zip(truth.weights.iter()) {
      assert!((got - want).abs() < 1e-3, "got {} want {}", got, want);
    }
  }

  #[test]
  fn fit_is_deterministic() {
    let truth = LinearModel {
      weights: [0.9, 1.1, -0.3, 0.01, 2.0, -5.0, 0.2],
      bias: -7.0,
    };
    let data = dataset_from(&truth);

    let first = fit(&data).unwrap();
    let second = fit(&data).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn empty_dataset_is_rejected() {
    let data = Dataset {
      features: vec![],
      targets: vec![],
    };
    assert!(matches!(fit(&data), Err(TrainError::EmptyDataset)));
  }

  #[test]
  fn dead_feature_column_is_singular() {
    // a column that is zero everywhere carries no information
    let features: Vec<FeatureVector> = synthetic_features()
      .into_iter()
      .map(|mut row| {
        row[6] = 0.0;
        row
      })
      .collect();
    let targets = vec![100.0; features.len()];
    let data = Dataset { features, targets };

    assert!(matches!(fit(&data), Err(TrainError::Singular)));
  }

  proptest! {
    #[test]
    fn recovers_any_generating_model(
      weights in proptest::array::uniform7(-10.0..10.0f64),
      bias in -100.0..100.0f64,
    ) {
      let scope = crate::utils::init_logging_tests();
      let truth = LinearModel { weights, bias };
      let fitted = fit(&dataset_from(&truth)).unwrap();

      prop_assert!((fitted.bias - truth.bias).abs() < 1e-2);
      for (got, want) in fitted.weights.iter().zip(truth.weights.iter()) {
        prop_assert!((got - want).abs() < 1e-2, "got {} want {}", got, want);
      }
      drop(scope);
    }
  }
}
