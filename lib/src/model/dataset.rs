use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::types::{Dataset, FeatureVector};

/// One row of the workout dataset, keyed by the CSV header names.
#[derive(Debug, Deserialize)]
pub struct WorkoutRecord {
  #[serde(rename = "Age")]
  pub age: f64,
  #[serde(rename = "Weight (kg)")]
  pub weight: f64,
  #[serde(rename = "Duration")]
  pub duration: f64,
  #[serde(rename = "Steps Taken")]
  pub steps: f64,
  #[serde(rename = "Heart Rate (bpm)")]
  pub heart_rate: f64,
  #[serde(rename = "Sleep Hours")]
  pub sleep: f64,
  #[serde(rename = "Daily Calories Intake")]
  pub daily_calories: f64,
  #[serde(rename = "Calories Burned")]
  pub calories_burned: f64,
}

impl WorkoutRecord {
  // same order as FEATURE_COLUMNS
  pub fn features(&self) -> FeatureVector {
    [
      self.age,
      self.weight,
      self.duration,
      self.steps,
      self.heart_rate,
      self.sleep,
      self.daily_calories,
    ]
  }
}

#[derive(Debug, Error)]
pub enum DatasetError {
  #[error("failed to open dataset {}: {}", path.display(), source)]
  Open { path: PathBuf, source: io::Error },
  #[error("dataset row {row}: {source}")]
  Decode { row: usize, source: csv::Error },
  #[error("dataset has no rows")]
  Empty,
}

/// Header-driven CSV decode. A missing column surfaces as a missing-field
/// error on the first row; a non-numeric cell carries its row number.
pub fn parse_dataset<R: io::Read>(reader: R) -> Result<Dataset, DatasetError> {
  let mut csv_reader = csv::Reader::from_reader(reader);
  let mut features = Vec::new();
  let mut targets = Vec::new();

  for (row, record) in csv_reader.deserialize::<WorkoutRecord>().enumerate() {
    let record = record.map_err(|source| DatasetError::Decode { row: row + 1, source })?;
    features.push(record.features());
    targets.push(record.calories_burned);
  }

  if features.is_empty() {
    return Err(DatasetError::Empty);
  }
  Ok(Dataset { features, targets })
}

pub fn read_dataset(path: &Path) -> Result<Dataset, DatasetError> {
  let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
    path: path.to_path_buf(),
    source,
  })?;
  parse_dataset(io::BufReader::new(file))
}
