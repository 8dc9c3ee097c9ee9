use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::info;

use super::server::PredictRequest;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("failed to read input {}: {}", path.display(), source)]
  Input { path: PathBuf, source: std::io::Error },
  #[error("input is not a valid prediction request: {0}")]
  Parse(serde_json::Error),
  #[error("failed to encode request: {0}")]
  Encode(serde_json::Error),
  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),
}

/// Posts one prediction request to a running server and prints the reply.
/// Command-line counterpart of the browser form that fronts this service.
#[derive(Debug)]
pub struct Client {
  url: String,
  request: PredictRequest,
}

impl Client {
  pub fn new(input_path: &Path, url: String) -> Result<Self, ClientError> {
    let content = std::fs::read_to_string(input_path).map_err(|source| ClientError::Input {
      path: input_path.to_path_buf(),
      source,
    })?;
    let request = serde_json::from_str(&content).map_err(ClientError::Parse)?;
    Ok(Self { url, request })
  }

  pub async fn run(self) -> Result<(), ClientError> {
    let client = reqwest::Client::new();

    let body = serde_json::to_string(&self.request).map_err(ClientError::Encode)?;
    let response = client
      .post(&self.url)
      .header(CONTENT_TYPE, "application/json")
      .body(body)
      .send()
      .await?;

    info!("response status {}", response.status());
    let text = response.text().await?;
    println!("{}", text);
    Ok(())
  }
}
