use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::{FeatureVector, LinearModel};

/// Serves the trained model over HTTP.
///
/// The model is immutable after startup and held in a shared read-only
/// handle, so concurrent requests on the multi-threaded runtime need no
/// locking. Each request is stateless.
pub struct Server {
  port: u16,
  model: Arc<LinearModel>,
}

/// One prediction request. The typed schema replaces dynamic key lookup:
/// a missing or non-numeric field is rejected before prediction runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
  pub age: f64,
  pub weight: f64,
  pub duration: f64,
  pub steps: f64,
  pub heart_rate: f64,
  pub sleep: f64,
  pub daily_calories: f64,
}

impl PredictRequest {
  // same order as FEATURE_COLUMNS, which the model was trained on
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

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
  pub calories: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
}

#[derive(Debug, Error)]
pub enum ServeError {
  #[error("failed to bind {addr}: {source}")]
  Bind { addr: String, source: std::io::Error },
  #[error("server stopped: {0}")]
  Serve(std::io::Error),
}

impl Server {
  pub fn new(port: u16, model: LinearModel) -> Self {
    Self {
      port,
      model: Arc::new(model),
    }
  }

  pub fn router(model: Arc<LinearModel>) -> Router {
    Router::new().route("/predict", post(predict)).with_state(model)
  }

  pub async fn run(self) -> Result<(), ServeError> {
    let addr = format!("0.0.0.0:{}", self.port);
    let listener = tokio::net::TcpListener::bind(&addr)
      .await
      .map_err(|source| ServeError::Bind {
        addr: addr.clone(),
        source,
      })?;
    info!("listening on {}", addr);

    axum::serve(listener, Self::router(self.model))
      .await
      .map_err(ServeError::Serve)
  }
}

async fn predict(
  State(model): State<Arc<LinearModel>>,
  payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Response {
  match payload {
    Ok(Json(request)) => {
      let estimate = model.predict(&request.features());
      // truncate toward zero, matching the integer wire contract
      let response = PredictResponse {
        calories: estimate as i64,
      };
      (StatusCode::OK, Json(response)).into_response()
    }
    Err(rejection) => {
      let response = ErrorResponse {
        error: rejection.body_text(),
      };
      (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
  }
}
