//! Handlers for `/subjects` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/subjects` | All subjects, id order |
//! | `POST` | `/subjects` | Body: `{"name":"Math"}` |
//! | `GET`  | `/subjects/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{NewSubject, Subject},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /subjects`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Subject>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let subjects = store
    .list_subjects()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(subjects))
}

/// `POST /subjects` — body: `{"name":"Math"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewSubject>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let subject = store
    .add_subject(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(subject)))
}

/// `GET /subjects/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Subject>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let subject = store
    .get_subject(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Subject not found".to_string()))?;
  Ok(Json(subject))
}
