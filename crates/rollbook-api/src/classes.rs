//! Handlers for `/classes` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/classes` | All classes, id order |
//! | `POST` | `/classes` | Body: `{"name":"Class A"}` |
//! | `GET`  | `/classes/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{Class, NewClass},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /classes`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Class>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let classes = store
    .list_classes()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(classes))
}

/// `POST /classes` — body: `{"name":"Class A"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewClass>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let class = store
    .add_class(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(class)))
}

/// `GET /classes/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Class>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let class = store
    .get_class(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Class not found".to_string()))?;
  Ok(Json(class))
}
