//! Handlers for `/teachers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/teachers` | All teachers, id order |
//! | `POST` | `/teachers` | Body: [`NewTeacher`] |
//! | `GET`  | `/teachers/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{NewTeacher, Teacher},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /teachers`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Teacher>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let teachers = store
    .list_teachers()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(teachers))
}

/// `POST /teachers` — body: [`NewTeacher`]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewTeacher>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let teacher = store
    .add_teacher(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(teacher)))
}

/// `GET /teachers/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Teacher>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let teacher = store
    .get_teacher(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Teacher not found".to_string()))?;
  Ok(Json(teacher))
}
