//! Handlers for `/class-teachers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/class-teachers` | All links, id order |
//! | `POST` | `/class-teachers` | Body: `{"teacher_id":1,"class_id":2}` |
//! | `GET`  | `/class-teachers/:id` | 404 if not found |
//!
//! Duplicate (teacher_id, class_id) pairs are permitted.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{ClassTeacher, NewClassTeacher},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /class-teachers`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ClassTeacher>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let links = store
    .list_class_teachers()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(links))
}

/// `POST /class-teachers` — body: `{"teacher_id":1,"class_id":2}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewClassTeacher>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let link = store
    .add_class_teacher(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(link)))
}

/// `GET /class-teachers/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<ClassTeacher>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let link = store
    .get_class_teacher(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("ClassTeacher not found".to_string()))?;
  Ok(Json(link))
}
