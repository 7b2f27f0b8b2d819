//! Handlers for `/grades` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/grades` | [`GradeView`]s with resolved names |
//! | `POST` | `/grades` | Body: `{"student_id":1,"subject_id":2,"grade":95}` |
//! | `GET`  | `/grades/:id` | Raw stored row; 404 if not found |
//!
//! The list view resolves student and subject names by id; a null or
//! dangling reference renders as "Unknown" rather than failing. Grade scores
//! are unconstrained integers.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{Grade, NewGrade},
  report::{self, GradeView},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /grades`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<GradeView>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let grades = store
    .list_grades()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let students = store
    .list_students()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let subjects = store
    .list_subjects()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(report::grade_views(&grades, &students, &subjects)))
}

/// `POST /grades` — body: `{"student_id":1,"subject_id":2,"grade":95}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewGrade>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let grade = store
    .add_grade(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(grade)))
}

/// `GET /grades/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Grade>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let grade = store
    .get_grade(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Grade not found".to_string()))?;
  Ok(Json(grade))
}
