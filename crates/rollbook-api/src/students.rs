//! Handlers for `/students` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/students` | [`StudentView`]s with resolved class names |
//! | `POST` | `/students` | Body: [`NewStudent`] |
//! | `GET`  | `/students/:id` | Raw stored row; 404 if not found |
//! | `DELETE` | `/students/:id` | 404 with "Student not found" if absent |
//!
//! The list view resolves each student's class by id; a null or dangling
//! `class_id` renders as "Unknown". Deleting a student leaves its grades
//! behind (see [`rollbook_core::report`]).

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rollbook_core::{
  entity::{NewStudent, Student},
  report::{self, StudentView},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /students`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StudentView>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let students = store
    .list_students()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let classes = store
    .list_classes()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(report::student_views(&students, &classes)))
}

/// `POST /students` — body: [`NewStudent`]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewStudent>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  body.validate()?;
  let student = store
    .add_student(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(student)))
}

/// `GET /students/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Student>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let student = store
    .get_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;
  Ok(Json(student))
}

/// `DELETE /students/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .get_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;
  store
    .delete_student(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
