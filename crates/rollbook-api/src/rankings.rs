//! Handler for the `/rankings` endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/rankings` | Students ranked by total grade, descending |
//!
//! A computed reporting view — never persisted. Ties keep listing order and
//! a student with no grades totals (and averages) zero.

use std::sync::Arc;

use axum::{Json, extract::State};
use rollbook_core::{
  report::{self, RankEntry},
  store::SchoolStore,
};

use crate::error::ApiError;

/// `GET /rankings`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<RankEntry>>, ApiError>
where
  S: SchoolStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let students = store
    .list_students()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let grades = store
    .list_grades()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(report::rank(&students, &grades)))
}
