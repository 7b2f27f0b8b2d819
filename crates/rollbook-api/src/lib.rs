//! JSON REST API for rollbook.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rollbook_core::store::SchoolStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rollbook_api::api_router(store.clone()))
//! ```

pub mod class_teachers;
pub mod classes;
pub mod error;
pub mod grades;
pub mod rankings;
pub mod students;
pub mod subjects;
pub mod teachers;

use std::sync::Arc;

use axum::{Router, routing::get};
use rollbook_core::store::SchoolStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SchoolStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Classes
    .route("/classes", get(classes::list::<S>).post(classes::create::<S>))
    .route("/classes/{id}", get(classes::get_one::<S>))
    // Subjects
    .route("/subjects", get(subjects::list::<S>).post(subjects::create::<S>))
    .route("/subjects/{id}", get(subjects::get_one::<S>))
    // Students
    .route("/students", get(students::list::<S>).post(students::create::<S>))
    .route(
      "/students/{id}",
      get(students::get_one::<S>).delete(students::delete_one::<S>),
    )
    // Teachers
    .route("/teachers", get(teachers::list::<S>).post(teachers::create::<S>))
    .route("/teachers/{id}", get(teachers::get_one::<S>))
    // Class-teacher links
    .route(
      "/class-teachers",
      get(class_teachers::list::<S>).post(class_teachers::create::<S>),
    )
    .route("/class-teachers/{id}", get(class_teachers::get_one::<S>))
    // Grades
    .route("/grades", get(grades::list::<S>).post(grades::create::<S>))
    .route("/grades/{id}", get(grades::get_one::<S>))
    // Rankings
    .route("/rankings", get(rankings::handler::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
