//! The `SchoolStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rollbook-store-sqlite`).
//! Higher layers (`rollbook-api`, the server binary) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::entity::{
  Class, ClassTeacher, Grade, NewClass, NewClassTeacher, NewGrade, NewStudent,
  NewSubject, NewTeacher, Student, Subject, Teacher,
};

/// Abstraction over a rollbook storage backend.
///
/// Every method is a single unit-of-work against the store: it performs its
/// reads/writes and releases the store handle on every exit path. `list_*`
/// methods return rows ordered by id ascending so listings are deterministic.
///
/// Create methods validate their input, insert one row, and return the stored
/// row with its engine-assigned id; fetching by that id yields
/// field-for-field equality with the returned value.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SchoolStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Classes ───────────────────────────────────────────────────────────

  fn add_class(
    &self,
    input: NewClass,
  ) -> impl Future<Output = Result<Class, Self::Error>> + Send + '_;

  fn list_classes(
    &self,
  ) -> impl Future<Output = Result<Vec<Class>, Self::Error>> + Send + '_;

  /// Retrieve a class by id. Returns `None` if not found.
  fn get_class(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Class>, Self::Error>> + Send + '_;

  // ── Subjects ──────────────────────────────────────────────────────────

  fn add_subject(
    &self,
    input: NewSubject,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  fn list_subjects(
    &self,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + '_;

  fn get_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + '_;

  // ── Students ──────────────────────────────────────────────────────────

  fn add_student(
    &self,
    input: NewStudent,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  fn get_student(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  /// Delete a student row. Errors if the id does not resolve; a failed
  /// delete has no side effects.
  ///
  /// Grades referencing the deleted student are left in place with a
  /// dangling reference — reads resolve them to "Unknown".
  fn delete_student(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Teachers ──────────────────────────────────────────────────────────

  fn add_teacher(
    &self,
    input: NewTeacher,
  ) -> impl Future<Output = Result<Teacher, Self::Error>> + Send + '_;

  fn list_teachers(
    &self,
  ) -> impl Future<Output = Result<Vec<Teacher>, Self::Error>> + Send + '_;

  fn get_teacher(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Teacher>, Self::Error>> + Send + '_;

  // ── Class-teacher links ───────────────────────────────────────────────

  /// Record a teacher↔class association. No uniqueness is enforced on the
  /// (teacher_id, class_id) pair.
  fn add_class_teacher(
    &self,
    input: NewClassTeacher,
  ) -> impl Future<Output = Result<ClassTeacher, Self::Error>> + Send + '_;

  fn list_class_teachers(
    &self,
  ) -> impl Future<Output = Result<Vec<ClassTeacher>, Self::Error>> + Send + '_;

  fn get_class_teacher(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ClassTeacher>, Self::Error>> + Send + '_;

  // ── Grades ────────────────────────────────────────────────────────────

  fn add_grade(
    &self,
    input: NewGrade,
  ) -> impl Future<Output = Result<Grade, Self::Error>> + Send + '_;

  fn list_grades(
    &self,
  ) -> impl Future<Output = Result<Vec<Grade>, Self::Error>> + Send + '_;

  fn get_grade(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Grade>, Self::Error>> + Send + '_;

  /// All grades recorded against `student_id`, in id order. This is the
  /// explicit lookup-by-foreign-key used by the aggregation layer; there is
  /// no implicit relationship traversal anywhere in the crate.
  fn grades_for_student(
    &self,
    student_id: i64,
  ) -> impl Future<Output = Result<Vec<Grade>, Self::Error>> + Send + '_;
}
