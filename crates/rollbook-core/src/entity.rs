//! Entity types for the school data model.
//!
//! All identifiers are opaque, engine-assigned integers (SQLite rowids).
//! Rows are plain records; relationships are carried as foreign-key ids and
//! resolved explicitly by the caller, never as lazily-loaded object graphs.
//! A stored reference is not guaranteed to resolve — deleting a student
//! leaves its grades behind, and the display layer renders such dangling
//! references as "Unknown" (see [`crate::report`]).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Class ───────────────────────────────────────────────────────────────────

/// A homeroom grouping of students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
  pub id:   i64,
  pub name: String,
}

/// Input to [`crate::store::SchoolStore::add_class`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewClass {
  pub name: String,
}

impl NewClass {
  pub fn validate(&self) -> Result<()> { non_empty("class name", &self.name) }
}

// ─── Subject ─────────────────────────────────────────────────────────────────

/// A taught subject (e.g. Math). Teachers belong to a subject; grades are
/// recorded against one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
  pub id:   i64,
  pub name: String,
}

/// Input to [`crate::store::SchoolStore::add_subject`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewSubject {
  pub name: String,
}

impl NewSubject {
  pub fn validate(&self) -> Result<()> { non_empty("subject name", &self.name) }
}

// ─── Student ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
  pub id:           i64,
  pub name:         String,
  pub age:          i64,
  pub phone_number: String,
  /// The class the student is enrolled in, if any.
  pub class_id:     Option<i64>,
}

/// Input to [`crate::store::SchoolStore::add_student`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
  pub name:         String,
  pub age:          i64,
  pub phone_number: String,
  pub class_id:     Option<i64>,
}

impl NewStudent {
  pub fn validate(&self) -> Result<()> {
    non_empty("student name", &self.name)?;
    non_empty("phone number", &self.phone_number)?;
    if self.age < 0 {
      return Err(Error::Validation("student age must not be negative".into()));
    }
    Ok(())
  }
}

// ─── Teacher ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
  pub id:         i64,
  pub name:       String,
  pub salary:     f64,
  /// The subject this teacher teaches, if assigned.
  pub subject_id: Option<i64>,
}

/// Input to [`crate::store::SchoolStore::add_teacher`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeacher {
  pub name:       String,
  pub salary:     f64,
  pub subject_id: Option<i64>,
}

impl NewTeacher {
  pub fn validate(&self) -> Result<()> {
    non_empty("teacher name", &self.name)?;
    if self.salary < 0.0 {
      return Err(Error::Validation("teacher salary must not be negative".into()));
    }
    Ok(())
  }
}

// ─── ClassTeacher ────────────────────────────────────────────────────────────

/// Join row linking a teacher to a class they teach in. Duplicate
/// (teacher_id, class_id) pairs are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTeacher {
  pub id:         i64,
  pub teacher_id: i64,
  pub class_id:   i64,
}

/// Input to [`crate::store::SchoolStore::add_class_teacher`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewClassTeacher {
  pub teacher_id: i64,
  pub class_id:   i64,
}

// ─── Grade ───────────────────────────────────────────────────────────────────

/// A single recorded score. The score is an unconstrained integer — zero and
/// negative values are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
  pub id:         i64,
  pub student_id: Option<i64>,
  pub subject_id: Option<i64>,
  pub grade:      i64,
}

/// Input to [`crate::store::SchoolStore::add_grade`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewGrade {
  pub student_id: Option<i64>,
  pub subject_id: Option<i64>,
  pub grade:      i64,
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn non_empty(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Validation(format!("{field} must not be empty")));
  }
  Ok(())
}
