//! [`SqliteStore`] — the SQLite implementation of [`SchoolStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rollbook_core::{
  entity::{
    Class, ClassTeacher, Grade, NewClass, NewClassTeacher, NewGrade,
    NewStudent, NewSubject, NewTeacher, Student, Subject, Teacher,
  },
  store::SchoolStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Row mappers ─────────────────────────────────────────────────────────────

// Every column is a plain INTEGER/TEXT/REAL, so rows map straight onto the
// entity structs with no intermediate representation.

fn class_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Class> {
  Ok(Class { id: row.get(0)?, name: row.get(1)? })
}

fn subject_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subject> {
  Ok(Subject { id: row.get(0)?, name: row.get(1)? })
}

fn student_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
  Ok(Student {
    id:           row.get(0)?,
    name:         row.get(1)?,
    age:          row.get(2)?,
    phone_number: row.get(3)?,
    class_id:     row.get(4)?,
  })
}

fn teacher_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Teacher> {
  Ok(Teacher {
    id:         row.get(0)?,
    name:       row.get(1)?,
    salary:     row.get(2)?,
    subject_id: row.get(3)?,
  })
}

fn class_teacher_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClassTeacher> {
  Ok(ClassTeacher {
    id:         row.get(0)?,
    teacher_id: row.get(1)?,
    class_id:   row.get(2)?,
  })
}

fn grade_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Grade> {
  Ok(Grade {
    id:         row.get(0)?,
    student_id: row.get(1)?,
    subject_id: row.get(2)?,
    grade:      row.get(3)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A rollbook store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SchoolStore impl ────────────────────────────────────────────────────────

impl SchoolStore for SqliteStore {
  type Error = Error;

  // ── Classes ───────────────────────────────────────────────────────────────

  async fn add_class(&self, input: NewClass) -> Result<Class> {
    input.validate()?;

    let name = input.name.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO classes (name) VALUES (?1)",
          rusqlite::params![name],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Class { id, name: input.name })
  }

  async fn list_classes(&self) -> Result<Vec<Class>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT id, name FROM classes ORDER BY id")?;
        let rows = stmt
          .query_map([], class_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_class(&self, id: i64) -> Result<Option<Class>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM classes WHERE id = ?1",
              rusqlite::params![id],
              class_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn add_subject(&self, input: NewSubject) -> Result<Subject> {
    input.validate()?;

    let name = input.name.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subjects (name) VALUES (?1)",
          rusqlite::params![name],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Subject { id, name: input.name })
  }

  async fn list_subjects(&self) -> Result<Vec<Subject>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT id, name FROM subjects ORDER BY id")?;
        let rows = stmt
          .query_map([], subject_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM subjects WHERE id = ?1",
              rusqlite::params![id],
              subject_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  // ── Students ──────────────────────────────────────────────────────────────

  async fn add_student(&self, input: NewStudent) -> Result<Student> {
    input.validate()?;

    let name = input.name.clone();
    let phone_number = input.phone_number.clone();
    let age = input.age;
    let class_id = input.class_id;
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO students (name, age, phone_number, class_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name, age, phone_number, class_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Student {
      id,
      name: input.name,
      age: input.age,
      phone_number: input.phone_number,
      class_id: input.class_id,
    })
  }

  async fn list_students(&self) -> Result<Vec<Student>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, age, phone_number, class_id
           FROM students ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], student_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_student(&self, id: i64) -> Result<Option<Student>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, age, phone_number, class_id
               FROM students WHERE id = ?1",
              rusqlite::params![id],
              student_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn delete_student(&self, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM students WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::StudentNotFound(id));
    }
    Ok(())
  }

  // ── Teachers ──────────────────────────────────────────────────────────────

  async fn add_teacher(&self, input: NewTeacher) -> Result<Teacher> {
    input.validate()?;

    let name = input.name.clone();
    let salary = input.salary;
    let subject_id = input.subject_id;
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO teachers (name, salary, subject_id) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, salary, subject_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Teacher {
      id,
      name: input.name,
      salary: input.salary,
      subject_id: input.subject_id,
    })
  }

  async fn list_teachers(&self) -> Result<Vec<Teacher>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, salary, subject_id FROM teachers ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], teacher_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_teacher(&self, id: i64) -> Result<Option<Teacher>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, salary, subject_id FROM teachers WHERE id = ?1",
              rusqlite::params![id],
              teacher_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  // ── Class-teacher links ───────────────────────────────────────────────────

  async fn add_class_teacher(
    &self,
    input: NewClassTeacher,
  ) -> Result<ClassTeacher> {
    let NewClassTeacher { teacher_id, class_id } = input;
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO class_teachers (teacher_id, class_id) VALUES (?1, ?2)",
          rusqlite::params![teacher_id, class_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(ClassTeacher { id, teacher_id, class_id })
  }

  async fn list_class_teachers(&self) -> Result<Vec<ClassTeacher>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, teacher_id, class_id FROM class_teachers ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], class_teacher_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_class_teacher(&self, id: i64) -> Result<Option<ClassTeacher>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, teacher_id, class_id FROM class_teachers WHERE id = ?1",
              rusqlite::params![id],
              class_teacher_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  // ── Grades ────────────────────────────────────────────────────────────────

  async fn add_grade(&self, input: NewGrade) -> Result<Grade> {
    // Grade scores are unconstrained integers; no validation by design.
    let NewGrade { student_id, subject_id, grade } = input;
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO grades (student_id, subject_id, grade)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![student_id, subject_id, grade],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Grade { id, student_id, subject_id, grade })
  }

  async fn list_grades(&self) -> Result<Vec<Grade>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, student_id, subject_id, grade FROM grades ORDER BY id",
        )?;
        let rows = stmt
          .query_map([], grade_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn get_grade(&self, id: i64) -> Result<Option<Grade>> {
    let row = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, student_id, subject_id, grade FROM grades WHERE id = ?1",
              rusqlite::params![id],
              grade_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(row)
  }

  async fn grades_for_student(&self, student_id: i64) -> Result<Vec<Grade>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, student_id, subject_id, grade FROM grades
           WHERE student_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![student_id], grade_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
