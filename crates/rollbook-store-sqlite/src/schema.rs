//! SQL schema for the rollbook SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.
//!
//! Foreign-key columns are declared with `REFERENCES` for documentation, but
//! `PRAGMA foreign_keys` stays off: deletes may orphan referencing rows, and
//! reads resolve dangling references to "Unknown".

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = OFF;

CREATE TABLE IF NOT EXISTS classes (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS subjects (
    id    INTEGER PRIMARY KEY,
    name  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS students (
    id            INTEGER PRIMARY KEY,
    name          TEXT NOT NULL,
    age           INTEGER NOT NULL,
    phone_number  TEXT NOT NULL,
    class_id      INTEGER REFERENCES classes(id)
);

CREATE TABLE IF NOT EXISTS teachers (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    salary      REAL NOT NULL,
    subject_id  INTEGER REFERENCES subjects(id)
);

-- Association rows; duplicate (teacher_id, class_id) pairs are allowed.
CREATE TABLE IF NOT EXISTS class_teachers (
    id          INTEGER PRIMARY KEY,
    teacher_id  INTEGER NOT NULL REFERENCES teachers(id),
    class_id    INTEGER NOT NULL REFERENCES classes(id)
);

CREATE TABLE IF NOT EXISTS grades (
    id          INTEGER PRIMARY KEY,
    student_id  INTEGER REFERENCES students(id),
    subject_id  INTEGER REFERENCES subjects(id),
    grade       INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS grades_student_idx  ON grades(student_id);
CREATE INDEX IF NOT EXISTS grades_subject_idx  ON grades(subject_id);
CREATE INDEX IF NOT EXISTS students_class_idx  ON students(class_id);

PRAGMA user_version = 1;
";
