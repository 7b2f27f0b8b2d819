//! Grade aggregation, ranking, and display-name resolution.
//!
//! Everything here is a pure function over rows the caller has already
//! fetched — no store access, no object graphs. The ranking is a reporting
//! view and is never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Class, Grade, Student, Subject};

/// Fallback display name for a null or dangling reference.
pub const UNKNOWN: &str = "Unknown";

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Mean of `scores`. An empty list averages to 0 rather than erroring or
/// producing NaN.
pub fn average(scores: &[i64]) -> f64 {
  if scores.is_empty() {
    return 0.0;
  }
  scores.iter().sum::<i64>() as f64 / scores.len() as f64
}

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// One row of the descending grade ranking. Positions start at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
  pub position:   u32,
  pub student_id: i64,
  pub name:       String,
  pub total:      i64,
  pub average:    f64,
}

/// Rank `students` by total grade, descending.
///
/// Grades are matched to students by `student_id`; grades with a null or
/// dangling student reference contribute to no one. The sort is stable, so
/// students with equal totals keep their listing order.
pub fn rank(students: &[Student], grades: &[Grade]) -> Vec<RankEntry> {
  let mut scores_by_student: HashMap<i64, Vec<i64>> = HashMap::new();
  for g in grades {
    if let Some(student_id) = g.student_id {
      scores_by_student.entry(student_id).or_default().push(g.grade);
    }
  }

  let mut entries: Vec<RankEntry> = students
    .iter()
    .map(|s| {
      let scores = scores_by_student
        .get(&s.id)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
      RankEntry {
        position:   0,
        student_id: s.id,
        name:       s.name.clone(),
        total:      scores.iter().sum(),
        average:    average(scores),
      }
    })
    .collect();

  // `sort_by_key` is stable: ties preserve the input (listing) order.
  entries.sort_by_key(|e| std::cmp::Reverse(e.total));

  for (i, entry) in entries.iter_mut().enumerate() {
    entry.position = (i + 1) as u32;
  }

  entries
}

// ─── Display resolution ──────────────────────────────────────────────────────

/// A grade with its student and subject references resolved to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeView {
  pub id:           i64,
  pub student_name: String,
  pub subject_name: String,
  pub grade:        i64,
}

/// A student with its class reference resolved to a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentView {
  pub id:           i64,
  pub name:         String,
  pub age:          i64,
  pub phone_number: String,
  pub class_name:   String,
}

/// Resolve each grade's student and subject names by id lookup.
///
/// A reference that is absent or does not resolve yields [`UNKNOWN`] — this
/// leniency is deliberate and must never become an error.
pub fn grade_views(
  grades: &[Grade],
  students: &[Student],
  subjects: &[Subject],
) -> Vec<GradeView> {
  let student_names: HashMap<i64, &str> =
    students.iter().map(|s| (s.id, s.name.as_str())).collect();
  let subject_names: HashMap<i64, &str> =
    subjects.iter().map(|s| (s.id, s.name.as_str())).collect();

  grades
    .iter()
    .map(|g| GradeView {
      id:           g.id,
      student_name: resolve(g.student_id, &student_names),
      subject_name: resolve(g.subject_id, &subject_names),
      grade:        g.grade,
    })
    .collect()
}

/// Resolve each student's class name by id lookup, with the same [`UNKNOWN`]
/// leniency as [`grade_views`].
pub fn student_views(students: &[Student], classes: &[Class]) -> Vec<StudentView> {
  let class_names: HashMap<i64, &str> =
    classes.iter().map(|c| (c.id, c.name.as_str())).collect();

  students
    .iter()
    .map(|s| StudentView {
      id:           s.id,
      name:         s.name.clone(),
      age:          s.age,
      phone_number: s.phone_number.clone(),
      class_name:   resolve(s.class_id, &class_names),
    })
    .collect()
}

fn resolve(id: Option<i64>, names: &HashMap<i64, &str>) -> String {
  id.and_then(|id| names.get(&id))
    .map_or_else(|| UNKNOWN.to_string(), |name| (*name).to_string())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn student(id: i64, name: &str) -> Student {
    Student {
      id,
      name: name.to_string(),
      age: 22,
      phone_number: "07700000000".to_string(),
      class_id: None,
    }
  }

  fn grade(id: i64, student_id: i64, score: i64) -> Grade {
    Grade {
      id,
      student_id: Some(student_id),
      subject_id: None,
      grade: score,
    }
  }

  #[test]
  fn average_of_scores() {
    assert_eq!(average(&[95, 90, 85]), 90.0);
    assert_eq!(average(&[1, 2]), 1.5);
  }

  #[test]
  fn average_of_empty_is_zero() {
    assert_eq!(average(&[]), 0.0);
  }

  #[test]
  fn average_accepts_zero_and_negative_scores() {
    assert_eq!(average(&[0, -10, 10]), 0.0);
  }

  #[test]
  fn ranking_reference_scenario() {
    let students = vec![
      student(1, "Abeer Hafedh"),
      student(2, "Sarah Mohammed"),
      student(3, "Nawal Haider"),
    ];
    let grades = vec![
      grade(1, 1, 95),
      grade(2, 1, 90),
      grade(3, 1, 85),
      grade(4, 2, 88),
      grade(5, 2, 92),
      grade(6, 2, 80),
      grade(7, 3, 76),
      grade(8, 3, 89),
      grade(9, 3, 91),
    ];

    let ranking = rank(&students, &grades);
    let rows: Vec<(u32, &str, i64)> = ranking
      .iter()
      .map(|e| (e.position, e.name.as_str(), e.total))
      .collect();

    assert_eq!(rows, vec![
      (1, "Abeer Hafedh", 270),
      (2, "Sarah Mohammed", 260),
      (3, "Nawal Haider", 256),
    ]);
  }

  #[test]
  fn ranking_ties_preserve_listing_order() {
    let students = vec![
      student(1, "first"),
      student(2, "second"),
      student(3, "third"),
    ];
    // second and third tie with first on total; listing order must win.
    let grades = vec![
      grade(1, 1, 100),
      grade(2, 2, 50),
      grade(3, 2, 50),
      grade(4, 3, 100),
    ];

    let ranking = rank(&students, &grades);
    let names: Vec<&str> = ranking.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(ranking.iter().all(|e| e.total == 100));
  }

  #[test]
  fn ranking_student_with_no_grades_totals_zero() {
    let students = vec![student(1, "graded"), student(2, "ungraded")];
    let grades = vec![grade(1, 1, 42)];

    let ranking = rank(&students, &grades);
    assert_eq!(ranking[0].name, "graded");
    assert_eq!(ranking[1].name, "ungraded");
    assert_eq!(ranking[1].total, 0);
    assert_eq!(ranking[1].average, 0.0);
  }

  #[test]
  fn ranking_ignores_grades_with_dangling_student() {
    let students = vec![student(1, "only")];
    let grades = vec![grade(1, 1, 10), grade(2, 99, 1000), Grade {
      id:         3,
      student_id: None,
      subject_id: None,
      grade:      500,
    }];

    let ranking = rank(&students, &grades);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].total, 10);
  }

  #[test]
  fn grade_views_resolve_names() {
    let students = vec![student(1, "Abeer Hafedh")];
    let subjects = vec![Subject { id: 7, name: "Math".to_string() }];
    let grades = vec![Grade {
      id:         1,
      student_id: Some(1),
      subject_id: Some(7),
      grade:      95,
    }];

    let views = grade_views(&grades, &students, &subjects);
    assert_eq!(views, vec![GradeView {
      id:           1,
      student_name: "Abeer Hafedh".to_string(),
      subject_name: "Math".to_string(),
      grade:        95,
    }]);
  }

  #[test]
  fn grade_views_dangling_or_null_references_resolve_to_unknown() {
    let grades = vec![
      Grade { id: 1, student_id: Some(99), subject_id: Some(99), grade: 50 },
      Grade { id: 2, student_id: None, subject_id: None, grade: 60 },
    ];

    let views = grade_views(&grades, &[], &[]);
    assert!(views
      .iter()
      .all(|v| v.student_name == UNKNOWN && v.subject_name == UNKNOWN));
  }

  #[test]
  fn student_views_resolve_class_names() {
    let classes = vec![Class { id: 4, name: "Class A".to_string() }];
    let mut enrolled = student(1, "Abeer Hafedh");
    enrolled.class_id = Some(4);
    let unenrolled = student(2, "Sarah Mohammed");

    let views = student_views(&[enrolled, unenrolled], &classes);
    assert_eq!(views[0].class_name, "Class A");
    assert_eq!(views[1].class_name, UNKNOWN);
  }
}
