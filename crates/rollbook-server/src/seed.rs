//! Sample dataset loader, used by the `--seed` flag.

use rollbook_core::{
  entity::{NewClass, NewClassTeacher, NewGrade, NewStudent, NewSubject, NewTeacher},
  store::SchoolStore,
};
use rollbook_store_sqlite::SqliteStore;

/// Populate `store` with the sample school dataset: two subjects, three
/// classes, three students with a grade list each, three teachers, and one
/// class-teacher link per class.
pub async fn run(store: &SqliteStore) -> Result<(), rollbook_store_sqlite::Error> {
  let math = store.add_subject(NewSubject { name: "Math".into() }).await?;
  let science = store
    .add_subject(NewSubject { name: "Science".into() })
    .await?;

  let class_a = store.add_class(NewClass { name: "Class A".into() }).await?;
  let class_b = store.add_class(NewClass { name: "Class B".into() }).await?;
  let class_c = store.add_class(NewClass { name: "Class C".into() }).await?;

  let roster: [(&str, &str, i64, [i64; 3]); 3] = [
    ("Abeer Hafedh", "07701111111", class_a.id, [95, 90, 85]),
    ("Sarah Mohammed", "07702222222", class_b.id, [88, 92, 80]),
    ("Nawal Haider", "07803333333", class_c.id, [76, 89, 91]),
  ];

  for (name, phone_number, class_id, scores) in roster {
    let student = store
      .add_student(NewStudent {
        name:         name.to_string(),
        age:          22,
        phone_number: phone_number.to_string(),
        class_id:     Some(class_id),
      })
      .await?;

    for score in scores {
      store
        .add_grade(NewGrade {
          student_id: Some(student.id),
          subject_id: Some(math.id),
          grade:      score,
        })
        .await?;
    }
  }

  let staff = [
    ("Hussien", 800.0, math.id, class_a.id),
    ("Rana", 500.0, science.id, class_b.id),
    ("Ali", 600.0, math.id, class_c.id),
  ];

  for (name, salary, subject_id, class_id) in staff {
    let teacher = store
      .add_teacher(NewTeacher {
        name: name.to_string(),
        salary,
        subject_id: Some(subject_id),
      })
      .await?;

    store
      .add_class_teacher(NewClassTeacher { teacher_id: teacher.id, class_id })
      .await?;
  }

  tracing::info!(
    "seeded 2 subjects, 3 classes, 3 students, 9 grades, 3 teachers"
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  use rollbook_core::report;

  use super::*;

  #[tokio::test]
  async fn seeded_store_reproduces_reference_ranking() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    run(&store).await.unwrap();

    let students = store.list_students().await.unwrap();
    let grades = store.list_grades().await.unwrap();

    let ranking = report::rank(&students, &grades);
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

  #[tokio::test]
  async fn seeded_grades_resolve_to_math() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    run(&store).await.unwrap();

    let grades = store.list_grades().await.unwrap();
    let students = store.list_students().await.unwrap();
    let subjects = store.list_subjects().await.unwrap();

    let views = report::grade_views(&grades, &students, &subjects);
    assert_eq!(views.len(), 9);
    assert!(views.iter().all(|v| v.subject_name == "Math"));
    assert!(views.iter().all(|v| v.student_name != report::UNKNOWN));
  }
}
