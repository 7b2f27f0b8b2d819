//! Router-level tests against an in-memory SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use rollbook_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn request(
  store: Arc<SqliteStore>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let req = builder.body(body).unwrap();
  api_router(store).oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

// ─── Classes ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_class_then_list_contains_exactly_one() {
  let s = store().await;

  let resp =
    request(s.clone(), "POST", "/classes", Some(json!({"name": "Class A"})))
      .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let created = body_json(resp).await;
  let id = created["id"].as_i64().unwrap();
  assert_eq!(created["name"], "Class A");

  let resp = request(s, "GET", "/classes", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let listed = body_json(resp).await;
  assert_eq!(listed, json!([{"id": id, "name": "Class A"}]));
}

#[tokio::test]
async fn get_missing_class_returns_404() {
  let s = store().await;
  let resp = request(s, "GET", "/classes/99", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await, json!({"error": "Class not found"}));
}

// ─── Students ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_student_round_trips_by_id() {
  let s = store().await;

  let resp = request(
    s.clone(),
    "POST",
    "/students",
    Some(json!({
      "name": "Abeer Hafedh",
      "age": 22,
      "phone_number": "07701111111",
      "class_id": null,
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let created = body_json(resp).await;
  let id = created["id"].as_i64().unwrap();

  let resp = request(s, "GET", &format!("/students/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn create_student_with_empty_name_returns_400() {
  let s = store().await;

  let resp = request(
    s,
    "POST",
    "/students",
    Some(json!({
      "name": "",
      "age": 22,
      "phone_number": "07701111111",
      "class_id": null,
    })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn student_list_embeds_resolved_class_name() {
  let s = store().await;

  let resp =
    request(s.clone(), "POST", "/classes", Some(json!({"name": "Class A"})))
      .await;
  let class_id = body_json(resp).await["id"].as_i64().unwrap();

  request(
    s.clone(),
    "POST",
    "/students",
    Some(json!({
      "name": "Abeer Hafedh",
      "age": 22,
      "phone_number": "07701111111",
      "class_id": class_id,
    })),
  )
  .await;
  request(
    s.clone(),
    "POST",
    "/students",
    Some(json!({
      "name": "Sarah Mohammed",
      "age": 22,
      "phone_number": "07702222222",
      "class_id": null,
    })),
  )
  .await;

  let listed = body_json(request(s, "GET", "/students", None).await).await;
  assert_eq!(listed[0]["class_name"], "Class A");
  assert_eq!(listed[1]["class_name"], "Unknown");
}

#[tokio::test]
async fn delete_student_then_get_returns_404() {
  let s = store().await;

  let resp = request(
    s.clone(),
    "POST",
    "/students",
    Some(json!({
      "name": "Nawal Haider",
      "age": 22,
      "phone_number": "07803333333",
      "class_id": null,
    })),
  )
  .await;
  let id = body_json(resp).await["id"].as_i64().unwrap();

  let resp =
    request(s.clone(), "DELETE", &format!("/students/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let resp = request(s, "GET", &format!("/students/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_student_returns_404_with_message() {
  let s = store().await;

  let resp = request(s, "DELETE", "/students/99", None).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await, json!({"error": "Student not found"}));
}

// ─── Grades ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn grade_list_resolves_dangling_references_to_unknown() {
  let s = store().await;

  let resp = request(
    s.clone(),
    "POST",
    "/grades",
    Some(json!({"student_id": 999, "subject_id": null, "grade": 50})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let listed = body_json(request(s, "GET", "/grades", None).await).await;
  assert_eq!(listed[0]["student_name"], "Unknown");
  assert_eq!(listed[0]["subject_name"], "Unknown");
  assert_eq!(listed[0]["grade"], 50);
}

#[tokio::test]
async fn grade_list_resolves_known_references() {
  let s = store().await;

  let resp = request(
    s.clone(),
    "POST",
    "/students",
    Some(json!({
      "name": "Abeer Hafedh",
      "age": 22,
      "phone_number": "07701111111",
      "class_id": null,
    })),
  )
  .await;
  let student_id = body_json(resp).await["id"].as_i64().unwrap();
  let resp =
    request(s.clone(), "POST", "/subjects", Some(json!({"name": "Math"})))
      .await;
  let subject_id = body_json(resp).await["id"].as_i64().unwrap();

  request(
    s.clone(),
    "POST",
    "/grades",
    Some(json!({"student_id": student_id, "subject_id": subject_id, "grade": 95})),
  )
  .await;

  let listed = body_json(request(s, "GET", "/grades", None).await).await;
  assert_eq!(listed[0]["student_name"], "Abeer Hafedh");
  assert_eq!(listed[0]["subject_name"], "Math");
}

// ─── Rankings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn rankings_reference_scenario() {
  let s = store().await;

  let roster: [(&str, &str, [i64; 3]); 3] = [
    ("Abeer Hafedh", "07701111111", [95, 90, 85]),
    ("Sarah Mohammed", "07702222222", [88, 92, 80]),
    ("Nawal Haider", "07803333333", [76, 89, 91]),
  ];

  for (name, phone, scores) in roster {
    let resp = request(
      s.clone(),
      "POST",
      "/students",
      Some(json!({
        "name": name,
        "age": 22,
        "phone_number": phone,
        "class_id": null,
      })),
    )
    .await;
    let student_id = body_json(resp).await["id"].as_i64().unwrap();

    for score in scores {
      request(
        s.clone(),
        "POST",
        "/grades",
        Some(json!({
          "student_id": student_id,
          "subject_id": null,
          "grade": score,
        })),
      )
      .await;
    }
  }

  let resp = request(s, "GET", "/rankings", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let ranking = body_json(resp).await;

  let rows: Vec<(i64, &str, i64)> = ranking
    .as_array()
    .unwrap()
    .iter()
    .map(|e| {
      (
        e["position"].as_i64().unwrap(),
        e["name"].as_str().unwrap(),
        e["total"].as_i64().unwrap(),
      )
    })
    .collect();

  assert_eq!(rows, vec![
    (1, "Abeer Hafedh", 270),
    (2, "Sarah Mohammed", 260),
    (3, "Nawal Haider", 256),
  ]);
}
