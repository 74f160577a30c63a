mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn grace(student_id: &str) -> Value {
    json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "student_id": student_id,
        "birth_date": "1906-12-09",
        "gender": "female"
    })
}

#[tokio::test]
async fn test_create_generates_id() {
    let server = common::test_server();

    let response = server
        .post("/api/v1/student_information")
        .json(&grace("S-001"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(json["birth_date"], "1906-12-09");
    assert_eq!(json["student_id"], "S-001");
}

#[tokio::test]
async fn test_create_with_given_id() {
    let server = common::test_server();

    let mut body = grace("S-002");
    body["id"] = json!("custom-id");

    let response = server.post("/api/v1/student_information").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], "custom-id");

    let fetched = server.get("/api/v1/student_information/custom-id").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["first_name"], "Grace");
}

#[tokio::test]
async fn test_create_missing_field_reports_detail() {
    let server = common::test_server();

    let response = server
        .post("/api/v1/student_information")
        .json(&json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "student_id": "S-003",
            "birth_date": "1906-12-09"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<Value>();
    let detail = json["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["type"], "json_invalid");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_create_empty_name_reports_field() {
    let server = common::test_server();

    let mut body = grace("S-004");
    body["first_name"] = json!("");

    let response = server.post("/api/v1/student_information").json(&body).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<Value>();
    assert_eq!(json["detail"][0]["loc"], json!(["body", "first_name"]));
    assert_eq!(json["detail"][0]["type"], "value_error");
}

#[tokio::test]
async fn test_duplicate_student_id_conflicts() {
    let server = common::test_server();

    server
        .post("/api/v1/student_information")
        .json(&grace("S-005"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/student_information")
        .json(&grace("S-005"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Student information already exists" })
    );
}

#[tokio::test]
async fn test_patch_into_taken_student_id_conflicts() {
    let server = common::test_server();

    server
        .post("/api/v1/student_information")
        .json(&grace("S-010"))
        .await
        .assert_status(StatusCode::CREATED);

    let id = server
        .post("/api/v1/student_information")
        .json(&grace("S-011"))
        .await
        .json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .patch(&format!("/api/v1/student_information/{id}"))
        .json(&json!({ "student_id": "S-010" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Student information already exists" })
    );

    let kept = server
        .get(&format!("/api/v1/student_information/{id}"))
        .await;
    assert_eq!(kept.json::<Value>()["student_id"], "S-011");
}

#[tokio::test]
async fn test_put_into_taken_student_id_conflicts() {
    let server = common::test_server();

    server
        .post("/api/v1/student_information")
        .json(&grace("S-020"))
        .await
        .assert_status(StatusCode::CREATED);

    let id = server
        .post("/api/v1/student_information")
        .json(&grace("S-021"))
        .await
        .json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .put(&format!("/api/v1/student_information/{id}"))
        .json(&grace("S-020"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["detail"],
        "Student information already exists"
    );
}

#[tokio::test]
async fn test_not_found_uses_detail_key() {
    let server = common::test_server();

    let get = server.get("/api/v1/student_information/missing").await;
    get.assert_status_not_found();
    assert_eq!(
        get.json::<Value>(),
        json!({ "detail": "Student information not found" })
    );

    let delete = server.delete("/api/v1/student_information/missing").await;
    delete.assert_status_not_found();
    assert_eq!(
        delete.json::<Value>(),
        json!({ "detail": "Student information not exists" })
    );
}

#[tokio::test]
async fn test_patch_and_put() {
    let server = common::test_server();

    let id = server
        .post("/api/v1/student_information")
        .json(&grace("S-006"))
        .await
        .json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let patched = server
        .patch(&format!("/api/v1/student_information/{id}"))
        .json(&json!({ "birth_date": "1906-12-10" }))
        .await;
    patched.assert_status_ok();
    assert_eq!(patched.json::<Value>()["birth_date"], "1906-12-10");
    assert_eq!(patched.json::<Value>()["last_name"], "Hopper");

    let mut body = grace("S-007");
    body["id"] = json!("ignored");
    body["last_name"] = json!("Murray");

    let replaced = server
        .put(&format!("/api/v1/student_information/{id}"))
        .json(&body)
        .await;
    replaced.assert_status_ok();

    let json = replaced.json::<Value>();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["last_name"], "Murray");
    assert_eq!(json["student_id"], "S-007");
}

#[tokio::test]
async fn test_patch_with_bad_date() {
    let server = common::test_server();

    let response = server
        .patch("/api/v1/student_information/any")
        .json(&json!({ "birth_date": "not-a-date" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["detail"].is_array());
}

#[tokio::test]
async fn test_delete_then_get() {
    let server = common::test_server();

    let id = server
        .post("/api/v1/student_information")
        .json(&grace("S-008"))
        .await
        .json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .delete(&format!("/api/v1/student_information/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/student_information/{id}"))
        .await
        .assert_status_not_found();
}
