use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use clinic_core::{ClinicStore, CoreConfig};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let services = ClinicServices::new(
        Arc::new(CoreConfig::default()),
        Arc::new(ClinicStore::new()),
    );
    router(AppState::new(services))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let (status, value) = send(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected response: {value}");
    value
}

#[tokio::test]
async fn health_reports_alive() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn status_form_without_schedule_duration_creates_status() {
    let app = app();
    let created = create(&app, "/statuses", json!({ "name": "Active" })).await;
    assert_eq!(created, json!({ "id": 1, "name": "Active" }));

    let (status, body) = send(&app, "GET", "/statuses/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn status_create_accepts_schedule_duration_but_never_returns_it() {
    let app = app();
    let created = create(
        &app,
        "/statuses",
        json!({ "name": "Booked", "scheduleDuration": "00:30" }),
    )
    .await;
    assert!(created.get("scheduleDuration").is_none());
}

#[tokio::test]
async fn form_with_id_is_unprocessable() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/statuses",
        Some(json!({ "id": 9, "name": "Active" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], json!("error"));
}

#[tokio::test]
async fn blank_name_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, "POST", "/specialties", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!("error"));
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn doctor_list_with_null_filters_paginates_everything() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    for n in 0..12 {
        create(
            &app,
            "/doctors",
            json!({ "name": format!("Doctor {n:02}"), "statusId": 1, "specialty": [] }),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "GET",
        "/doctors?itemsPerPage=10&page=1&name=&statusId=&specialtyId=",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], json!(12));
    assert_eq!(body["items"].as_array().unwrap().len(), 10);

    let (_, second) = send(&app, "GET", "/doctors?itemsPerPage=10&page=2", None).await;
    assert_eq!(second["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn doctor_embeds_specialties_and_filters_by_them() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    create(&app, "/specialties", json!({ "name": "Cardiology" })).await;
    create(&app, "/specialties", json!({ "name": "Neurology" })).await;
    let doctor = create(
        &app,
        "/doctors",
        json!({ "name": "Dr. Ana", "statusId": 1, "specialty": [2, 1] }),
    )
    .await;
    create(
        &app,
        "/doctors",
        json!({ "name": "Dr. Bruno", "statusId": 1, "specialty": [1] }),
    )
    .await;

    assert_eq!(
        doctor["specialty"],
        json!([{ "id": 2, "name": "Neurology" }, { "id": 1, "name": "Cardiology" }])
    );

    let (_, body) = send(&app, "GET", "/doctors?specialtyId=2", None).await;
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["items"][0]["name"], json!("Dr. Ana"));
}

#[tokio::test]
async fn malformed_id_filter_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, "GET", "/doctors?statusId=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!("error"));
}

#[tokio::test]
async fn zero_page_is_bad_request() {
    let app = app();
    let (status, _) = send(&app, "GET", "/patients?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_status_reference_is_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/patients",
        Some(json!({
            "name": "Maria Lima",
            "documentNumber": "123",
            "phoneNumber": "",
            "birthDate": "1988-04-12",
            "statusId": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("statusId"));
}

#[tokio::test]
async fn renaming_status_updates_patients() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    let patient = create(
        &app,
        "/patients",
        json!({
            "name": "Maria Lima",
            "documentNumber": "123",
            "phoneNumber": "",
            "birthDate": "1988-04-12",
            "statusId": 1
        }),
    )
    .await;
    assert_eq!(patient["statusId"], patient["status"]["id"]);

    let (status, _) = send(&app, "PUT", "/statuses/1", Some(json!({ "name": "Admitted" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/patients/1", None).await;
    assert_eq!(body["status"], json!({ "id": 1, "name": "Admitted" }));
}

#[tokio::test]
async fn deleting_referenced_status_conflicts() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    create(&app, "/doctors", json!({ "name": "Dr. Ana", "statusId": 1 })).await;

    let (status, body) = send(&app, "DELETE", "/statuses/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], json!("error"));

    let (status, _) = send(&app, "DELETE", "/doctors/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/statuses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let app = app();
    for uri in ["/statuses/7", "/specialties/7", "/doctors/7", "/patients/7"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["status"], json!("error"));
    }
}

#[tokio::test]
async fn non_numeric_path_id_is_bad_request() {
    let app = app();
    let (status, _) = send(&app, "GET", "/doctors/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    for path in ["/health", "/statuses", "/doctors/{id}", "/patients"] {
        assert!(body["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn specialty_routes_list_rename_and_delete() {
    let app = app();
    create(&app, "/specialties", json!({ "name": "Cardiology" })).await;
    create(&app, "/specialties", json!({ "name": "Neurology" })).await;

    let (status, body) = send(&app, "GET", "/specialties?name=neuro", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 1, "items": [{ "id": 2, "name": "Neurology" }] }));

    let (status, body) = send(
        &app,
        "PUT",
        "/specialties/1",
        Some(json!({ "name": "Cardiac Surgery" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Cardiac Surgery" }));

    let (status, _) = send(&app, "DELETE", "/specialties/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", "/specialties/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/specialties", None).await;
    assert_eq!(body["total"], json!(1));
}

#[tokio::test]
async fn doctor_update_replaces_status_and_specialties() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    create(&app, "/statuses", json!({ "name": "On leave" })).await;
    create(&app, "/specialties", json!({ "name": "Cardiology" })).await;
    create(
        &app,
        "/doctors",
        json!({ "name": "Dr. Ana", "statusId": 1, "specialty": [1] }),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/doctors/1",
        Some(json!({ "name": "Dr. Ana Souza", "statusId": 2, "specialty": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Dr. Ana Souza",
            "status": { "id": 2, "name": "On leave" },
            "specialty": []
        })
    );

    let (status, _) = send(
        &app,
        "PUT",
        "/doctors/9",
        Some(json!({ "name": "Dr. X", "statusId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patient_update_moves_status() {
    let app = app();
    create(&app, "/statuses", json!({ "name": "Active" })).await;
    create(&app, "/statuses", json!({ "name": "Discharged" })).await;
    create(
        &app,
        "/patients",
        json!({
            "name": "Maria Lima",
            "documentNumber": "123",
            "phoneNumber": "",
            "birthDate": "1988-04-12",
            "statusId": 1
        }),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/patients/1",
        Some(json!({
            "name": "Maria Lima",
            "documentNumber": "123",
            "phoneNumber": "+55 11 5555-0000",
            "birthDate": "1988-04-12",
            "statusId": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusId"], json!(2));
    assert_eq!(body["status"], json!({ "id": 2, "name": "Discharged" }));
    assert_eq!(body["phoneNumber"], json!("+55 11 5555-0000"));

    let (_, listed) = send(&app, "GET", "/patients?statusId=2", None).await;
    assert_eq!(listed["total"], json!(1));
}
