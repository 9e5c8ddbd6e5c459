//! End-to-end tests for the reservas API
//!
//! Drives the full router (auth middleware included) against an in-memory
//! SQLite database with migrations applied, using real JWT tokens.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use reservas_api::auth::jwt::{create_token, JwtConfig};
use reservas_api::create_api_router;
use reservas_api::infrastructure::database::migrator::Migrator;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
    }
}

async fn test_app() -> Router {
    // single connection so every query sees the same in-memory database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    create_api_router(db, test_jwt_config())
}

fn bearer(user: &str) -> String {
    format!("Bearer {}", create_token(user, &test_jwt_config()).unwrap())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn list_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/reservas");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

fn create_request(auth: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/reservas")
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn delete_request(auth: &str, id: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/reservas/{}", id))
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap()
}

fn valid_payload() -> Value {
    // 2024-06-10 is a Monday
    json!({ "fecha": "2024-06-10", "sala": "A", "hora": "09:30 AM" })
}

// ── Authentication gate ────────────────────────────────────────

#[tokio::test]
async fn missing_authorization_header_is_401() {
    let app = test_app().await;
    let (status, body) = send(&app, list_request(None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("No autorizado"));
}

#[tokio::test]
async fn header_without_token_is_401() {
    let app = test_app().await;
    // a scheme with nothing after it carries no credential
    for value in ["Bearer", "Bearer "] {
        let (status, body) = send(&app, list_request(Some(value))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {:?}", value);
        assert_eq!(body["error"], json!("No autorizado"));
    }
}

#[tokio::test]
async fn malformed_token_is_403() {
    let app = test_app().await;
    let (status, body) = send(&app, list_request(Some("Bearer not-a-token"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("Token inválido"));
}

#[tokio::test]
async fn wrong_secret_token_is_403() {
    let app = test_app().await;
    let foreign = JwtConfig {
        secret: "another-secret".to_string(),
        expiration_hours: 1,
    };
    let token = create_token("user-1", &foreign).unwrap();
    let (status, body) = send(&app, list_request(Some(&format!("Bearer {}", token)))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("Token inválido"));
}

#[tokio::test]
async fn expired_token_is_403() {
    let app = test_app().await;
    // negative expiration puts exp well past the verification leeway
    let expired = JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: -2,
    };
    let token = create_token("user-1", &expired).unwrap();
    let (status, body) = send(&app, list_request(Some(&format!("Bearer {}", token)))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("Token inválido"));
}

#[tokio::test]
async fn health_does_not_require_auth() {
    let app = test_app().await;
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

// ── Create validation ──────────────────────────────────────────

#[tokio::test]
async fn create_with_unknown_sala_is_400() {
    let app = test_app().await;
    let auth = bearer("user-1");

    for sala in ["D", "", "a", "AA"] {
        let payload = json!({ "fecha": "2024-06-10", "sala": sala, "hora": "09:30 AM" });
        let (status, body) = send(&app, create_request(&auth, payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "sala {:?}", sala);
        assert_eq!(body["error"], json!("Sala inválida"));
    }
}

#[tokio::test]
async fn create_with_bad_hora_format_is_400() {
    let app = test_app().await;
    let auth = bearer("user-1");

    for hora in ["9:30 AM", "13:00 PM", "09:60 AM", "09:30", "09:30 am", "09:30AM"] {
        let payload = json!({ "fecha": "2024-06-10", "sala": "A", "hora": hora });
        let (status, body) = send(&app, create_request(&auth, payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "hora {:?}", hora);
        assert_eq!(
            body["error"],
            json!("Formato de hora inválido. Use hh:mm AM/PM")
        );
    }
}

#[tokio::test]
async fn create_on_sunday_is_400() {
    let app = test_app().await;
    let auth = bearer("user-1");

    // 2024-06-09 is a Sunday; sala and hora are otherwise valid
    let payload = json!({ "fecha": "2024-06-09", "sala": "A", "hora": "09:30 AM" });
    let (status, body) = send(&app, create_request(&auth, payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("No se permiten reservas los domingos"));
}

#[tokio::test]
async fn create_with_impossible_fecha_is_400() {
    let app = test_app().await;
    let auth = bearer("user-1");

    let payload = json!({ "fecha": "2024-02-30", "sala": "A", "hora": "09:30 AM" });
    let (status, body) = send(&app, create_request(&auth, payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Fecha inválida. Use AAAA-MM-DD"));
}

#[tokio::test]
async fn sala_is_checked_before_hora_and_fecha() {
    let app = test_app().await;
    let auth = bearer("user-1");

    // everything is wrong; the sala message wins
    let payload = json!({ "fecha": "2024-06-09", "sala": "Z", "hora": "25:99" });
    let (status, body) = send(&app, create_request(&auth, payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Sala inválida"));
}

// ── Create / list ──────────────────────────────────────────────

#[tokio::test]
async fn valid_create_returns_201_with_owned_record() {
    let app = test_app().await;
    let auth = bearer("user-1");

    let (status, body) = send(&app, create_request(&auth, valid_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["usuario"], json!("user-1"));
    assert_eq!(data["fecha"], json!("2024-06-10"));
    assert_eq!(data["sala"], json!("A"));
    assert_eq!(data["hora"], json!("09:30 AM"));
    assert!(!data["id"].as_str().unwrap().is_empty());

    let (status, body) = send(&app, list_request(Some(&auth))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_list_is_a_valid_success() {
    let app = test_app().await;
    let (status, body) = send(&app, list_request(Some(&bearer("user-1")))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn list_only_returns_own_reservas() {
    let app = test_app().await;
    let auth_1 = bearer("user-1");
    let auth_2 = bearer("user-2");

    let (status, _) = send(&app, create_request(&auth_1, valid_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let payload = json!({ "fecha": "2024-06-11", "sala": "B", "hora": "04:00 PM" });
    let (status, _) = send(&app, create_request(&auth_1, payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let payload = json!({ "fecha": "2024-06-12", "sala": "C", "hora": "11:00 AM" });
    let (status, _) = send(&app, create_request(&auth_2, payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, list_request(Some(&auth_1))).await;
    let reservas = body["data"].as_array().unwrap().clone();
    assert_eq!(reservas.len(), 2);
    assert!(reservas.iter().all(|r| r["usuario"] == json!("user-1")));

    let (_, body) = send(&app, list_request(Some(&auth_2))).await;
    let reservas = body["data"].as_array().unwrap().clone();
    assert_eq!(reservas.len(), 1);
    assert_eq!(reservas[0]["usuario"], json!("user-2"));
}

#[tokio::test]
async fn duplicate_slot_is_not_rejected() {
    // no conflict detection: two users can book the same sala and hora
    let app = test_app().await;

    let (status, _) = send(&app, create_request(&bearer("user-1"), valid_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, create_request(&bearer("user-2"), valid_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
}

// ── Delete ─────────────────────────────────────────────────────

#[tokio::test]
async fn delete_own_reserva_removes_it() {
    let app = test_app().await;
    let auth = bearer("user-1");

    let (_, body) = send(&app, create_request(&auth, valid_payload())).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, delete_request(&auth, &id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!("Reserva cancelada"));

    let (_, body) = send(&app, list_request(Some(&auth))).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn delete_foreign_reserva_is_404_and_record_survives() {
    let app = test_app().await;
    let auth_owner = bearer("user-1");
    let auth_other = bearer("user-2");

    let (_, body) = send(&app, create_request(&auth_owner, valid_payload())).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, delete_request(&auth_other, &id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        json!("Reserva no encontrada o no autorización")
    );

    // still visible to its owner
    let (_, body) = send(&app, list_request(Some(&auth_owner))).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let app = test_app().await;
    let (status, body) = send(&app, delete_request(&bearer("user-1"), "no-such-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        json!("Reserva no encontrada o no autorización")
    );
}
