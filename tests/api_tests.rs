use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use oficina_backend::config::environment::EnvironmentConfig;
use oficina_backend::models::user::{RemoteUser, User};
use oficina_backend::repositories::store::WorkshopStore;
use oficina_backend::services::auth_service::AuthVerifier;
use oficina_backend::utils::errors::{AppError, AppResult};
use oficina_backend::{build_router, AppState};

/// Verificador que acepta `oficina` / `senha123` y falla en `offline`
struct StubVerifier;

#[async_trait]
impl AuthVerifier for StubVerifier {
    async fn verify(&self, id: &str, password: &str) -> AppResult<Option<User>> {
        match (id, password) {
            ("oficina", "senha123") => Ok(Some(User::from_remote(
                RemoteUser {
                    id: "oficina".to_string(),
                    nome: "Oficina Central".to_string(),
                    ..Default::default()
                },
                Utc::now(),
            ))),
            ("offline", _) => Err(AppError::ExternalApi("connection refused".to_string())),
            _ => Ok(None),
        }
    }
}

fn create_test_app(store: WorkshopStore) -> Router {
    build_router(AppState::new(
        store,
        EnvironmentConfig::default(),
        Arc::new(StubVerifier),
    ))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "id": "oficina", "senha": "senha123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(WorkshopStore::new());
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_login_success_and_me() {
    let app = create_test_app(WorkshopStore::new());
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "id": "oficina", "password": "senha123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "usuario@exemplo.com");
    assert_eq!(body["user"]["roles"], json!(["admin", "mechanic"]));

    let token = body["token"].as_str().unwrap();
    let (status, me) = send(&app, Method::GET, "/api/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["sub"], "oficina");
    assert_eq!(me["name"], "Oficina Central");
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    let app = create_test_app(WorkshopStore::new());

    for id in ["oficina-errada", "offline"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "id": id, "password": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "ID ou senha incorretos");
    }
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = create_test_app(WorkshopStore::new());

    for uri in ["/api/quotes", "/api/vehicles", "/api/services", "/api/dashboard", "/api/quote-requests"] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    let (status, _) = send(&app, Method::GET, "/api/quotes", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_quote_computes_total() {
    let app = create_test_app(WorkshopStore::new());
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quotes",
        Some(&token),
        Some(json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "brand": "Volkswagen",
            "model": "Gol",
            "year": "2020",
            "items": [
                { "description": "Pastilhas de freio", "quantity": 2, "unit_price": 50.0 },
                { "description": "Mão de obra", "quantity": 1, "unit_price": 30.0 },
                { "description": "", "quantity": 1, "unit_price": 999.0 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let quote = &body["data"];
    assert_eq!(quote["total"].as_f64(), Some(130.0));
    assert_eq!(quote["items"].as_array().unwrap().len(), 2);
    assert_eq!(quote["vehicle"], "Volkswagen Gol 2020 - ABC-1234");
    assert!(quote["number"].as_str().unwrap().starts_with("ORC-"));
    assert!(quote["number"].as_str().unwrap().ends_with("-001"));

    let (status, fetched) = send(&app, Method::GET, "/api/quotes/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&fetched, quote);
}

#[tokio::test]
async fn test_create_quote_without_described_items_is_rejected() {
    let app = create_test_app(WorkshopStore::new());
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quotes",
        Some(&token),
        Some(json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "items": [{ "description": "  ", "quantity": 1, "unit_price": 10.0 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_quote_status_and_missing_quote() {
    let app = create_test_app(WorkshopStore::with_sample_data().unwrap());
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/quotes/1/status",
        Some(&token),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["total"].as_f64(), Some(100.5));

    let (status, _) = send(&app, Method::DELETE, "/api/quotes/99", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, filtered) = send(&app, Method::GET, "/api/quotes?status=approved", Some(&token), None).await;
    assert_eq!(filtered.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_public_quote_request_intake() {
    let app = create_test_app(WorkshopStore::new());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quote-requests",
        None,
        Some(json!({
            "customer": "Carlos Eduardo",
            "phone": "(11) 99999-8888",
            "plate": "HON-1234",
            "brand": "Honda",
            "model": "Civic",
            "year": "2018",
            "service_type": "revision",
            "urgency": "high",
            "problem_description": "Barulho na suspensão",
            "contact_preference": "whatsapp",
            "in_person_quote": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pending");
    assert!(body["data"]["number"].as_str().unwrap().starts_with("SOL-"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quote-requests",
        None,
        Some(json!({
            "customer": "",
            "phone": "(11) 99999-8888",
            "plate": "HON-1234",
            "service_type": "revision",
            "urgency": "high",
            "problem_description": "Barulho",
            "contact_preference": "phone"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].get("customer").is_some());

    // Listar sigue protegido
    let (status, _) = send(&app, Method::GET, "/api/quote-requests", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_vehicle_service_and_photo_flow() {
    let app = create_test_app(WorkshopStore::new());
    let token = login(&app).await;

    let (status, vehicle) = send(
        &app,
        Method::POST,
        "/api/vehicles",
        Some(&token),
        Some(json!({ "plate": "abc1d23", "brand": "Fiat", "model": "Argo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicle["data"]["name"], "Fiat Argo");
    assert_eq!(vehicle["data"]["plate"], "ABC1D23");

    let (status, service) = send(
        &app,
        Method::POST,
        "/api/vehicles/1/services",
        Some(&token),
        Some(json!({ "description": "Troca de óleo", "priority": "high" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order_ref = service["data"]["order_ref"].as_str().unwrap().to_string();
    assert!(order_ref.starts_with("OS-"));
    assert_eq!(service["data"]["status"], "pending");

    let (status, photo) = send(
        &app,
        Method::POST,
        &format!("/api/services/{}/photos", order_ref),
        Some(&token),
        Some(json!({
            "url": "data:image/png;base64,iVBORw0KGgo=",
            "kind": "before",
            "description": "Motor"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let photo_id = photo["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/services/{}/photos", order_ref),
        Some(&token),
        Some(json!({ "url": "data:image/png;base64,@@@", "kind": "after" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, Method::GET, &format!("/api/services/{}", order_ref), Some(&token), None).await;
    assert_eq!(fetched["photos_before"], 1);
    assert!(fetched["slug"].as_str().unwrap().starts_with("abc1d23-pending-1antes-0depois"));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/services/{}/photos/{}", order_ref, photo_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, by_plate) = send(&app, Method::GET, "/api/services?plate=abc1", Some(&token), None).await;
    assert_eq!(by_plate.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_over_sample_data() {
    let app = create_test_app(WorkshopStore::with_sample_data().unwrap());
    let token = login(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/dashboard", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicles"], 4);
    assert_eq!(body["services"]["total"], 4);
    assert_eq!(body["services"]["completed"], 1);
    assert_eq!(body["services"]["completed_percentage"], 25);
    assert_eq!(body["quotes"]["total"], 3);
    assert_eq!(body["quote_requests"]["total"], 2);

    let (status, recent) = send(
        &app,
        Method::GET,
        "/api/dashboard/recent-services?limit=2",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recent = recent.as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0]["order_ref"], "DDD4D56");
}

#[tokio::test]
async fn test_status_catalog_is_public() {
    let app = create_test_app(WorkshopStore::new());
    let (status, body) = send(&app, Method::GET, "/api/catalog/statuses", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_status"][0]["code"], "pending");
    assert_eq!(body["service_status"][0]["label"], "Pendente");
}

#[tokio::test]
async fn test_quote_with_out_of_range_values_is_rejected() {
    let app = create_test_app(WorkshopStore::new());
    let token = login(&app).await;

    let cases = [
        json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "validity_days": 4000000000u64,
            "items": [{ "description": "Óleo", "quantity": 1, "unit_price": 45.0 }]
        }),
        json!({
            "customer": "João Silva",
            "plate": "ABC-1234",
            "items": [{ "description": "Peça", "quantity": 4000000000u64, "unit_price": 1e20 }]
        }),
    ];

    for body in cases {
        let (status, response) = send(&app, Method::POST, "/api/quotes", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "VALIDATION_ERROR");
    }

    // El almacén sigue respondiendo
    let (status, quotes) = send(&app, Method::GET, "/api/quotes", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quotes.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_photo_near_size_limit_is_accepted() {
    let app = create_test_app(WorkshopStore::with_sample_data().unwrap());
    let token = login(&app).await;
    let max_photo_bytes = EnvironmentConfig::default().max_photo_bytes;

    let payload = STANDARD.encode(vec![0u8; max_photo_bytes - 1024]);
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/services/AAA1A23/photos",
        Some(&token),
        Some(json!({ "url": format!("data:image/jpeg;base64,{}", payload), "kind": "during" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let oversized = STANDARD.encode(vec![0u8; max_photo_bytes + 1]);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/services/AAA1A23/photos",
        Some(&token),
        Some(json!({ "url": format!("data:image/jpeg;base64,{}", oversized), "kind": "during" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
