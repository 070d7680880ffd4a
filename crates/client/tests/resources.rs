//! Typed CRUD wrappers against a stub resource API.

mod common;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde_json::{Value, json};

use aeroops_auth::SessionTokens;
use aeroops_client::{
    ApiClient, ClientError, ListQuery, MemoryStore, SessionData, SessionStore,
    resources::{CompanyPatch, FlightOrderStatus, NewCompany},
};
use aeroops_core::{CompanyId, OperatorId};

use common::TestServer;

#[derive(Clone, Default)]
struct ResourceState {
    last_query: Arc<Mutex<Option<String>>>,
    last_auth: Arc<Mutex<Option<String>>>,
    last_body: Arc<Mutex<Option<Value>>>,
}

fn company_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "rfc": "ACM010101AAA",
        "contact_email": null,
        "phone": null,
        "is_active": true
    })
}

fn page_of(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "total_pages": 3,
        "current_page": 2,
        "page_size": 10,
        "next": "http://api/empresas/?page=3",
        "previous": "http://api/empresas/?page=1",
        "results": results
    })
}

async fn list_companies(
    State(state): State<ResourceState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<Value> {
    *state.last_query.lock().unwrap() = query;
    *state.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    Json(page_of(vec![
        company_json(1, "Acme Drones"),
        company_json(2, "Vuelos del Norte"),
    ]))
}

async fn get_company(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "empresa no encontrada"})),
        );
    }
    (StatusCode::OK, Json(company_json(id, "Acme Drones")))
}

async fn create_company(
    State(state): State<ResourceState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.last_body.lock().unwrap() = Some(body.clone());
    let name = body["name"].as_str().unwrap_or_default();
    (StatusCode::CREATED, Json(company_json(99, name)))
}

async fn patch_company(
    State(state): State<ResourceState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    *state.last_body.lock().unwrap() = Some(body.clone());
    let name = body["name"].as_str().unwrap_or("Acme Drones");
    Json(company_json(id, name))
}

async fn delete_company(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn list_flight_orders(
    State(state): State<ResourceState>,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    *state.last_query.lock().unwrap() = query;
    Json(json!({
        "count": 1,
        "total_pages": 1,
        "current_page": 1,
        "page_size": 20,
        "next": null,
        "previous": null,
        "results": [{
            "id": 7,
            "company": 1,
            "drone": 3,
            "operator": 5,
            "scheduled_date": "2026-09-02",
            "status": "en_proceso",
            "branch": null,
            "description": "Inspección de torres"
        }]
    }))
}

async fn upload_credential(Path(id): Path<i64>, mut multipart: Multipart) -> Json<Value> {
    let mut stored = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("credencial") {
            let file_name = field.file_name().map(|s| s.to_string());
            let bytes = field.bytes().await.unwrap();
            stored = file_name.map(|name| (name, bytes.len()));
        }
    }
    let (name, size) = stored.expect("credencial part missing");
    assert!(size > 0);
    Json(json!({
        "id": id,
        "first_name": "Juan",
        "last_name": "Pérez",
        "license_number": "LIC-0042",
        "company": 1,
        "email": null,
        "credential_image": format!("https://cdn.example/credenciales/{name}"),
        "is_active": true
    }))
}

fn resource_app(state: ResourceState) -> Router {
    Router::new()
        .route("/empresas/", get(list_companies).post(create_company))
        .route(
            "/empresas/:id/",
            get(get_company).patch(patch_company).delete(delete_company),
        )
        .route("/ordenes-vuelo/", get(list_flight_orders))
        .route("/operadores/:id/credencial/", post(upload_credential))
        .with_state(state)
}

async fn spawn_resource_server() -> (TestServer, ResourceState) {
    let state = ResourceState::default();
    let server = TestServer::spawn(resource_app(state.clone())).await;
    (server, state)
}

/// Client with a live session already in the store.
fn seeded_client(base_url: &str) -> ApiClient {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    store
        .save(&SessionData {
            tokens: Some(SessionTokens {
                access: "access-1".to_string(),
                refresh: "refresh-1".to_string(),
                access_expiry: 4_000_000_000,
                refresh_expiry: 4_100_000_000,
            }),
            tenant_id: None,
            user: None,
            tenant: None,
        })
        .unwrap();
    ApiClient::new(base_url, store)
}

#[tokio::test]
async fn list_decodes_pagination_and_sends_filters_and_bearer() {
    let (server, state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let query = ListQuery::new()
        .page(2)
        .page_size(10)
        .search("acme")
        .ordering("-name");
    let page = client.companies().list(&query).await.unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.current_page, 2);
    assert!(page.has_next());
    assert_eq!(page.results[0].name, "Acme Drones");

    let sent = state.last_query.lock().unwrap().clone().unwrap();
    assert!(sent.contains("page=2"));
    assert!(sent.contains("page_size=10"));
    assert!(sent.contains("search=acme"));
    assert!(sent.contains("ordering=-name"));

    let auth = state.last_auth.lock().unwrap().clone().unwrap();
    assert_eq!(auth, "Bearer access-1");
}

#[tokio::test]
async fn detail_create_and_delete_pass_through() {
    let (server, state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let company = client.companies().get(CompanyId::new(5)).await.unwrap();
    assert_eq!(company.id, CompanyId::new(5));

    let created = client
        .companies()
        .create(&NewCompany {
            name: "Vuelos del Sur".to_string(),
            rfc: None,
            contact_email: None,
            phone: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, CompanyId::new(99));
    assert_eq!(created.name, "Vuelos del Sur");

    // Unset Options are omitted from the create body.
    let body = state.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({"name": "Vuelos del Sur"}));

    client.companies().delete(CompanyId::new(5)).await.unwrap();
}

#[tokio::test]
async fn patch_sends_only_the_set_fields() {
    let (server, state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let patch = CompanyPatch {
        name: Some("Acme Aeronáutica".to_string()),
        ..Default::default()
    };
    let updated = client
        .companies()
        .update(CompanyId::new(1), &patch)
        .await
        .unwrap();
    assert_eq!(updated.name, "Acme Aeronáutica");

    let body = state.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body, json!({"name": "Acme Aeronáutica"}));
}

#[tokio::test]
async fn flight_order_list_sends_date_range_and_decodes_status() {
    let (server, state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let query = ListQuery::new().between(
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
    );
    let page = client.flight_orders().list(&query).await.unwrap();

    assert_eq!(page.results[0].status, FlightOrderStatus::EnProceso);
    assert_eq!(
        page.results[0].scheduled_date,
        NaiveDate::from_ymd_opt(2026, 9, 2).unwrap()
    );

    let sent = state.last_query.lock().unwrap().clone().unwrap();
    assert!(sent.contains("date_from=2026-09-01"));
    assert!(sent.contains("date_to=2026-09-30"));
}

#[tokio::test]
async fn credential_upload_round_trips_the_image() {
    let (server, _state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let operator = client
        .operators()
        .upload_credential(OperatorId::new(3), "licencia.png", vec![0xFF, 0xD8, 0xFF])
        .await
        .unwrap();

    assert_eq!(operator.id, OperatorId::new(3));
    assert_eq!(
        operator.credential_image.as_deref(),
        Some("https://cdn.example/credenciales/licencia.png")
    );
}

#[tokio::test]
async fn remote_failures_surface_the_server_detail() {
    let (server, _state) = spawn_resource_server().await;
    let client = seeded_client(&server.base_url);

    let err = client.companies().get(CompanyId::new(404)).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "empresa no encontrada");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
