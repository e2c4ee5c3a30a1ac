// merchdesk-client/tests/http_api.rs
// Integration tests against a loopback mock of the Sales Reporting API.

use axum::extract::{Form, Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use merchdesk_client::{ClientConfig, ClientError};
use serde::Deserialize;
use serde_json::json;
use shared::models::{ReportFilter, ReportStatus};
use std::collections::HashMap;

/// Bind the router on an ephemeral loopback port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn report_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "salesId": id,
        "merchandiserId": 4,
        "merchandiserName": "Layla",
        "retailPartnerId": 7,
        "reportDate": "2025-06-27",
        "status": status,
        "notes": null,
        "submittedAt": "2025-06-27T08:00:00Z",
        "data": [{
            "productId": 2,
            "productName": "Olive Oil 500ml",
            "quantitySold": 5,
            "salesPrice": 12.0,
            "discountPercent": 5.0,
            "finalPrice": 57.0
        }],
        "totalQuantity": 5,
        "totalSales": 60.0,
        "finalValue": 57.0
    })
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

#[tokio::test]
async fn login_is_form_encoded_and_stores_the_token() {
    async fn login(Form(form): Form<LoginForm>) -> impl IntoResponse {
        if form.username == "admin" && form.password == "secret" {
            (
                StatusCode::OK,
                Json(json!({ "access_token": "tok-123", "token_type": "bearer" })),
            )
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Incorrect username or password" })),
            )
        }
    }

    let base_url = serve(Router::new().route("/auth/login", post(login))).await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    assert!(!client.is_logged_in());
    let token = client.login("admin", "secret").await.unwrap();
    assert_eq!(token.access_token, "tok-123");
    assert_eq!(client.token().as_deref(), Some("tok-123"));

    let err = client.login("admin", "wrong").await.unwrap_err();
    assert!(err.to_string().contains("Incorrect username or password"));
}

#[tokio::test]
async fn list_reports_sends_bearer_token_and_query_filter() {
    async fn list(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if auth != "Bearer tok-123" {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Could not validate credentials" })),
            );
        }
        if params.get("status").map(String::as_str) != Some("submitted")
            || params.get("retail_partner_id").map(String::as_str) != Some("7")
        {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "unexpected filter" })),
            );
        }
        (
            StatusCode::OK,
            Json(json!([report_json(1, "submitted"), report_json(2, "submitted")])),
        )
    }

    let base_url = serve(Router::new().route("/sales/daily-sales-reports", get(list))).await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-123")
        .build_http_client()
        .unwrap();

    let filter = ReportFilter::submitted().with_retail_partner(7);
    let reports = client.list_daily_sales_reports(&filter).await.unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].sales_id, 1);
    assert_eq!(reports[0].status, ReportStatus::Submitted);
    assert_eq!(reports[0].data[0].product_name, "Olive Oil 500ml");
}

#[tokio::test]
async fn set_report_status_patches_the_decision() {
    async fn patch_status(
        Path(id): Path<i64>,
        Json(body): Json<serde_json::Value>,
    ) -> impl IntoResponse {
        if id == 5 && body == json!({ "status": "approved" }) {
            (StatusCode::OK, Json(report_json(5, "approved")))
        } else {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": "bad transition" })),
            )
        }
    }

    let base_url = serve(
        Router::new().route("/sales/daily-sales-reports/{id}", patch(patch_status)),
    )
    .await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-123")
        .build_http_client()
        .unwrap();

    client
        .set_report_status(5, ReportStatus::Approved)
        .await
        .unwrap();

    let err = client
        .set_report_status(6, ReportStatus::Approved)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.server_detail(), Some("bad transition"));
}

#[tokio::test]
async fn server_errors_carry_the_detail_message() {
    async fn boom() -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "database exploded" })),
        )
    }
    async fn missing() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Report not found" })),
        )
    }

    let base_url = serve(
        Router::new()
            .route("/sales/daily-sales-reports/{id}", patch(boom))
            .route("/sales/retail-partners/{id}", get(missing)),
    )
    .await;
    let client = ClientConfig::new(base_url).build_http_client().unwrap();

    let err = client
        .set_report_status(1, ReportStatus::Rejected)
        .await
        .unwrap_err();
    match err {
        ClientError::Server { status, ref detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "database exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client.get_retail_partner(9).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.server_detail(), Some("Report not found"));
}

#[tokio::test]
async fn a_401_on_a_data_endpoint_discards_the_token() {
    async fn reject() -> impl IntoResponse {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Could not validate credentials" })),
        )
    }

    let base_url = serve(Router::new().route("/sales/inventory/summary", get(reject))).await;
    let client = ClientConfig::new(base_url)
        .with_token("stale-token")
        .build_http_client()
        .unwrap();

    let err = client.inventory_summary().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!client.is_logged_in(), "global logout after 401");
}

#[tokio::test]
async fn create_retail_partner_round_trips() {
    async fn create(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
        (
            StatusCode::CREATED,
            Json(json!({
                "id": 11,
                "store": body["name"],
                "location": body["location"],
                "merchandisers": []
            })),
        )
    }

    let base_url = serve(Router::new().route("/sales/retail-partners", post(create))).await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-123")
        .build_http_client()
        .unwrap();

    let partner = client
        .create_retail_partner(&shared::models::RetailPartnerCreate {
            name: "Spinneys".to_string(),
            location: "The Pearl".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(partner.id, 11);
    assert_eq!(partner.store, "Spinneys");
}
