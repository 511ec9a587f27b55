//! End-to-end submissions against an in-process stub of the prediction service.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sicop_cotizador::form::fields;
use sicop_cotizador::view::{ApiStatus, LinkCell, SegmentPanel, SimilarTable};
use sicop_cotizador::{ClientConfig, Controller, FormValues, HttpApiClient, Page};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<(HashMap<String, String>, Value)>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn controller(base: &str) -> Controller<HttpApiClient, Page> {
    let client = HttpApiClient::with_config(ClientConfig::with_base(base)).unwrap();
    Controller::new(client, Page::default())
}

fn sample_form() -> FormValues {
    FormValues::new()
        .with_text(fields::SUP_TOTAL, "120")
        .with_text(fields::SUP_CONSTRUIDA, "95.5")
        .with_text(fields::DORMITORIOS, "3")
        .with_text(fields::BANOS, "2")
        .with_text(fields::ESTACIONAMIENTOS, "")
        .with_text(fields::ANTIGUEDAD, "8")
        .with_text(fields::COMUNA, "  Las Condes ")
        .with_text(fields::BODEGAS, "1")
        .with_checked(fields::TERRAZA, true)
        .with_checked(fields::PISCINA, false)
}

async fn predict() -> Json<Value> {
    Json(json!({
        "precio_estimado_uf": 4567.891,
        "precio_modelo_uf": 4400.0,
        "k_usado_para_ajuste": 5
    }))
}

async fn segmento_fails() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

async fn similar_empty(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    seen.lock().unwrap().push((params, body));
    Json(json!({ "k": 5, "similares": [] }))
}

#[tokio::test]
async fn endpoints_degrade_independently() {
    let seen = Seen::default();
    let app = Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/predict", post(predict))
        .route("/segmento", post(segmento_fails))
        .route("/similar", post(similar_empty))
        .with_state(seen.clone());
    let base = serve(app).await;

    let mut controller = controller(&base);
    controller.on_load().await;
    let gathered = controller.on_submit(&sample_form()).await;

    assert!(gathered.estimate.is_some());
    assert!(gathered.segments.is_none());

    let page = controller.surface();
    assert_eq!(page.api_status, ApiStatus::Ready);
    assert_eq!(page.price, "4.567,89 UF");
    assert_eq!(page.segments, SegmentPanel::undefined());
    assert_eq!(page.similars, SimilarTable::empty());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (params, body) = &seen[0];
    assert_eq!(params.get("k").map(String::as_str), Some("5"));
    assert_eq!(body["comuna"], json!("las condes"));
    assert_eq!(body["sup_total"], json!(120.0));
    assert_eq!(body["sup_construida"], json!(95.5));
    assert_eq!(body["dormitorios"], json!(3));
    assert_eq!(body["estacionamientos"], json!(0));
    assert_eq!(body["terraza"], json!(true));
    assert_eq!(body["aire_acondicionado"], json!(false));
    assert!(body.get("pisos").is_none());
}

#[tokio::test]
async fn unreachable_service_leaves_placeholders() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut controller = controller(&format!("http://{}", addr));
    controller.on_load().await;
    let gathered = controller.on_submit(&sample_form()).await;

    assert!(gathered.estimate.is_none());
    assert!(gathered.segments.is_none());
    assert!(gathered.similars.is_none());

    let page = controller.surface();
    assert_eq!(page.api_status, ApiStatus::Unreachable);
    assert!(page.is_blank());
}

#[tokio::test]
async fn unhealthy_service_marks_indicator() {
    let app = Router::new().route(
        "/health",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = serve(app).await;

    let mut controller = controller(&base);
    controller.on_load().await;

    assert_eq!(controller.surface().api_status, ApiStatus::Unreachable);
}

async fn segmento_ok() -> Json<Value> {
    Json(json!({
        "segmento_global": {
            "cluster": 1,
            "nombre_segmento": "Segmento Medio-bajo",
            "n_propiedades": 842,
            "promedio_uf": 3120.5,
            "promedio_sup_total": 68.25,
            "promedio_dormitorios": 2.1
        },
        "segmento_local": null
    }))
}

async fn similar_two() -> Json<Value> {
    Json(json!({
        "similares": [
            {
                "id_propiedad": 311,
                "comuna": "Las Condes",
                "sup_total": 118.0,
                "dormitorios": 3,
                "banos": 2,
                "estacionamientos": 1,
                "precio_en_uf": 9850.0,
                "url_portal": "https://portal.example.cl/311"
            },
            {
                "id_propiedad": 12,
                "comuna": "Las Condes",
                "sup_total": 125.5,
                "dormitorios": 3,
                "banos": 3,
                "estacionamientos": 2,
                "precio_en_uf": 10200.0,
                "url_portal": ""
            }
        ]
    }))
}

#[tokio::test]
async fn malformed_body_resets_every_region() {
    let app = Router::new()
        .route("/predict", post(|| async { "{not json" }))
        .route("/segmento", post(segmento_ok))
        .route("/similar", post(similar_two));
    let base = serve(app).await;

    let mut controller = controller(&base);
    controller.on_submit(&sample_form()).await;
    let page = controller.surface();

    assert!(page.is_blank(), "stale regions after malformed body:\n{}", page);
}

#[tokio::test]
async fn null_body_only_blanks_its_own_region() {
    let app = Router::new()
        .route("/predict", post(|| async { Json(Value::Null) }))
        .route("/segmento", post(segmento_ok))
        .route("/similar", post(similar_two));
    let base = serve(app).await;

    let mut controller = controller(&base);
    let gathered = controller.on_submit(&sample_form()).await;
    let page = controller.surface();

    assert!(gathered.estimate.is_none());
    assert_eq!(page.price, "-");

    let SegmentPanel::Defined { global, .. } = &page.segments else {
        panic!("expected segment sections, got {:?}", page.segments);
    };
    let values: Vec<&str> = global.lines.iter().map(|line| line.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["Segmento Medio-bajo", "1", "842", "3.120,50 UF", "68,3 m²", "2,1"]
    );

    let SimilarTable::Rows(rows) = &page.similars else {
        panic!("expected listing rows, got {:?}", page.similars);
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].cells,
        vec!["311", "Las Condes", "118", "3", "2", "1", "9.850,00"]
    );
    assert!(matches!(rows[0].link, LinkCell::Link { .. }));
    assert_eq!(rows[1].cells[0], "12");
    assert_eq!(rows[1].cells[2], "125.5");
    assert_eq!(rows[1].link, LinkCell::Placeholder);
}
