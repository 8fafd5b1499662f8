#![allow(dead_code)]

use advogados_horas::{db, state::AppState, web};
use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt;

pub struct TestContext {
    pub state: AppState,
    pub app: axum::Router,
}

// (Nome, Sobrenome, Departamento); o ID é atribuído pela ordem (1..)
pub const ADVOGADOS: &[(&str, &str, &str)] = &[
    ("Ana", "Costa", "Civil"),
    ("Bruno", "Sousa", "Civil"),
    ("Carla", "Lopes", "Penal"),
    ("Duarte", "Reis", "Fiscal"),
    ("Eva", "Matos", "Laboral"),
    ("Filipe", "Nunes", "Civil"),
];

// (ID, Caso, ID_Advogado, Minutos_Registados, Departamento, Data)
pub type LinhaHora = (
    Option<i64>,
    Option<&'static str>,
    Option<i64>,
    Option<i64>,
    Option<&'static str>,
    Option<&'static str>,
);

pub const HORAS: &[LinhaHora] = &[
    (Some(1), Some("Caso A"), Some(1), Some(30), Some("Civil"), Some("2024-01-15")),
    (Some(2), Some("Caso A"), Some(1), Some(45), Some("Civil"), Some("2024-02-03")),
    (Some(3), Some("Caso B"), Some(1), None, Some("Civil"), Some("2024-02-10")),
    (Some(4), Some("Caso C"), Some(2), Some(200), Some("Civil"), Some("2024-01-20")),
    (Some(5), Some("Caso D"), Some(6), Some(225), Some("Civil"), None),
    (Some(6), Some("Caso E"), Some(3), Some(300), Some("Penal"), Some("2023-12-05")),
    (None, Some("Sem advogado"), None, Some(600), None, Some("2024-03-01")),
    (Some(8), Some("Caso F"), Some(5), Some(120), Some("Laboral"), Some("2024-03-02")),
    (Some(9), Some("Caso G"), Some(99), Some(50), Some("Laboral"), Some("2024-03-02")),
];

/// Pool em memória com as migrações aplicadas. Uma só conexão: cada
/// conexão SQLite `:memory:` tem a sua própria base de dados.
pub async fn memory_pool() -> Result<SqlitePool> {
    Ok(db::connect("sqlite::memory:", 1).await?)
}

pub async fn insert_advogados(pool: &SqlitePool, advogados: &[(&str, &str, &str)]) -> Result<()> {
    for (nome, sobrenome, departamento) in advogados {
        sqlx::query(
            "INSERT INTO Advogados
                 (Nome, Sobrenome, Email, Departamento, Escalao, Cidade, Aniversario)
             VALUES (?1, ?2, ?3, ?4, 'Associado', 'Lisboa', '1980-05-01')",
        )
        .bind(nome)
        .bind(sobrenome)
        .bind(format!("{}.{}@firma.pt", nome.to_lowercase(), sobrenome.to_lowercase()))
        .bind(departamento)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn insert_horas(pool: &SqlitePool, horas: &[LinhaHora]) -> Result<()> {
    for (id, caso, id_advogado, minutos, departamento, data) in horas {
        sqlx::query(
            "INSERT INTO Horas (ID, Caso, ID_Advogado, Minutos_Registados, Departamento, Data)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(id)
        .bind(caso)
        .bind(id_advogado)
        .bind(minutos)
        .bind(departamento)
        .bind(data)
        .execute(pool)
        .await?;
    }
    Ok(())
}

pub async fn build_empty_context() -> Result<TestContext> {
    let db_pool = memory_pool().await?;
    let state = AppState { db_pool };
    let app = web::routes::create_router(state.clone());
    Ok(TestContext { state, app })
}

pub async fn build_test_context() -> Result<TestContext> {
    let ctx = build_empty_context().await?;
    insert_advogados(&ctx.state.db_pool, ADVOGADOS).await?;
    insert_horas(&ctx.state.db_pool, HORAS).await?;
    Ok(ctx)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json)
}

pub fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().expect("value should be a number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_not_found(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert!(body["title"].is_string());
}
