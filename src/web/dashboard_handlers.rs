// src/web/dashboard_handlers.rs
// Endpoints do dashboard. Os valores aqui estão em MINUTOS.
use crate::{
    error::AppResult,
    models::relatorio::{AdvogadosPorDepartamento, HorasPorDepartamento, TopAdvogado},
    services::relatorio_service,
};
use axum::{extract::State, Json};
use sqlx::SqlitePool;

/// Os 5 advogados com mais minutos registados.
#[utoipa::path(
    get,
    path = "/api/dashboard/topadvogados",
    tag = "Dashboard",
    operation_id = "GetTopAdvogados",
    responses((status = 200, description = "Top de advogados, em minutos", body = Vec<TopAdvogado>))
)]
pub async fn top_advogados(State(pool): State<SqlitePool>) -> AppResult<Json<Vec<TopAdvogado>>> {
    Ok(Json(relatorio_service::top_advogados(&pool).await?))
}

/// Minutos por departamento do registo de horas.
#[utoipa::path(
    get,
    path = "/api/dashboard/horasPorDepartamento",
    tag = "Dashboard",
    operation_id = "GetHorasPorDepartamento",
    responses(
        (status = 200, description = "Minutos por departamento", body = Vec<HorasPorDepartamento>)
    )
)]
pub async fn horas_por_departamento(
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<HorasPorDepartamento>>> {
    Ok(Json(relatorio_service::horas_por_departamento(&pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/advogadosPorDepartamento",
    tag = "Dashboard",
    operation_id = "GetAdvogadosPorDepartamento",
    responses(
        (
            status = 200,
            description = "Advogados por departamento",
            body = Vec<AdvogadosPorDepartamento>
        )
    )
)]
pub async fn advogados_por_departamento(
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<AdvogadosPorDepartamento>>> {
    Ok(Json(relatorio_service::advogados_por_departamento(&pool).await?))
}
