// src/web/advogado_handlers.rs
use crate::{
    error::{AppError, AppResult, Problema},
    models::{
        advogado::Advogado,
        relatorio::{EvolucaoMensal, TotalHorasAdvogado},
    },
    services::{advogado_service, relatorio_service},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

/// Todos os advogados.
#[utoipa::path(
    get,
    path = "/api/advogados",
    tag = "Advogados",
    operation_id = "GetAdvogados",
    responses(
        (status = 200, description = "Lista de advogados", body = Vec<Advogado>),
        (status = 500, description = "Falha da base de dados", body = Problema)
    )
)]
pub async fn list_advogados(State(state): State<AppState>) -> AppResult<Json<Vec<Advogado>>> {
    let advogados = advogado_service::find_all_advogados(&state.db_pool).await?;
    Ok(Json(advogados))
}

/// Um advogado pelo ID.
// O id já vem validado como inteiro pelo extrator Path (senão: 400)
#[utoipa::path(
    get,
    path = "/api/advogados/{id}",
    tag = "Advogados",
    operation_id = "GetAdvogadoById",
    params(("id" = i64, Path, description = "ID do advogado")),
    responses(
        (status = 200, description = "Advogado encontrado", body = Advogado),
        (status = 400, description = "ID não inteiro"),
        (status = 404, description = "Advogado inexistente", body = Problema)
    )
)]
pub async fn get_advogado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Advogado>> {
    advogado_service::find_advogado_by_id(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("advogado {}", id)))
}

/// Advogados de um departamento (igualdade exata).
#[utoipa::path(
    get,
    path = "/api/advogados/departamento/{departamento}",
    tag = "Advogados",
    operation_id = "GetAdvogadosByDepartamento",
    params(("departamento" = String, Path, description = "Nome do departamento, ex. Civil")),
    responses((status = 200, description = "Advogados do departamento", body = Vec<Advogado>))
)]
pub async fn list_advogados_by_departamento(
    State(state): State<AppState>,
    Path(departamento): Path<String>,
) -> AppResult<Json<Vec<Advogado>>> {
    let advogados =
        advogado_service::find_advogados_by_departamento(&state.db_pool, &departamento).await?;
    Ok(Json(advogados))
}

/// Total de horas de cada advogado (0.0 para quem não tem registos).
#[utoipa::path(
    get,
    path = "/api/advogados/total-hours",
    tag = "Advogados",
    operation_id = "GetTotalHorasPorAdvogado",
    responses((status = 200, description = "Horas por advogado", body = Vec<TotalHorasAdvogado>))
)]
pub async fn total_hours(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TotalHorasAdvogado>>> {
    let totais = relatorio_service::total_horas_por_advogado(&state.db_pool).await?;
    Ok(Json(totais))
}

/// Soma de todas as horas registadas, como um número simples.
#[utoipa::path(
    get,
    path = "/api/advogados/total-hours/all",
    tag = "Advogados",
    operation_id = "GetTotalHoras",
    responses((status = 200, description = "Total geral em horas", body = f64))
)]
pub async fn total_hours_all(State(state): State<AppState>) -> AppResult<Json<f64>> {
    let total = relatorio_service::total_horas(&state.db_pool).await?;
    Ok(Json(total))
}

/// Horas por mês de um advogado.
// Lista vazia se o advogado não tiver registos (ou não existir)
#[utoipa::path(
    get,
    path = "/api/advogados/{id}/monthly-evolution",
    tag = "Advogados",
    operation_id = "GetEvolucaoMensal",
    params(("id" = i64, Path, description = "ID do advogado")),
    responses((status = 200, description = "Horas por (ano, mês)", body = Vec<EvolucaoMensal>))
)]
pub async fn monthly_evolution(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<EvolucaoMensal>>> {
    let meses = relatorio_service::evolucao_mensal(&state.db_pool, id).await?;
    Ok(Json(meses))
}
