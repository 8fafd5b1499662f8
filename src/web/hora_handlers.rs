// src/web/hora_handlers.rs
use crate::{
    error::{AppError, AppResult, Problema},
    models::hora::Hora,
    services::hora_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/api/horas",
    tag = "Horas",
    operation_id = "GetHoras",
    responses((status = 200, description = "Todos os registos de horas", body = Vec<Hora>))
)]
pub async fn list_horas(State(state): State<AppState>) -> AppResult<Json<Vec<Hora>>> {
    Ok(Json(hora_service::find_all_horas(&state.db_pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/horas/{id}",
    tag = "Horas",
    operation_id = "GetHoraById",
    params(("id" = i64, Path, description = "ID do registo de horas")),
    responses(
        (status = 200, description = "Registo encontrado", body = Hora),
        (status = 404, description = "Registo inexistente", body = Problema)
    )
)]
pub async fn get_hora(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Hora>> {
    match hora_service::find_hora_by_id(&state.db_pool, id).await? {
        Some(hora) => Ok(Json(hora)),
        None => Err(AppError::NotFound(format!("registo de horas {}", id))),
    }
}

#[utoipa::path(
    get,
    path = "/api/horas/advogado/{id}",
    tag = "Horas",
    operation_id = "GetHorasByAdvogado",
    params(("id" = i64, Path, description = "ID do advogado")),
    responses((status = 200, description = "Registos do advogado", body = Vec<Hora>))
)]
pub async fn list_horas_by_advogado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Hora>>> {
    Ok(Json(hora_service::find_horas_by_advogado(&state.db_pool, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/horas/departamento/{departamento}",
    tag = "Horas",
    operation_id = "GetHorasByDepartamento",
    params(("departamento" = String, Path, description = "Departamento do registo")),
    responses((status = 200, description = "Registos do departamento", body = Vec<Hora>))
)]
pub async fn list_horas_by_departamento(
    State(state): State<AppState>,
    Path(departamento): Path<String>,
) -> AppResult<Json<Vec<Hora>>> {
    let horas = hora_service::find_horas_by_departamento(&state.db_pool, &departamento).await?;
    Ok(Json(horas))
}
