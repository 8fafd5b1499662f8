// src/services/relatorio_service.rs
use crate::{
    error::AppResult,
    models::relatorio::{
        AdvogadosPorDepartamento, EvolucaoMensal, HorasPorDepartamento, TopAdvogado,
        TotalHorasAdvogado,
    },
    services::{advogado_service, agregacao, hora_service},
};
use sqlx::SqlitePool;

// Cada relatório lê as tabelas de que precisa e agrega em memória.
// Quando lê as duas tabelas, lê-as na mesma transação.

pub async fn total_horas_por_advogado(
    db_pool: &SqlitePool,
) -> AppResult<Vec<TotalHorasAdvogado>> {
    let mut tx = db_pool.begin().await?;
    let advogados = advogado_service::find_all_advogados(&mut *tx).await?;
    let horas = hora_service::find_minutos_horas(&mut *tx).await?;
    tx.commit().await?;

    Ok(agregacao::total_horas_por_advogado(&advogados, &horas))
}

pub async fn total_horas(db_pool: &SqlitePool) -> AppResult<f64> {
    let horas = hora_service::find_minutos_horas(db_pool).await?;
    let total = agregacao::total_horas(&horas);
    tracing::debug!("Total geral: {} horas em {} registos.", total, horas.len());
    Ok(total)
}

pub async fn evolucao_mensal(
    db_pool: &SqlitePool,
    id_advogado: i64,
) -> AppResult<Vec<EvolucaoMensal>> {
    // Só precisamos dos registos deste advogado
    let horas = hora_service::find_horas_by_advogado(db_pool, id_advogado).await?;
    Ok(agregacao::evolucao_mensal(&horas, id_advogado))
}

pub async fn top_advogados(db_pool: &SqlitePool) -> AppResult<Vec<TopAdvogado>> {
    let mut tx = db_pool.begin().await?;
    let horas = hora_service::find_minutos_horas(&mut *tx).await?;
    let advogados = advogado_service::find_all_advogados(&mut *tx).await?;
    tx.commit().await?;

    let top = agregacao::top_advogados(&horas, &advogados, agregacao::TOP_ADVOGADOS);
    tracing::debug!("Top de advogados com {} entradas.", top.len());
    Ok(top)
}

pub async fn horas_por_departamento(
    db_pool: &SqlitePool,
) -> AppResult<Vec<HorasPorDepartamento>> {
    let horas = hora_service::find_minutos_horas(db_pool).await?;
    Ok(agregacao::horas_por_departamento(&horas))
}

pub async fn advogados_por_departamento(
    db_pool: &SqlitePool,
) -> AppResult<Vec<AdvogadosPorDepartamento>> {
    let advogados = advogado_service::find_all_advogados(db_pool).await?;
    Ok(agregacao::advogados_por_departamento(&advogados))
}
