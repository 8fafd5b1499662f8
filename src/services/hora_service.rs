// src/services/hora_service.rs
use crate::{error::AppResult, models::hora::Hora};
use sqlx::{Executor, Sqlite};

// Data pode vir com hora ("2024-05-01 09:30:00"); date() fica só com o dia.
// Um texto que não seja data passa a NULL, ou seja, registo sem data.
const SELECT_HORAS: &str = r#"
    SELECT
        ID as id,
        Caso as caso,
        ID_Advogado as id_advogado,
        Minutos_Registados as minutos_registados,
        Departamento as departamento,
        date(Data) as data
    FROM Horas
"#;

// Só as colunas que os totais somam ou agrupam; as restantes vêm a NULL
const SELECT_MINUTOS: &str = r#"
    SELECT
        NULL as id,
        NULL as caso,
        ID_Advogado as id_advogado,
        Minutos_Registados as minutos_registados,
        Departamento as departamento,
        NULL as data
    FROM Horas
    ORDER BY rowid ASC
"#;

/// Todos os registos de horas, pela ordem em que estão guardados.
pub async fn find_all_horas<'c, E>(executor: E) -> AppResult<Vec<Hora>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando todos os registos de horas...");
    let sql = format!("{} ORDER BY rowid ASC", SELECT_HORAS);
    let horas = sqlx::query_as::<_, Hora>(&sql).fetch_all(executor).await?;
    tracing::debug!("Encontrados {} registos de horas.", horas.len());
    Ok(horas)
}

/// Registos de horas reduzidos a advogado, minutos e departamento.
/// Usado pelos relatórios que não olham para datas nem casos.
pub async fn find_minutos_horas<'c, E>(executor: E) -> AppResult<Vec<Hora>>
where
    E: Executor<'c, Database = Sqlite>,
{
    let horas = sqlx::query_as::<_, Hora>(SELECT_MINUTOS)
        .fetch_all(executor)
        .await?;
    tracing::debug!("Lidos minutos de {} registos de horas.", horas.len());
    Ok(horas)
}

/// Primeiro registo com este ID. A coluna ID aceita NULL e não é única,
/// por isso fica o primeiro pela ordem de armazenamento.
pub async fn find_hora_by_id<'c, E>(executor: E, id: i64) -> AppResult<Option<Hora>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando registo de horas por ID: {}", id);
    let sql = format!("{} WHERE ID = ?1 ORDER BY rowid ASC LIMIT 1", SELECT_HORAS);
    let hora = sqlx::query_as::<_, Hora>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    if hora.is_none() {
        tracing::debug!("Registo de horas '{}' não encontrado.", id);
    }
    Ok(hora)
}

pub async fn find_horas_by_advogado<'c, E>(executor: E, id_advogado: i64) -> AppResult<Vec<Hora>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando horas do advogado: {}", id_advogado);
    let sql = format!("{} WHERE ID_Advogado = ?1 ORDER BY rowid ASC", SELECT_HORAS);
    let horas = sqlx::query_as::<_, Hora>(&sql)
        .bind(id_advogado)
        .fetch_all(executor)
        .await?;
    tracing::debug!(
        "Encontrados {} registos para o advogado {}.",
        horas.len(),
        id_advogado
    );
    Ok(horas)
}

pub async fn find_horas_by_departamento<'c, E>(
    executor: E,
    departamento: &str,
) -> AppResult<Vec<Hora>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando horas do departamento: {}", departamento);
    let sql = format!("{} WHERE Departamento = ?1 ORDER BY rowid ASC", SELECT_HORAS);
    let horas = sqlx::query_as::<_, Hora>(&sql)
        .bind(departamento)
        .fetch_all(executor)
        .await?;
    tracing::debug!(
        "Encontrados {} registos no departamento '{}'.",
        horas.len(),
        departamento
    );
    Ok(horas)
}
