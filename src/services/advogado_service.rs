// src/services/advogado_service.rs
// As funções aceitam o pool ou uma transação (`&mut *tx`).
use crate::{error::AppResult, models::advogado::Advogado};
use sqlx::{Executor, Sqlite};

// Colunas da tabela mapeadas para os campos da struct Advogado.
// date() aceita "YYYY-MM-DD" e "YYYY-MM-DD HH:MM:SS" e devolve só a data.
const SELECT_ADVOGADOS: &str = r#"
    SELECT
        ID as id,
        Nome as nome,
        Sobrenome as sobrenome,
        Email as email,
        Departamento as departamento,
        Escalao as escalao,
        Cidade as cidade,
        date(Aniversario) as aniversario
    FROM Advogados
"#;

/// Todos os advogados, pela ordem em que estão guardados.
pub async fn find_all_advogados<'c, E>(executor: E) -> AppResult<Vec<Advogado>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando todos os advogados...");
    let sql = format!("{} ORDER BY rowid ASC", SELECT_ADVOGADOS);
    let advogados = sqlx::query_as::<_, Advogado>(&sql)
        .fetch_all(executor)
        .await?;
    tracing::debug!("Encontrados {} advogados.", advogados.len());
    Ok(advogados)
}

/// Busca um advogado pelo ID. `None` não é erro: quem chama decide o 404.
pub async fn find_advogado_by_id<'c, E>(executor: E, id: i64) -> AppResult<Option<Advogado>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando advogado por ID: {}", id);
    let sql = format!("{} WHERE ID = ?1", SELECT_ADVOGADOS);
    let advogado = sqlx::query_as::<_, Advogado>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    if advogado.is_some() {
        tracing::debug!("Advogado '{}' encontrado.", id);
    } else {
        tracing::debug!("Advogado '{}' não encontrado.", id);
    }
    Ok(advogado)
}

/// Advogados cujo departamento é exatamente `departamento` (sensível a maiúsculas).
pub async fn find_advogados_by_departamento<'c, E>(
    executor: E,
    departamento: &str,
) -> AppResult<Vec<Advogado>>
where
    E: Executor<'c, Database = Sqlite>,
{
    tracing::debug!("Buscando advogados do departamento: {}", departamento);
    let sql = format!("{} WHERE Departamento = ?1 ORDER BY rowid ASC", SELECT_ADVOGADOS);
    let advogados = sqlx::query_as::<_, Advogado>(&sql)
        .bind(departamento)
        .fetch_all(executor)
        .await?;
    tracing::debug!(
        "Encontrados {} advogados no departamento '{}'.",
        advogados.len(),
        departamento
    );
    Ok(advogados)
}
