// src/models/hora.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Uma linha da tabela `Horas`.
///
/// Todos os campos são opcionais: há registos sem ID, sem advogado atribuído,
/// sem minutos ou sem data.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Hora {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    #[serde(rename = "Caso")]
    pub caso: Option<String>,
    #[serde(rename = "ID_Advogado")]
    pub id_advogado: Option<i64>,
    #[serde(rename = "Minutos_Registados")]
    pub minutos_registados: Option<i64>,
    #[serde(rename = "Departamento")]
    pub departamento: Option<String>,
    #[serde(rename = "Data")]
    pub data: Option<NaiveDate>,
}

impl Hora {
    /// Minutos que contam para as somas (NULL conta como zero).
    pub fn minutos(&self) -> i64 {
        self.minutos_registados.unwrap_or(0)
    }
}
