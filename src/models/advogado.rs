// src/models/advogado.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Uma linha da tabela `Advogados`.
///
/// Os nomes JSON seguem as colunas da tabela (`ID`, `Nome`, ...), que é o
/// formato que o dashboard consome.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Advogado {
    #[serde(rename = "ID")]
    pub id: i64, // SQLite usa i64 para inteiros
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(rename = "Sobrenome")]
    pub sobrenome: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Departamento")]
    pub departamento: String,
    #[serde(rename = "Escalao")]
    pub escalao: String,
    #[serde(rename = "Cidade")]
    pub cidade: String,
    #[serde(rename = "Aniversario")]
    pub aniversario: NaiveDate, // Guardado como TEXT "YYYY-MM-DD"
}

impl Advogado {
    /// "Nome Sobrenome", usado nos relatórios por advogado.
    pub fn nome_completo(&self) -> String {
        format!("{} {}", self.nome, self.sobrenome)
    }
}
