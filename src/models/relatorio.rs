// src/models/relatorio.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Linhas devolvidas pelos endpoints de relatório/dashboard ---

/// Total de horas de um advogado (`/api/advogados/total-hours`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TotalHorasAdvogado {
    #[serde(rename = "AdvogadoID")]
    pub advogado_id: i64,
    #[serde(rename = "NomeCompleto")]
    pub nome_completo: String,
    #[serde(rename = "TotalHoras")]
    pub total_horas: f64,
}

/// Horas de um advogado num mês (`/api/advogados/{id}/monthly-evolution`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvolucaoMensal {
    #[serde(rename = "Ano")]
    pub ano: i32,
    #[serde(rename = "Mes")]
    pub mes: u32,
    #[serde(rename = "TotalHoras")]
    pub total_horas: f64,
}

/// Entrada do top de advogados. Atenção: em minutos, não em horas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopAdvogado {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Nome")]
    pub nome: String,
    #[serde(rename = "Sobrenome")]
    pub sobrenome: String,
    #[serde(rename = "Departamento")]
    pub departamento: String,
    #[serde(rename = "TotalMinutos")]
    pub total_minutos: i64,
}

/// Minutos por departamento do registo de horas (não do advogado).
/// `Departamento` vem a `null` para os registos sem departamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HorasPorDepartamento {
    #[serde(rename = "Departamento")]
    pub departamento: Option<String>,
    #[serde(rename = "TotalMinutos")]
    pub total_minutos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvogadosPorDepartamento {
    #[serde(rename = "Departamento")]
    pub departamento: String,
    #[serde(rename = "TotalAdvogados")]
    pub total_advogados: i64,
}
