// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Configuração inválida: {0}")]
    Config(String),

    // Pedido a um recurso único (advogado/hora) que não existe
    #[error("Não encontrado: {0}")]
    NotFound(String),
}

// Como converter AppError numa resposta HTTP (JSON, consumido pelo dashboard)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, user_message) = match &self {
            AppError::NotFound(recurso) => {
                // Um "não encontrado" é um resultado normal, não um erro do servidor
                tracing::debug!("Recurso não encontrado: {}", recurso);
                (StatusCode::NOT_FOUND, "Recurso não encontrado")
            }
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao aceder aos dados.")
            }
            AppError::EnvVarError(_) | AppError::Config(_) => {
                tracing::error!("Erro processado: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro de configuração.")
            }
        };

        let body = Problema {
            status: status.as_u16(),
            title: user_message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Corpo JSON de qualquer resposta de erro.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Problema {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Recurso não encontrado")]
    pub title: String,
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
