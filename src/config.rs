// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr, str::FromStr};

/// Configuração lida do ambiente (e do ficheiro `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// `*` para qualquer origem, um URL para uma só, `None` para não ativar CORS.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok(); // Carrega .env

        let database_url = env::var("DATABASE_URL")?;
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5)?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("APP_PORT", 3000)?;
        let cors_origin = env::var("CORS_ORIGIN").ok().filter(|o| !o.trim().is_empty());

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            cors_origin,
        })
    }

    /// Endereço onde o servidor vai escutar.
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("APP_HOST/APP_PORT inválidos: {}", e)))
    }
}

// Lê uma variável numérica; ausente -> valor por omissão, inválida -> erro
fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} inválida ('{}'): {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}
