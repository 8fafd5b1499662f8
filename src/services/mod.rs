// src/services/mod.rs
pub mod advogado_service;
pub mod agregacao;
pub mod hora_service;
pub mod relatorio_service;
