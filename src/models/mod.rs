// src/models/mod.rs
pub mod advogado;
pub mod hora;
pub mod relatorio;
