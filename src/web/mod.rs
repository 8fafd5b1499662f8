// src/web/mod.rs
pub mod advogado_handlers;
pub mod dashboard_handlers;
pub mod hora_handlers;
pub mod openapi;
pub mod routes;
