// src/lib.rs
// API de leitura de advogados e registos de horas, com os relatórios do dashboard.

// --- Declaração dos Módulos ---
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
