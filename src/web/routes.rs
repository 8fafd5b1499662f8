// src/web/routes.rs
use crate::{
    error::{AppError, AppResult},
    state::AppState,
    web::{advogado_handlers, dashboard_handlers, hora_handlers, openapi},
};
use axum::{
    http::{HeaderValue, Method, Uri},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const MENSAGEM_RAIZ: &str =
    "API running successfully. Use /api/advogados to test database connection.";

pub fn create_router(app_state: AppState) -> Router {
    // --- Advogados ---
    // Os caminhos estáticos (total-hours, departamento) têm prioridade sobre {id}
    let por_departamento = get(advogado_handlers::list_advogados_by_departamento);
    let advogados_routes = Router::new()
        .route("/", get(advogado_handlers::list_advogados))
        .route("/total-hours", get(advogado_handlers::total_hours))
        .route("/total-hours/all", get(advogado_handlers::total_hours_all))
        .route("/departamento/{departamento}", por_departamento.clone())
        .route("/Departamento/{departamento}", por_departamento)
        .route("/{id}", get(advogado_handlers::get_advogado))
        .route("/{id}/monthly-evolution", get(advogado_handlers::monthly_evolution));

    // --- Horas ---
    let horas_por_departamento = get(hora_handlers::list_horas_by_departamento);
    let horas_routes = Router::new()
        .route("/", get(hora_handlers::list_horas))
        .route("/advogado/{id}", get(hora_handlers::list_horas_by_advogado))
        .route("/Advogado/{id}", get(hora_handlers::list_horas_by_advogado))
        .route("/departamento/{departamento}", horas_por_departamento.clone())
        .route("/Departamento/{departamento}", horas_por_departamento)
        .route("/{id}", get(hora_handlers::get_hora));

    // --- Dashboard ---
    // Também aceita os nomes com maiúscula usados pelo front-end antigo
    let top = get(dashboard_handlers::top_advogados);
    let minutos_por_departamento = get(dashboard_handlers::horas_por_departamento);
    let contagem_por_departamento = get(dashboard_handlers::advogados_por_departamento);
    let dashboard_routes = Router::new()
        .route("/topadvogados", top.clone())
        .route("/TopAdvogados", top)
        .route("/horasPorDepartamento", minutos_por_departamento.clone())
        .route("/HorasPorDepartamento", minutos_por_departamento)
        .route("/advogadosPorDepartamento", contagem_por_departamento.clone())
        .route("/AdvogadosPorDepartamento", contagem_por_departamento);

    // --- Router Final ---
    Router::new()
        .route("/", get(|| async { MENSAGEM_RAIZ }))
        .nest("/api/advogados", advogados_routes)
        .nest("/api/horas", horas_routes)
        .nest("/api/dashboard", dashboard_routes)
        .fallback(rota_inexistente)
        .with_state(app_state)
        // Documentação OpenAPI + Swagger UI
        .merge(openapi::swagger_ui())
}

// Qualquer outro caminho responde com o mesmo 404 em JSON
async fn rota_inexistente(uri: Uri) -> AppError {
    AppError::NotFound(format!("rota {}", uri.path()))
}

/// CORS para o dashboard servido noutra origem. `*` aceita qualquer origem.
pub fn cors_layer(origin: &str) -> AppResult<CorsLayer> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(origin.trim())
            .map_err(|e| AppError::Config(format!("CORS_ORIGIN inválida ('{}'): {}", origin, e)))?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_aceita_asterisco_e_origem_simples() {
        assert!(cors_layer("*").is_ok());
        assert!(cors_layer("http://localhost:5173").is_ok());
    }

    #[test]
    fn cors_rejeita_origem_com_caracteres_invalidos() {
        let err = cors_layer("http://localhost\n:5173").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
