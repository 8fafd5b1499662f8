// src/web/openapi.rs
use crate::{
    error::Problema,
    models::{
        advogado::Advogado,
        hora::Hora,
        relatorio::{
            AdvogadosPorDepartamento, EvolucaoMensal, HorasPorDepartamento, TopAdvogado,
            TotalHorasAdvogado,
        },
    },
    web::{advogado_handlers, dashboard_handlers, hora_handlers},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Caminho do documento OpenAPI servido junto com o Swagger UI.
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Database Access API",
        version = "v1",
        description = "API para acessar dados de advogados e registros de horas",
    ),
    paths(
        advogado_handlers::list_advogados,
        advogado_handlers::get_advogado,
        advogado_handlers::list_advogados_by_departamento,
        advogado_handlers::total_hours,
        advogado_handlers::total_hours_all,
        advogado_handlers::monthly_evolution,
        hora_handlers::list_horas,
        hora_handlers::get_hora,
        hora_handlers::list_horas_by_advogado,
        hora_handlers::list_horas_by_departamento,
        dashboard_handlers::top_advogados,
        dashboard_handlers::horas_por_departamento,
        dashboard_handlers::advogados_por_departamento,
    ),
    components(schemas(
        Advogado,
        Hora,
        TotalHorasAdvogado,
        EvolucaoMensal,
        TopAdvogado,
        HorasPorDepartamento,
        AdvogadosPorDepartamento,
        Problema,
    )),
    tags(
        (name = "Advogados", description = "Advogados e horas por advogado"),
        (name = "Horas", description = "Registos de horas"),
        (name = "Dashboard", description = "Resumos do dashboard, em minutos")
    )
)]
pub struct ApiDoc;

/// Swagger UI em `/swagger`, a ler o documento de `OPENAPI_JSON`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger").url(OPENAPI_JSON, ApiDoc::openapi())
}
