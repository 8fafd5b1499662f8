// src/main.rs
use advogados_horas::{config::Config, db, state::AppState, web};
use axum::serve;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advogados_horas=debug,tower_http=info,sqlx=warn".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando API de advogados e horas...");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Falha ao ler configuração: {}", e))?;
    let addr = config.socket_addr()?;

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };

    let app_state = AppState { db_pool };

    // --- Configuração do Endereço e Listener ---
    tracing::info!("📡 Servidor escutando em http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };

    // --- Router e Camadas (Middlewares) ---
    let mut app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if let Some(origin) = config.cors_origin.as_deref() {
        tracing::info!("🌐 CORS ativo para: {}", origin);
        app = app.layer(web::routes::cors_layer(origin)?);
    }
    tracing::info!("✅ Router e middlewares configurados.");

    // --- Início do Servidor ---
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
