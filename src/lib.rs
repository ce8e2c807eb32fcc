pub mod client;
pub mod config;
pub mod llm;
pub mod middleware;
pub mod presentation;
pub mod recommend;
pub mod server;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Model client error: {0}")]
    Llm(#[from] llm::LlmError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: &str, debug_logs: bool) -> Result<(), ServerError> {
    let mut config = config::Config::from_file_or_default(config_path)?;
    config.debug_logs = debug_logs;

    info!("Using config file: {}", config_path);
    if config.debug_logs {
        info!("Debug logging enabled");
    }

    // Refuse to start without a key rather than failing every request later.
    let api_key = config.resolve_api_key()?;
    let generator = llm::GeminiClient::new(api_key, &config.gemini)?;
    info!(
        model = %config.gemini.model,
        region = %config.recommend.region,
        places = config.recommend.place_count,
        "Text generator configured"
    );

    let recommender = recommend::Recommender::new(Arc::new(generator), config.recommend.clone());

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let state = server::AppState::new(recommender);
    let app = server::build_router(state);

    match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert_path), Some(key_path)) => {
            info!("Loading TLS certificate from {}", cert_path);
            info!("Loading TLS key from {}", key_path);

            let tls_config =
                axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path)
                    .await
                    .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

            info!("Serving HTTPS on {}", addr);

            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await
                .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
        }
        _ => {
            info!("Serving HTTP on {}", addr);

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

            axum::serve(listener, app)
                .await
                .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
        }
    }

    Ok(())
}
