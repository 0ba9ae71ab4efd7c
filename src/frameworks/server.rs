use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let addr = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(error) = serve(listener).await {
        tracing::error!(%error, "server error");
    }
}

// Serve on an already-bound listener; integration tests bind an ephemeral
// port themselves and hand it over.
pub async fn serve(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    let state = AppState::default();
    let app = routes::app(state);
    axum::serve(listener, app).await
}
