use axum::Router;
use std::net::SocketAddr;
use std::sync::LazyLock;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_auth::RedactingFormatter;

use crate::redact::RedactingMakeWriter;

/// Listening port, from `PORT`
pub(crate) static PORT: LazyLock<u16> = LazyLock::new(|| {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
});

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<std::io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
    })
}

/// Log to stdout with PII fields masked in every line
pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("session_auth=debug,session_auth_axum=debug,{app_name}=debug,info").into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(RedactingMakeWriter::new(
                    std::io::stdout,
                    RedactingFormatter::pii(),
                )),
        )
        .init();

    tracing::info!("You can increase verbosity by setting the RUST_LOG environment variable.");
}
