use wallet_dashboard::{app, config::Config, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!(
        rpc_host = %config.rpc_host,
        rpc_port = config.rpc_port,
        dashboard_port = config.dashboard_port,
        "starting wallet dashboard"
    );

    let listen_port = config.dashboard_port;
    let state = AppState::new(config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", listen_port))
        .await
        .expect("failed to bind dashboard listener");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("dashboard server exited unexpectedly");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutting down");
}
