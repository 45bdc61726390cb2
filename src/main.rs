#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = visitor_badge::config::Config::load()?;
    visitor_badge::telemetry::init(cfg.debug);

    use tracing::info;
    info!("starting visitor badge server");
    let (app, port) = visitor_badge::build_app(cfg).await?;

    let addr = std::net::SocketAddr::from(([0,0,0,0], port));
    info!(%addr, "server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "fail to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
