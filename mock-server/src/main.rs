use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    tracing::info!(%addr, "binding mock server");
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(%addr, error = %e, "failed to bind mock server");
    })?;
    mock_server::run(listener).await
}
