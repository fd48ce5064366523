use fittings_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration and logging
    let config = setup_environment()?;

    print_banner();

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "QRixAlt API starting..."
    );

    // 2. Open database, apply migrations
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C / SIGTERM
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
