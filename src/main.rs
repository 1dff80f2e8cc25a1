use portfolio_contact::configuration::get_configuration;
use portfolio_contact::startup::Application;
use portfolio_contact::telemetry::get_subscriber;
use portfolio_contact::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // RUST_LOG overrides the default level
    let subscriber = get_subscriber("portfolio-contact", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    tracing::info!(
        host = %cfg.application.host,
        port = cfg.application.port,
        base_path = %cfg.application.base_path,
        "starting server"
    );

    let server = Application::build(cfg).await?;
    server.run_until_stopped().await?;

    Ok(())
}
