use anyhow::Context;
use hello_service::configuration::get_configuration;
use hello_service::startup::build;
use hello_service::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("hello-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = build(config).context("Failed to bind the listener.")?;
    app.run().await?;

    Ok(())
}
