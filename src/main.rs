use contact_relay::{configuration::get_configuration, startup::Application, telemetry};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Set up tracing
    let subscriber =
        telemetry::get_subscriber("contact_relay".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber);

    // Set up configuration
    let configuration = get_configuration()?;

    let application = Application::build(configuration).await.map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Failed to start the contact relay");
        e
    })?;
    application.run_until_stopped().await?;
    Ok(())
}
