use aws_spend_monitor::{
    api::{create_router, AppState},
    clock::SystemClock,
    config::Config,
    integration::IntegrationDescriptor,
    notify::WebhookDispatcher,
    provider::AwsCostExplorer,
    telemetry, SpendMonitor,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    telemetry::init(&config.telemetry)?;

    info!("Starting AWS Spend Monitor");
    info!(
        region = %config.aws.region,
        endpoint = config.aws.endpoint.as_deref().unwrap_or("default"),
        "Cost provider configured"
    );

    let clock = Arc::new(SystemClock);
    let provider = Arc::new(AwsCostExplorer::new(config.aws.clone(), clock.clone())?);
    let dispatcher = Arc::new(WebhookDispatcher::new(config.dispatch_timeout())?);

    let monitor = SpendMonitor::new(provider, dispatcher, clock)
        .with_provider_timeout(config.aws.timeout());

    let state = Arc::new(
        AppState::new(monitor, IntegrationDescriptor::load()?)
            .with_public_base_url(config.server.public_base_url.clone()),
    );

    let app = create_router(state);

    let addr = config.server_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
