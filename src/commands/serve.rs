//! Run the HTTP API.

use tokio::net::TcpListener;
use tracing::info;

use crate::{
    api::{create_router, AppState},
    core::ServiceConfig,
    providers::Providers,
    Result,
};

/// Bind `config.bind` and serve until the process is stopped.
pub async fn handle_serve(config: ServiceConfig) -> Result<()> {
    let providers = Providers::from_config(&config.upstream)?;
    let state = AppState::new(providers, config.service_name.as_str());
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        "{} listening on http://{}",
        config.service_name,
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
