pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod types;
pub(crate) mod utils;

use config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::config::Args;
use crate::core::error::ConfigError as Error;
use crate::core::state::AppState;
use crate::core::store::{ConfigStore, Dataset, UserStore};

pub async fn run() -> Result<(), Error> {
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("CONFGATE"))
        .build()
        .map_err(Error::Config)?;

    let config = config.try_deserialize::<Args>().map_err(Error::Config)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing secret is not fatal at startup; protected operations answer
    // with a configuration error until one is supplied.
    if config.secret.as_deref().is_none_or(str::is_empty) {
        tracing::warn!("no signing secret configured, protected operations will fail");
    }

    let dataset = Dataset::load(&config.data_file)?;

    tracing::debug!(
        users = dataset.users.len(),
        configs = dataset.configs.len(),
        "dataset loaded"
    );

    let state = AppState::new(
        UserStore::new(dataset.users),
        ConfigStore::new(dataset.configs),
        config.secret,
    );

    let app = routes::router::routes(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::debug!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
