use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::warn;

use crate::completion::{CompletionClient, OpenAiClient};
use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::users::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn UserStore>,
    pub completions: Arc<dyn CompletionClient>,
    pub notifier: Notifier,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            warn!(error = %e, "migration failed; continuing with existing schema");
        }

        let store = Arc::new(PgUserStore::new(db)) as Arc<dyn UserStore>;
        let completions = Arc::new(OpenAiClient::new(&config.openai)?) as Arc<dyn CompletionClient>;
        let notifier = Notifier::from_config(config.smtp.as_ref())?;

        Ok(Self {
            config,
            store,
            completions,
            notifier,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn UserStore>,
        completions: Arc<dyn CompletionClient>,
        notifier: Notifier,
    ) -> Self {
        Self {
            config,
            store,
            completions,
            notifier,
        }
    }
}
