use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::error::StoreError;
use super::query::SelectQuery;

/// Store credentials read from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
}

impl StoreConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_KEY`. Returns `None` unless both are
    /// present and non-empty.
    pub fn from_env() -> Option<Self> {
        let url = env_nonempty("SUPABASE_URL")?;
        let key = env_nonempty("SUPABASE_KEY")?;
        Some(Self { url, key })
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// HTTP client for the remote table store.
///
/// One instance is constructed at startup and shared via an `Extension` layer;
/// handlers reach it through [`StoreState::client`] so a missing configuration
/// surfaces as [`StoreError::NotConfigured`] at call time instead of crashing
/// the process. Store calls carry no timeout; the store is the sole arbiter of
/// how long a query may run.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Executes a filtered read in one round trip and deserializes the row set.
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &SelectQuery,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .http
            .get(self.table_url(query.table_name()))
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(&query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Applies a partial update to the row whose `id` column equals `id` and
    /// returns the post-update rows as stored remotely. An empty row set means
    /// no row matched; the caller decides whether that is an error.
    pub async fn update_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
        patch: &serde_json::Value,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .http
            .patch(self.table_url(table))
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))])
            .json(patch)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Outcome of constructing the store client at startup.
///
/// The health endpoint reports these three states verbatim; every other
/// handler goes through [`StoreState::client`].
pub enum StoreState {
    Connected(StoreClient),
    Disconnected,
    Failed(String),
}

impl StoreState {
    pub fn from_env() -> Self {
        match StoreConfig::from_env() {
            Some(config) => match StoreClient::new(config) {
                Ok(client) => {
                    tracing::info!("Store client created successfully");
                    StoreState::Connected(client)
                }
                Err(err) => {
                    tracing::error!("Failed to create store client: {}", err);
                    StoreState::Failed(err.to_string())
                }
            },
            None => {
                tracing::warn!("Cannot create store client: missing URL or key");
                StoreState::Disconnected
            }
        }
    }

    pub fn client(&self) -> Result<&StoreClient, StoreError> {
        match self {
            StoreState::Connected(client) => Ok(client),
            StoreState::Disconnected | StoreState::Failed(_) => Err(StoreError::NotConfigured),
        }
    }
}
