use std::sync::Arc;

use anyhow::Context;
use sampah_auth::{Session, SystemStore};
use sampah_biopori::{BioporiForm, Directory};
use sampah_client::ApiClient;
use sampah_config::SampahConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SampahConfig,
    pub client: Arc<ApiClient>,
    pub session: Arc<Session>,
}

impl AppContext {
    pub fn init(config: SampahConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build backend client")?;
        let store = Arc::new(SystemStore::new(&config.auth));
        let session = Arc::new(Session::open(store));
        tracing::debug!(
            base_url = client.base_url(),
            authenticated = session.is_authenticated(),
            "application context ready"
        );
        Ok(Self {
            config,
            client: Arc::new(client),
            session,
        })
    }

    pub fn directory(&self) -> Directory<ApiClient> {
        Directory::new(Arc::clone(&self.client), Arc::clone(&self.session))
    }

    pub fn new_form(&self) -> BioporiForm<ApiClient> {
        BioporiForm::create(Arc::clone(&self.client), Arc::clone(&self.session))
    }

    pub async fn edit_form(&self, id: &str) -> anyhow::Result<BioporiForm<ApiClient>> {
        BioporiForm::edit(Arc::clone(&self.client), Arc::clone(&self.session), id)
            .await
            .with_context(|| format!("failed to load biopori {id}"))
    }

    /// Effective list limit: command flag, then global flag, then config.
    pub fn limit(&self, local: Option<u32>, global: Option<u32>) -> usize {
        resolve_limit(local, global, self.config.general.default_limit)
    }
}

fn resolve_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> usize {
    let limit = local.or(global).unwrap_or(configured);
    usize::try_from(limit).unwrap_or(usize::MAX)
}
