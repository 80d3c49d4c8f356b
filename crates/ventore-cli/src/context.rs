use anyhow::Context;
use ventore_config::VentoreConfig;
use ventore_core::entities::DataModel;
use ventore_model::build_data_model;
use ventore_sheets::SheetClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VentoreConfig,
    pub client: SheetClient,
}

impl AppContext {
    pub fn init(config: VentoreConfig) -> anyhow::Result<Self> {
        let client = SheetClient::new(&config.http, &config.cache)
            .context("failed to initialize sheet client")?;
        Ok(Self { config, client })
    }

    /// Fetch every source and reconcile them.
    pub async fn build_model(&self) -> anyhow::Result<DataModel> {
        build_data_model(&self.client, &self.config)
            .await
            .context("failed to build data model")
    }
}
