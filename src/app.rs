use tracing::{info, warn};

use crate::advisor::{DisabledAdvisor, NarrativeAdvisor, OpenAiAdvisor};
use crate::config::AppConfig;
use crate::data::Tables;
use crate::session::SessionStore;

/// Everything a request handler needs, shared by all server workers.
pub struct App {
    pub config: AppConfig,
    pub tables: Tables,
    pub sessions: SessionStore,
    pub advisor: Box<dyn NarrativeAdvisor>,
}

impl App {
    pub fn new(config: AppConfig, advisor: Box<dyn NarrativeAdvisor>) -> Self {
        let tables = Tables::new(
            config.catalog_path.clone(),
            config.traffic_path.clone(),
            config.hourly_path.clone(),
        );
        let sessions = SessionStore::with_capacity(config.max_sessions);
        Self {
            config,
            tables,
            sessions,
            advisor,
        }
    }

    /// Production wiring: the OpenAI client when a key is configured.
    pub fn from_config(config: AppConfig) -> Self {
        let advisor: Box<dyn NarrativeAdvisor> = match config.advisor.api_key.clone() {
            Some(key) => match OpenAiAdvisor::new(key, &config.advisor) {
                Ok(advisor) => Box::new(advisor),
                Err(e) => {
                    warn!(error = %e, "advice client unavailable; chat answers will report errors");
                    Box::new(DisabledAdvisor)
                }
            },
            None => {
                warn!("OPENAI_API_KEY not set; chat answers will report errors");
                Box::new(DisabledAdvisor)
            }
        };
        Self::new(config, advisor)
    }

    /// Load the catalog up front so schema problems show in the log at boot.
    /// A failure here is not fatal; the insights view reports it too.
    pub fn warm_up(&self) {
        match self.tables.catalog() {
            Ok(catalog) => info!(listings = catalog.len(), "catalog ready"),
            Err(e) => warn!(error = %e, "catalog not available"),
        }
    }
}
