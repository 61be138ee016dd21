use std::sync::Arc;

use crate::application::ports::job_application_repository::JobApplicationRepository;
use crate::application::ports::posting_repository::PostingRepository;
use crate::application::ports::store_health::StoreHealthPort;
use crate::application::services::session::SessionTokens;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    posting_repo: Arc<dyn PostingRepository>,
    application_repo: Arc<dyn JobApplicationRepository>,
    store_health: Arc<dyn StoreHealthPort>,
    session_tokens: SessionTokens,
}

impl AppServices {
    pub fn new(
        posting_repo: Arc<dyn PostingRepository>,
        application_repo: Arc<dyn JobApplicationRepository>,
        store_health: Arc<dyn StoreHealthPort>,
        session_tokens: SessionTokens,
    ) -> Self {
        Self {
            posting_repo,
            application_repo,
            store_health,
            session_tokens,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn posting_repo(&self) -> Arc<dyn PostingRepository> {
        self.services.posting_repo.clone()
    }

    pub fn application_repo(&self) -> Arc<dyn JobApplicationRepository> {
        self.services.application_repo.clone()
    }

    pub fn store_health(&self) -> Arc<dyn StoreHealthPort> {
        self.services.store_health.clone()
    }

    pub fn session_tokens(&self) -> &SessionTokens {
        &self.services.session_tokens
    }
}
