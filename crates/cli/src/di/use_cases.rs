use super::{Repositories, SuffixServices};
use pdns_backend_application::use_cases::{GetRecentQueriesUseCase, HandleBackendQueryUseCase};
use pdns_backend_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub engine: Arc<HandleBackendQueryUseCase>,
    pub get_queries: Arc<GetRecentQueriesUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, suffix: &SuffixServices) -> Self {
        Self {
            engine: Arc::new(HandleBackendQueryUseCase::new(
                repos.zones.clone(),
                repos.queries.clone(),
                suffix.resolver.clone(),
                &config.backend.hostmaster,
                &config.backend.acknowledgement,
            )),
            get_queries: Arc::new(GetRecentQueriesUseCase::new(repos.queries.clone())),
        }
    }
}
