use std::sync::Arc;

use crate::{
    auth::{GoogleIdentityProvider, IdentityProvider, SessionService},
    config::Config,
    repositories::{InMemoryUserRepository, UserRepository},
    services::{
        completion_service::{CompletionClient, OpenAiCompletionClient},
        outline_service::OutlineService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub outline_service: Arc<OutlineService>,
    pub session_service: Arc<SessionService>,
    /// Present only when the login gate is enabled.
    pub identity_provider: Option<Arc<dyn IdentityProvider>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion_client = Arc::new(OpenAiCompletionClient::new(
            &config.completion_api_key,
            &config.completion_api_base,
        ));

        let identity_provider = GoogleIdentityProvider::from_config(&config)
            .map(|provider| Arc::new(provider) as Arc<dyn IdentityProvider>);

        Self::with_components(
            config,
            completion_client,
            identity_provider,
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    pub fn with_components(
        config: Config,
        completion_client: Arc<dyn CompletionClient>,
        identity_provider: Option<Arc<dyn IdentityProvider>>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        let session_service = Arc::new(SessionService::new(&config.secret_key));
        let user_service = Arc::new(UserService::new(user_repository));
        let outline_service = Arc::new(OutlineService::new(completion_client));

        Self {
            user_service,
            outline_service,
            session_service,
            identity_provider,
            config: Arc::new(config),
        }
    }

    pub fn auth_enabled(&self) -> bool {
        self.identity_provider.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_auth_mode_follows_config() {
        assert!(AppState::new(Config::test_config()).auth_enabled());
        assert!(!AppState::new(Config::open_test_config()).auth_enabled());
    }
}
