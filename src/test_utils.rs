#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::{google::MockIdentityProvider, IdentityProvider},
        config::Config,
        models::dto::request::GoogleUserInfo,
        repositories::InMemoryUserRepository,
        services::completion_service::MockCompletionClient,
    };

    /// The profile Google returns for the standard test visitor.
    pub fn ann_userinfo() -> GoogleUserInfo {
        GoogleUserInfo {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            verified_email: Some(true),
            picture: None,
        }
    }

    /// State with the login gate enabled, plus a handle on its user store.
    pub fn gated_state(
        completion: MockCompletionClient,
        provider: MockIdentityProvider,
    ) -> (Arc<AppState>, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let state = AppState::with_components(
            Config::test_config(),
            Arc::new(completion),
            Some(Arc::new(provider) as Arc<dyn IdentityProvider>),
            repository.clone(),
        );
        (Arc::new(state), repository)
    }

    pub fn open_state(completion: MockCompletionClient) -> Arc<AppState> {
        Arc::new(AppState::with_components(
            Config::open_test_config(),
            Arc::new(completion),
            None,
            Arc::new(InMemoryUserRepository::new()),
        ))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::{
        cookie::Cookie,
        dev::ServiceResponse,
        http::{header::LOCATION, StatusCode},
    };

    /// Asserts that a response is a `302 Found` pointing at `location`.
    pub fn assert_redirect_to<B>(resp: &ServiceResponse<B>, location: &str) {
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some(location)
        );
    }

    pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
        resp.response()
            .cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{
        auth::google::MockIdentityProvider, services::completion_service::MockCompletionClient,
    };

    #[test]
    fn test_fixtures_ann_userinfo() {
        let info = ann_userinfo();
        assert_eq!(info.id, "u1");
        assert_eq!(info.email, "a@x.com");
    }

    #[test]
    fn test_fixture_modes() {
        let (gated, _) = gated_state(MockCompletionClient::new(), MockIdentityProvider::new());
        assert!(gated.auth_enabled());
        assert!(!open_state(MockCompletionClient::new()).auth_enabled());
    }
}
