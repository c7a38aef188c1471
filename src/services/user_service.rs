use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::SessionUser, dto::request::GoogleUserInfo},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Stores the profile returned by the identity provider, keyed by its id.
    pub async fn record_login(&self, info: GoogleUserInfo) -> AppResult<SessionUser> {
        let user = SessionUser::from(info);
        log::info!("Recording login for user {}", user.id);
        self.repository.upsert(user).await
    }

    pub async fn load_user(&self, id: &str) -> AppResult<Option<SessionUser>> {
        self.repository.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn test_record_login_stores_by_id() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        let info = GoogleUserInfo {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            verified_email: None,
            picture: None,
        };
        service.record_login(info).await.unwrap();

        let user = service.load_user("u1").await.unwrap().unwrap();
        assert_eq!(user, SessionUser::new("u1", "Ann", "a@x.com"));
        assert_eq!(repo.len().await, 1);
    }
}
