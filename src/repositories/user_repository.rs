use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::SessionUser};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user, replacing any record with the same id.
    async fn upsert(&self, user: SessionUser) -> AppResult<SessionUser>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionUser>>;
}

/// Process-lifetime user store. Records are never evicted; logging out only
/// drops the session cookie.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, SessionUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: SessionUser) -> AppResult<SessionUser> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<SessionUser>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}
