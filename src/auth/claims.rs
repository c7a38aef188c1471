use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::domain::SessionUser;

/// Payload of the signed session cookie. No `exp` claim:
/// a session lasts until logout or until the browser drops the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // Session user id
    pub iat: usize,
}

impl SessionClaims {
    pub fn new(user: &SessionUser) -> Self {
        Self {
            sub: user.id.clone(),
            iat: Utc::now().timestamp() as usize,
        }
    }
}
