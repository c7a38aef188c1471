use serde::{Deserialize, Serialize};

use crate::models::dto::request::GoogleUserInfo;

/// A visitor who completed the Google login round trip.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl SessionUser {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        SessionUser {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

impl From<GoogleUserInfo> for SessionUser {
    fn from(info: GoogleUserInfo) -> Self {
        SessionUser {
            id: info.id,
            name: info.name,
            email: info.email,
        }
    }
}
