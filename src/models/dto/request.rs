use serde::Deserialize;

/// Body of `POST /generate`. The prompt is taken as-is; a missing field is
/// treated as an empty prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Profile fields returned by Google's `/oauth2/v2/userinfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub verified_email: Option<bool>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_ignores_unknown_fields() {
        let info: GoogleUserInfo = serde_json::from_str(
            r#"{"id":"u1","name":"Ann","email":"a@x.com","locale":"en","given_name":"Ann"}"#,
        )
        .unwrap();

        assert_eq!(info.id, "u1");
        assert_eq!(info.verified_email, None);
    }

    #[test]
    fn test_userinfo_requires_profile_fields() {
        let result = serde_json::from_str::<GoogleUserInfo>(r#"{"id":"u1","name":"Ann"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_response_error_shape() {
        let resp: GoogleTokenResponse = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Bad Request"}"#,
        )
        .unwrap();

        assert!(resp.access_token.is_none());
        assert_eq!(resp.error.as_deref(), Some("invalid_grant"));
    }
}
