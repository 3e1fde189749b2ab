use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// OAuth2 password form: the `username` field carries the email.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_defaults_to_active() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","username":"a","full_name":"A","password":"hunter22"}"#,
        )
        .unwrap();
        assert!(req.is_active);
    }

    #[test]
    fn token_response_is_bearer() {
        let json = serde_json::to_string(&TokenResponse::bearer("abc".into())).unwrap();
        assert!(json.contains(r#""access_token":"abc""#));
        assert!(json.contains(r#""token_type":"bearer""#));
    }
}
