use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::User;

/// `skip`/`limit` list-window query parameters.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Public projection of a user: everything except the password digest.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
    pub is_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            full_name: u.full_name,
            is_active: u.is_active,
            is_admin: u.is_admin,
            created_at: u.created_at,
        }
    }
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn list_params_default_to_skip_0_limit_100() {
        let p: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn projection_never_contains_the_digest() {
        let user = User {
            id: 1,
            email: "a@x.com".into(),
            username: "a".into(),
            full_name: "A".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            is_admin: false,
            is_active: true,
            created_at: datetime!(2024-01-01 00:00:00 UTC),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains(r#""email":"a@x.com""#));
    }
}
