use std::str::FromStr;

use anyhow::Context;
use jsonwebtoken::Algorithm;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let algorithm_tag = std::env::var("TOKEN_ALGORITHM").unwrap_or_else(|_| "HS256".into());
        let jwt = JwtConfig {
            secret: std::env::var("SECRET_KEY").context("SECRET_KEY is not set")?,
            algorithm: Algorithm::from_str(&algorithm_tag)
                .map_err(|e| anyhow::anyhow!("unknown TOKEN_ALGORITHM {algorithm_tag:?}: {e}"))?,
            ttl_minutes: std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };

        let allowed_origins = std::env::var("ALLOWED_HOSTS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);

        Ok(Self {
            database_url,
            jwt,
            allowed_origins,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_tag_parses() {
        assert_eq!(Algorithm::from_str("HS256").unwrap(), Algorithm::HS256);
        assert!(Algorithm::from_str("not-an-alg").is_err());
    }

    #[test]
    fn origin_list_splits_on_commas() {
        let raw = "http://localhost:3000, http://127.0.0.1:3000 ,";
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }
}
