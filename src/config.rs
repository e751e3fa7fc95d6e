use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub db_project_url: String,
    pub db_secret_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            db_project_url: required("DB_PROJECT_URL")?,
            db_secret_key: required("DB_SECRET_KEY")?,
        })
    }
}

// Falls back to the VITE_-prefixed name the front end's .env uses.
fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .or_else(|_| env::var(format!("VITE_{name}")))
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("{name} must be set")))
}
