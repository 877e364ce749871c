use sqlx::PgPool;

use crate::{auth::jwt::JwtConfig, services::email::EmailService};
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub email_service: Option<EmailService>,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        let email_service = match EmailService::from_env() {
            Ok(service) => Some(service),
            Err(message) => {
                warn!("Email service not configured: {}", message);
                None
            }
        };

        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        Self {
            db,
            jwt_config: JwtConfig::from_env(secret),
            email_service,
        }
    }
}
