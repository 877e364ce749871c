use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    auth::jwt::{JwtConfig, hash_password, verify_password_user},
    auth::reset_tokens::{generate_reset_token, hash_reset_token},
    dto::auth::{
        ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
        RegisterRequest, ResetPasswordRequest, UserResponse,
    },
    error::AppError,
    repositories::users as user_repo,
    services::email::EmailService,
    telemetry::{BusinessEvent, redact_email},
};

const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub struct UserServices;

impl UserServices {
    pub async fn register_user(
        pool: &sqlx::PgPool,
        jwt_config: &JwtConfig,
        email_service: Option<&EmailService>,
        req: RegisterRequest,
    ) -> Result<LoginResponse, AppError> {
        let email = req.email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(AppError::ValidationError(
                "Email format is invalid".to_string(),
            ));
        }

        let username = req.username.trim().to_string();
        if username.chars().count() < 3 || username.chars().count() > 50 {
            return Err(AppError::ValidationError(
                "Username must be between 3 and 50 characters".to_string(),
            ));
        }

        if !is_strong_password(&req.password) {
            return Err(AppError::ValidationError(
                "Password must be at least 8 characters and include uppercase, lowercase, a digit and a special character"
                    .to_string(),
            ));
        }

        // Registration is the one place another account's existence is
        // deliberately revealed.
        if user_repo::email_exists(pool, &email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        if user_repo::username_exists(pool, &username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = hash_password(&req.password)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        let user = user_repo::insert_user(pool, &email, &password_hash, &username).await?;
        BusinessEvent::UserRegistered {
            user_id: user.id,
            email_redacted: redact_email(&user.email),
        }
        .log();

        let token = jwt_config
            .create_token(user.id, user.email.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        match email_service {
            Some(service) => {
                let verification_token = jwt_config
                    .create_email_verification_token(user.id, user.email.clone())
                    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;
                service
                    .send_verification_email(&user.email, &verification_token)
                    .await?;
                user_repo::set_verification_sent_at(pool, user.id, Utc::now()).await?;
            }
            None => {
                tracing::warn!(user_id = %user.id, "Email service not configured, skipping verification email");
            }
        }

        Ok(LoginResponse {
            user: UserResponse::from(user),
            token,
        })
    }

    pub async fn login(
        pool: &sqlx::PgPool,
        jwt_config: &JwtConfig,
        req: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let identifier = req.email_or_username.trim();
        let user = match user_repo::find_user_by_email_or_username(pool, identifier).await? {
            Some(user) => user,
            None => {
                BusinessEvent::LoginFailed {
                    email_redacted: redact_email(identifier),
                    reason: "user_not_found".to_string(),
                }
                .log();
                return Err(AppError::InvalidCredentials(
                    "Invalid email, username or password".to_string(),
                ));
            }
        };
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AppError::Internal("password hash not found".to_string()))?;

        let password_ok = verify_password_user(&req.password, hash).map_err(|_| {
            AppError::InvalidCredentials("Invalid email, username or password".to_string())
        })?;
        if !password_ok {
            BusinessEvent::LoginFailed {
                email_redacted: redact_email(&user.email),
                reason: "invalid_password".to_string(),
            }
            .log();
            return Err(AppError::InvalidCredentials(
                "Invalid email, username or password".to_string(),
            ));
        }

        let token = jwt_config
            .create_token(user.id, user.email.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        BusinessEvent::UserLoggedIn { user_id: user.id }.log();
        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn get_user_by_id(
        pool: &sqlx::PgPool,
        user_id: Uuid,
    ) -> Result<UserResponse, AppError> {
        let user = user_repo::get_user_by_id(pool, user_id).await?;
        Ok(UserResponse::from(user))
    }

    pub async fn change_password(
        pool: &sqlx::PgPool,
        user_id: Uuid,
        req: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        if !is_strong_password(&req.new_password) {
            return Err(AppError::ValidationError(
                "Password must be at least 8 characters and include uppercase, lowercase, a digit and a special character"
                    .to_string(),
            ));
        }

        let user = user_repo::get_user_by_id(pool, user_id).await?;
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AppError::BadRequest("Password not set".to_string()))?;
        let valid = verify_password_user(&req.current_password, hash)
            .map_err(|_| AppError::InvalidCredentials("Invalid credentials".to_string()))?;
        if !valid {
            return Err(AppError::InvalidCredentials(
                "Invalid credentials".to_string(),
            ));
        }

        let new_hash = hash_password(&req.new_password)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        user_repo::update_password_hash(pool, user_id, &new_hash).await?;
        Ok(())
    }

    /// Deletes the account and every project beneath it in one cascade.
    pub async fn delete_account(pool: &sqlx::PgPool, user_id: Uuid) -> Result<(), AppError> {
        user_repo::delete_user_cascade(pool, user_id).await?;
        BusinessEvent::AccountDeleted { user_id }.log();
        Ok(())
    }

    pub async fn request_email_verification(
        pool: &sqlx::PgPool,
        jwt_config: &JwtConfig,
        email_service: Option<&EmailService>,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        const VERIFICATION_COOLDOWN_SECS: i64 = 120;
        let user = user_repo::get_user_by_id(pool, user_id).await?;
        if user.email_verified_at.is_some() {
            return Err(AppError::Conflict("Email already verified".to_string()));
        }

        if let Some(last_sent) = metadata_datetime(&user.metadata, "verification_sent_at") {
            let seconds_since = Utc::now().signed_duration_since(last_sent).num_seconds();
            if seconds_since < VERIFICATION_COOLDOWN_SECS {
                let remaining = VERIFICATION_COOLDOWN_SECS - seconds_since;
                return Err(AppError::BadRequest(format!(
                    "Please wait {} seconds before requesting another verification email",
                    remaining.max(0)
                )));
            }
        }

        let token = jwt_config
            .create_email_verification_token(user.id, user.email.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        let email_service = email_service.ok_or(AppError::ExternalService(
            "Email service not configured".to_string(),
        ))?;
        email_service
            .send_verification_email(&user.email, &token)
            .await?;
        user_repo::set_verification_sent_at(pool, user.id, Utc::now()).await?;

        Ok(())
    }

    pub async fn verify_email_token(
        pool: &sqlx::PgPool,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<(), AppError> {
        let claims = jwt_config
            .verify_email_verification_token(token)
            .map_err(|_| AppError::BadRequest("Invalid verification token".to_string()))?;

        if claims.typ != "email_verification" {
            return Err(AppError::BadRequest(
                "Invalid verification token".to_string(),
            ));
        }

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::BadRequest("Invalid verification token".to_string()))?;
        let user = user_repo::get_user_by_id(pool, user_id).await?;
        if user.email != claims.email {
            return Err(AppError::BadRequest(
                "Invalid verification token".to_string(),
            ));
        }
        if user.email_verified_at.is_some() {
            return Ok(());
        }

        user_repo::mark_email_verified(pool, user_id).await?;
        BusinessEvent::EmailVerified { user_id }.log();
        Ok(())
    }

    /// Always succeeds from the caller's point of view so account
    /// existence is not revealed.
    pub async fn forgot_password(
        pool: &sqlx::PgPool,
        email_service: Option<&EmailService>,
        req: ForgotPasswordRequest,
    ) -> Result<(), AppError> {
        let email = req.email.trim();
        let Some(user) = user_repo::find_user_by_email(pool, email).await? else {
            return Ok(());
        };
        let Some(service) = email_service else {
            tracing::warn!("Email service not configured, skipping password reset email");
            return Ok(());
        };

        let token = generate_reset_token();
        let expires_at = Utc::now() + chrono::Duration::hours(RESET_TOKEN_TTL_HOURS);
        user_repo::set_reset_token(pool, user.id, &hash_reset_token(&token), expires_at).await?;
        service.send_password_reset_email(&user.email, &token).await?;

        BusinessEvent::PasswordResetRequested {
            email_redacted: redact_email(&user.email),
        }
        .log();
        Ok(())
    }

    pub async fn reset_password(
        pool: &sqlx::PgPool,
        req: ResetPasswordRequest,
    ) -> Result<(), AppError> {
        if !is_strong_password(&req.new_password) {
            return Err(AppError::ValidationError(
                "Password must be at least 8 characters and include uppercase, lowercase, a digit and a special character"
                    .to_string(),
            ));
        }

        let invalid = || AppError::BadRequest("Invalid or expired reset token".to_string());

        let user = user_repo::find_user_by_email(pool, req.email.trim())
            .await?
            .ok_or_else(invalid)?;

        let stored_hash =
            metadata_str(&user.metadata, "reset_token_hash").ok_or_else(invalid)?;
        if stored_hash != hash_reset_token(req.token.trim()) {
            return Err(invalid());
        }

        let expires_at =
            metadata_datetime(&user.metadata, "reset_token_expires_at").ok_or_else(invalid)?;
        if expires_at < Utc::now() {
            return Err(invalid());
        }

        let new_hash = hash_password(&req.new_password)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        user_repo::update_password_hash(pool, user.id, &new_hash).await?;
        user_repo::clear_reset_token(pool, user.id).await?;

        BusinessEvent::PasswordResetCompleted { user_id: user.id }.log();
        Ok(())
    }
}

fn metadata_str(metadata: &serde_json::Value, key: &str) -> Option<String> {
    metadata
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
}

fn metadata_datetime(metadata: &serde_json::Value, key: &str) -> Option<DateTime<Utc>> {
    metadata
        .get(key)
        .and_then(|value| value.as_str())
        .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn is_valid_email(email: &str) -> bool {
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.contains(' ') {
        return false;
    }
    let mut parts = trimmed.split('@');
    let local = match parts.next() {
        Some(value) => value,
        None => return false,
    };
    let domain = match parts.next() {
        Some(value) => value,
        None => return false,
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.')
}

fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;
    for ch in password.chars() {
        if ch.is_ascii_uppercase() {
            has_upper = true;
        } else if ch.is_ascii_lowercase() {
            has_lower = true;
        } else if ch.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }
    has_upper && has_lower && has_digit && has_special
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_email_accepted() {
        assert!(is_valid_email("writer@example.com"));
        assert!(!is_valid_email("writer@@example.com"));
        assert!(!is_valid_email("writer@example"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("writer example@site.com"));
    }

    #[test]
    fn strong_password_requires_all_classes() {
        assert!(is_strong_password("Sup3r$ecret"));
        assert!(!is_strong_password("sup3r$ecret")); // no uppercase
        assert!(!is_strong_password("SUP3R$ECRET")); // no lowercase
        assert!(!is_strong_password("Super$ecret")); // no digit
        assert!(!is_strong_password("Sup3rSecret")); // no special
        assert!(!is_strong_password("S3$a")); // too short
    }

    #[test]
    fn metadata_datetime_parses_rfc3339() {
        let metadata = json!({ "verification_sent_at": "2026-01-02T03:04:05Z" });
        let parsed = metadata_datetime(&metadata, "verification_sent_at").unwrap();
        assert_eq!(parsed.timestamp(), 1767323045);
    }

    #[test]
    fn metadata_helpers_return_none_when_absent() {
        let metadata = json!({});
        assert!(metadata_str(&metadata, "reset_token_hash").is_none());
        assert!(metadata_datetime(&metadata, "reset_token_expires_at").is_none());
    }
}
