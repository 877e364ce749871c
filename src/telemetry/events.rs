use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(tag = "event_type")]
pub enum BusinessEvent {
    UserRegistered {
        user_id: Uuid,
        email_redacted: String,
    },
    UserLoggedIn {
        user_id: Uuid,
    },
    LoginFailed {
        email_redacted: String,
        reason: String,
    },
    EmailVerified {
        user_id: Uuid,
    },
    PasswordResetRequested {
        email_redacted: String,
    },
    PasswordResetCompleted {
        user_id: Uuid,
    },
    AccountDeleted {
        user_id: Uuid,
    },
    ProjectCreated {
        project_id: Uuid,
        user_id: Uuid,
    },
    ProjectRenamed {
        project_id: Uuid,
        user_id: Uuid,
    },
    ProjectDeleted {
        project_id: Uuid,
        user_id: Uuid,
    },
}

pub fn redact_email(email: &str) -> String {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return "***".to_string();
    }
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() {
        return "***".to_string();
    }
    let first_char = local.chars().next().unwrap_or('*');
    format!("{first_char}***@{domain}")
}

impl BusinessEvent {
    pub fn log(&self) {
        let event_json = serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self));
        info!(
            target: "business_events",
            event = %event_json,
            "Business event occurred"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::redact_email;

    #[test]
    fn redacts_valid_email() {
        assert_eq!(redact_email("user@example.com"), "u***@example.com");
    }

    #[test]
    fn redacts_missing_domain() {
        assert_eq!(redact_email("invalid"), "***");
    }

    #[test]
    fn redacts_empty_value() {
        assert_eq!(redact_email(""), "***");
    }
}
