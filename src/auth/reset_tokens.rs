use sha2::{Digest, Sha256};
use uuid::Uuid;

pub fn generate_reset_token() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_reset_token_is_deterministic() {
        let token = "test-token";
        let first = hash_reset_token(token);
        let second = hash_reset_token(token);
        assert_eq!(first, second);
    }

    #[test]
    fn hash_reset_token_has_expected_length() {
        let hashed = hash_reset_token("test-token");
        assert_eq!(hashed.len(), 64);
    }

    #[test]
    fn hash_reset_token_differs_for_different_tokens() {
        assert_ne!(hash_reset_token("token-a"), hash_reset_token("token-b"));
    }

    #[test]
    fn generate_reset_token_returns_non_empty_value() {
        assert!(!generate_reset_token().trim().is_empty());
    }
}
