//! HS256 JWT session tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token lifetime in days.
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's id.
    pub sub: Uuid,
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Generate an HS256 session token for the given user.
pub fn generate_token(
    user_id: Uuid,
    email: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp: now + TOKEN_TTL_DAYS * 24 * 60 * 60,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
/// Signature and expiration are checked automatically.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    #[test]
    fn test_generate_and_validate_token() {
        let user_id = Uuid::new_v4();
        let token =
            generate_token(user_id, "a@b.co", SECRET).expect("token generation should succeed");

        let claims = validate_token(&token, SECRET).expect("token validation should succeed");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "a@b.co");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails() {
        // Manually build an already-expired token, well past the default
        // 60-second validation leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@b.co".to_string(),
            exp: now - 300,
            iat: now - 600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(
            validate_token(&token, SECRET).is_err(),
            "expired token must fail validation"
        );
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = generate_token(Uuid::new_v4(), "a@b.co", SECRET)
            .expect("token generation should succeed");
        assert!(
            validate_token(&token, "a-different-secret").is_err(),
            "token signed with a different secret must fail"
        );
    }
}
