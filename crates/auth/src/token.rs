use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::AuthError;

/// Session token lifetime: 5 hours.
pub const TOKEN_TTL_SECS: i64 = 5 * 60 * 60;

/// HMAC-SHA256 session token codec.
///
/// The signing key is process-wide state configured at startup from the
/// environment; it is never baked into source.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock slack; expiry boundaries are exact.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token for `subject`, valid for [`TOKEN_TTL_SECS`] from `now`.
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + TOKEN_TTL_SECS,
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Decode and verify a token: signature, algorithm, expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }

    /// Full check used at trust boundaries: signature + expiry + subject match.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn codec() -> Hs256TokenCodec {
        Hs256TokenCodec::new(b"test-secret")
    }

    #[test]
    fn issued_token_round_trips() {
        let now = Utc::now();
        let token = codec().issue("a@b.com", now).unwrap();
        let claims = codec().decode(&token).unwrap();

        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - Duration::seconds(TOKEN_TTL_SECS + 60);
        let token = codec().issue("a@b.com", issued).unwrap();

        assert!(codec().decode(&token).is_err());
        assert!(!codec().validate(&token, "a@b.com"));
    }

    #[test]
    fn token_signed_with_another_key_is_rejected() {
        let other = Hs256TokenCodec::new(b"other-secret");
        let token = other.issue("a@b.com", Utc::now()).unwrap();

        assert!(codec().decode(&token).is_err());
    }

    #[test]
    fn validate_requires_matching_subject() {
        let token = codec().issue("a@b.com", Utc::now()).unwrap();

        assert!(codec().validate(&token, "a@b.com"));
        assert!(!codec().validate(&token, "someone@else.com"));
    }
}
