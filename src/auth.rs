//! Bearer tokens of the admin interface.

use crate::error::{self, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    pub subject: i32,
    #[serde(default)]
    pub staff: bool,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

impl Jwt {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, claims: &Claims) -> Result<String> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(
            |err| {
                error!("failed to encode token: {err}");
                error::INTERNAL
            },
        )
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims> {
        match jsonwebtoken::decode(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(error) => {
                warn!(error = error.to_string(), "tried invalid token");
                Err(error::JWT_INVALID_TOKEN)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(expires_at: i64) -> Claims {
        Claims {
            subject: 7,
            staff: true,
            expires_at,
        }
    }

    #[test]
    fn issued_token_decodes() {
        let jwt = Jwt::new(b"secret");
        let exp = chrono::Utc::now().timestamp() + 60;

        let token = jwt.issue(&claims(exp)).unwrap();
        let decoded = jwt.get_claims(&token).unwrap();

        assert_eq!(decoded.subject, 7);
        assert!(decoded.staff);
    }

    #[test]
    fn rejects_foreign_signature() {
        let exp = chrono::Utc::now().timestamp() + 60;
        let token = Jwt::new(b"other").issue(&claims(exp)).unwrap();

        let err = Jwt::new(b"secret").get_claims(&token).unwrap_err();
        assert_eq!(err.code(), error::JWT_INVALID_TOKEN.code());
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = Jwt::new(b"secret");
        let exp = chrono::Utc::now().timestamp() - 3600;
        let token = jwt.issue(&claims(exp)).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }
}
