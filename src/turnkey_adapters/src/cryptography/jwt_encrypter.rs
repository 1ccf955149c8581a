use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::Value;
use turnkey_core::{AccessToken, CryptographyError, Encrypter, TokenPayload};

#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    /// Token lifetime in seconds
    pub time_to_live: i64,
}

impl JwtSettings {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Issues HS256 JWTs. The payload becomes the claims set; `iat` and `exp`
/// are always set by the encrypter.
#[derive(Clone)]
pub struct JwtEncrypter {
    settings: JwtSettings,
}

impl JwtEncrypter {
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Encrypter for JwtEncrypter {
    #[tracing::instrument(name = "JwtEncrypter::encrypt", skip_all)]
    async fn encrypt(&self, payload: TokenPayload) -> Result<AccessToken, CryptographyError> {
        if self.settings.time_to_live <= 0 {
            return Err(CryptographyError::Encryption(format!(
                "Token lifetime must be positive, got {}s",
                self.settings.time_to_live
            )));
        }

        let delta = chrono::Duration::try_seconds(self.settings.time_to_live).ok_or(
            CryptographyError::Encryption("Failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(CryptographyError::Encryption(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let mut claims = payload;
        claims.insert("iat".to_owned(), Value::from(now.timestamp()));
        claims.insert("exp".to_owned(), Value::from(exp));

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.as_bytes()),
        )
        .map_err(|e| CryptographyError::Encryption(e.to_string()))?;

        Ok(AccessToken::new(Secret::new(token)))
    }
}
