use secrecy::Secret;

/// Claims handed to an [`Encrypter`](crate::Encrypter).
pub type TokenPayload = serde_json::Map<String, serde_json::Value>;

/// Signed bearer token. Its internals are never inspected by the core.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(token)
    }
}

impl AsRef<Secret<String>> for AccessToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
