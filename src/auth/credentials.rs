use crate::error::Error;
use std::env;
use std::fmt;

pub const API_KEY: &str = "porkbun_api_key";
pub const SECRET_API_KEY: &str = "porkbun_secret_api_key";

pub trait CredentialManager: Send + Sync {
    fn get(&self, key: &str) -> Result<String, Error>;
}

/// Reads credentials from `PORKBUN_API_KEY` and `PORKBUN_SECRET_API_KEY`.
pub struct EnvCredentialManager;

impl CredentialManager for EnvCredentialManager {
    fn get(&self, key: &str) -> Result<String, Error> {
        let var = match key {
            API_KEY => "PORKBUN_API_KEY",
            SECRET_API_KEY => "PORKBUN_SECRET_API_KEY",
            _ => return Err(Error::Credential(format!("Unknown key: {key}"))),
        };
        env::var(var).map_err(|e| Error::Credential(format!("{var}: {e}")))
    }
}

/// The API key pair sent with every request. Never changes after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key: String,
    secret_api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    pub fn load(manager: &dyn CredentialManager) -> Result<Self, Error> {
        let api_key = manager.get(API_KEY)?;
        let secret_api_key = manager.get(SECRET_API_KEY)?;
        if api_key.is_empty() || secret_api_key.is_empty() {
            return Err(Error::Credential("empty API key".to_string()));
        }
        Ok(Self::new(api_key, secret_api_key))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_api_key(&self) -> &str {
        &self.secret_api_key
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"***")
            .field("secret_api_key", &"***")
            .finish()
    }
}
