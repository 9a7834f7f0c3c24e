use std::time::Duration;

use super::error::ApiError;

/// Backend base URL, e.g. `https://facturacion.example.com.py/api`.
pub const ENV_API_URL: &str = "EKUATIA_API_URL";
/// Session token sent as `authorization: Bearer <token>`.
pub const ENV_AUTH_TOKEN: &str = "EKUATIA_AUTH_TOKEN";
/// Integration token sent in the `user_token` header.
pub const ENV_USER_TOKEN: &str = "EKUATIA_USER_TOKEN";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`ApiClient`](super::ApiClient).
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Session token of the logged-in user, if any.
    pub auth_token: Option<String>,
    pub user_token: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "***"))
            .field("user_token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, user_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            user_token: user_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the configuration from `EKUATIA_API_URL`, `EKUATIA_USER_TOKEN`
    /// and the optional `EKUATIA_AUTH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` when a required variable is unset or blank.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(ENV_API_URL)
            .ok_or_else(|| ApiError::Config(format!("{ENV_API_URL} is not set")))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "{ENV_API_URL} must be an absolute http(s) URL, got {base_url:?}"
            )));
        }
        let user_token = get(ENV_USER_TOKEN)
            .ok_or_else(|| ApiError::Config(format!("{ENV_USER_TOKEN} is not set")))?;

        Ok(Self {
            base_url,
            auth_token: get(ENV_AUTH_TOKEN),
            user_token,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// `base_url` joined with `path`, with exactly one slash between them.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
