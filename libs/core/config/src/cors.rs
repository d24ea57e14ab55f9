use crate::{env_required, ConfigError, FromEnv};

/// Cross-origin policy: the single frontend origin allowed to call the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub frontend_url: String,
}

impl CorsConfig {
    pub fn new(frontend_url: impl Into<String>) -> Self {
        Self {
            frontend_url: frontend_url.into(),
        }
    }
}

impl FromEnv for CorsConfig {
    /// Reads `FRONTEND_URL` (required, e.g. `http://localhost:5173`).
    fn from_env() -> Result<Self, ConfigError> {
        let frontend_url = env_required("FRONTEND_URL")?.trim().to_string();

        if frontend_url.is_empty() {
            return Err(ConfigError::ParseError {
                key: "FRONTEND_URL".to_string(),
                details: "value cannot be empty".to_string(),
            });
        }

        Ok(Self { frontend_url })
    }
}
