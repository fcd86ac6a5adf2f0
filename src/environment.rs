use std::env;

/// Environment variable holding the base URL of the polling target.
pub const AUTH_URL_VAR: &str = "AUTH_URL";

#[derive(Debug, Clone)]
pub struct Environment {
    pub auth_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("Missing required environment variable {0}")]
    MissingVariable(&'static str),
}

impl Environment {
    pub fn from_env() -> Result<Self, EnvironmentError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, EnvironmentError> {
        let auth_url =
            lookup(AUTH_URL_VAR).ok_or(EnvironmentError::MissingVariable(AUTH_URL_VAR))?;

        Ok(Environment { auth_url })
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::{AUTH_URL_VAR, Environment, EnvironmentError};

    #[test]
    fn resolves_the_base_url_from_the_environment() {
        let environment = Environment::from_lookup(|name| {
            (name == AUTH_URL_VAR).then(|| "https://example.com".to_string())
        })
        .unwrap();

        assert_eq!(environment.auth_url, "https://example.com");
    }

    #[test]
    fn fails_when_the_base_url_is_missing() {
        let result = Environment::from_lookup(|_| None);

        assert!(matches!(
            result.unwrap_err(),
            EnvironmentError::MissingVariable(AUTH_URL_VAR)
        ));
    }
}
