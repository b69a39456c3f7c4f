//! Deployment-mode guard for the destructive admin operations.
//!
//! The mode is parsed once at startup and injected into whatever runs the
//! operation; handlers never consult ambient environment state themselves.

use crate::env_config::env_parse_with_default;

/// Where this process believes it is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    /// Seed and cleanup requests are refused.
    Production,
    /// Seed and cleanup requests are allowed.
    #[default]
    Development,
}

impl DeploymentMode {
    /// Environment variable consulted by [`DeploymentMode::from_env`].
    pub const ENV_VAR: &'static str = "INVOICEDASH_ENV";

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Read the mode from `INVOICEDASH_ENV`, defaulting to `Development`.
    pub fn from_env() -> Self {
        env_parse_with_default(Self::ENV_VAR, Self::default())
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

impl std::str::FromStr for DeploymentMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(anyhow::anyhow!("Invalid deployment mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("production".parse::<DeploymentMode>().unwrap(), DeploymentMode::Production);
        assert_eq!("prod".parse::<DeploymentMode>().unwrap(), DeploymentMode::Production);
        assert_eq!("development".parse::<DeploymentMode>().unwrap(), DeploymentMode::Development);
        assert_eq!("dev".parse::<DeploymentMode>().unwrap(), DeploymentMode::Development);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("staging".parse::<DeploymentMode>().is_err());
    }

    #[test]
    fn defaults_to_development() {
        assert_eq!(DeploymentMode::default(), DeploymentMode::Development);
        assert!(!DeploymentMode::default().is_production());
    }

    #[test]
    fn production_is_guarded() {
        assert!(DeploymentMode::Production.is_production());
    }
}
