//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns
///   `default`, so a typo in deployment configuration is visible instead of
///   silently swallowed.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeploymentMode;

    // set_var/remove_var are unsafe under edition 2024; these tests each use
    // a distinct variable name so the processes' environment never races.

    #[test]
    fn valid_value_is_parsed() {
        let var_name = "TEST_INVOICEDASH_ENV_VALID_31337";
        unsafe { std::env::set_var(var_name, "production") };
        let mode: DeploymentMode = env_parse_with_default(var_name, DeploymentMode::Development);
        assert_eq!(mode, DeploymentMode::Production);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn invalid_value_falls_back_to_default() {
        let var_name = "TEST_INVOICEDASH_ENV_INVALID_31338";
        unsafe { std::env::set_var(var_name, "banana") };
        let mode: DeploymentMode = env_parse_with_default(var_name, DeploymentMode::Development);
        assert_eq!(mode, DeploymentMode::Development);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn missing_var_falls_back_to_default() {
        let var_name = "TEST_INVOICEDASH_ENV_MISSING_31339";
        unsafe { std::env::remove_var(var_name) };
        let port: u16 = env_parse_with_default(var_name, 5432);
        assert_eq!(port, 5432);
    }
}
