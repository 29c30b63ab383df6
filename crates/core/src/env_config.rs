//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
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

/// Read a string environment variable, treating empty values as unset.
pub fn env_string_or(var: &str, default: &str) -> String {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all `set_var`/`remove_var` calls below): every test uses its own
    // variable name, so no other thread reads or writes it concurrently.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "LIVERY_TEST_ENV_PARSE_VALID_41555";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "LIVERY_TEST_ENV_PARSE_INVALID_41556";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "LIVERY_TEST_ENV_PARSE_MISSING_41557";
        unsafe { std::env::remove_var(var_name) };
        let result: u64 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_string_empty_falls_back() {
        let var_name = "LIVERY_TEST_ENV_STRING_EMPTY_41558";
        unsafe { std::env::set_var(var_name, "  ") };
        assert_eq!(env_string_or(var_name, "liveries.db"), "liveries.db");
        unsafe { std::env::set_var(var_name, "other.db") };
        assert_eq!(env_string_or(var_name, "liveries.db"), "other.db");
        unsafe { std::env::remove_var(var_name) };
    }
}
