//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional string in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(inner) = value.as_deref() {
        *value = Some(expand_env(inner, field)?);
    }
    Ok(())
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PXDOCS_TEST_SIMPLE", "xtls/Xray-docs-next");
        }
        let result = expand_env("${PXDOCS_TEST_SIMPLE}", "theme.docs_repo").unwrap();
        assert_eq!(result, "xtls/Xray-docs-next");
        unsafe {
            std::env::remove_var("PXDOCS_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PXDOCS_TEST_UNSET");
        }
        let result = expand_env("${PXDOCS_TEST_UNSET:-main}", "theme.docs_branch").unwrap();
        assert_eq!(result, "main");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PXDOCS_TEST_MISSING");
        }
        let err = expand_env("${PXDOCS_TEST_MISSING}", "output.path").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("PXDOCS_TEST_MISSING"));
        assert!(err.to_string().contains("output.path"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PXDOCS_TEST_DIR", "dist");
        }
        let result = expand_env("${PXDOCS_TEST_DIR}/config.json", "output.path").unwrap();
        assert_eq!(result, "dist/config.json");
        unsafe {
            std::env::remove_var("PXDOCS_TEST_DIR");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$VAR", "test.field").unwrap();
        assert_eq!(result, "$VAR");
    }

    #[test]
    fn test_expand_opt_none_is_noop() {
        let mut value = None;
        expand_opt(&mut value, "output.path").unwrap();
        assert!(value.is_none());
    }
}
