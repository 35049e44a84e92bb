//! Environment handling: dotenv loading and credential checks.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::llm::Provider;

/// Loads dotenv files without overriding anything already set.
///
/// Files are given in precedence order: a variable from the real process
/// environment always wins, and an earlier file wins over a later one.
/// Missing files are skipped; unreadable or malformed ones are logged and
/// skipped. Returns the files that were loaded.
pub fn load_env_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| load_env_file(path))
        .cloned()
        .collect()
}

fn load_env_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            true
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load environment file");
            false
        }
    }
}

/// Checks that the credential `provider` needs is present in the environment.
pub fn validate_environment(provider: Provider) -> Result<(), AppError> {
    validate_environment_with(provider, |name| std::env::var(name).ok())
}

/// Like [`validate_environment`], reading variables through `lookup`.
///
/// Providers in [`crate::llm::NO_KEY_PROVIDERS`] always pass. For every other
/// provider the variable must be set and non-empty.
pub fn validate_environment_with<F>(provider: Provider, lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(var) = provider.env_key_name() else {
        return Ok(());
    };

    if lookup(var).is_some_and(|value| !value.is_empty()) {
        Ok(())
    } else {
        Err(AppError::MissingCredential { provider, var })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn unset(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_no_key_providers_pass_without_variables() {
        for provider in crate::llm::NO_KEY_PROVIDERS {
            assert!(validate_environment_with(*provider, unset).is_ok());
        }
    }

    #[test]
    fn test_keyed_providers_fail_with_exact_variable() {
        for provider in Provider::ALL.iter().filter(|p| p.requires_api_key()) {
            let err = validate_environment_with(*provider, unset).unwrap_err();
            let expected = provider.env_key_name().unwrap();
            match err {
                AppError::MissingCredential { var, .. } => assert_eq!(var, expected),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = validate_environment_with(Provider::Groq, |_| Some(String::new()));
        assert!(matches!(result, Err(AppError::MissingCredential { .. })));
    }

    #[test]
    fn test_present_value_passes() {
        let lookup = |name: &str| (name == "MISTRAL_API_KEY").then(|| "sk-test".to_string());
        assert!(validate_environment_with(Provider::Mistral, lookup).is_ok());
    }

    #[test]
    #[serial]
    fn test_env_file_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join(".env");
        let home = temp_dir.path().join(".quill.env");
        fs::write(
            &local,
            "QUILL_TEST_SHARED=local\nQUILL_TEST_PRESET=from-file\n",
        )
        .unwrap();
        fs::write(
            &home,
            "QUILL_TEST_SHARED=home\nQUILL_TEST_HOME_ONLY=home\n",
        )
        .unwrap();

        // SAFETY: serialized test; only touches QUILL_TEST_* variables
        unsafe {
            std::env::remove_var("QUILL_TEST_SHARED");
            std::env::remove_var("QUILL_TEST_HOME_ONLY");
            std::env::set_var("QUILL_TEST_PRESET", "process");
        }

        let missing = temp_dir.path().join("absent.env");
        let loaded = load_env_files(&[local.clone(), missing, home.clone()]);

        assert_eq!(loaded, vec![local, home]);
        assert_eq!(std::env::var("QUILL_TEST_SHARED").unwrap(), "local");
        assert_eq!(std::env::var("QUILL_TEST_HOME_ONLY").unwrap(), "home");
        assert_eq!(std::env::var("QUILL_TEST_PRESET").unwrap(), "process");

        // SAFETY: cleanup of test-only variables
        unsafe {
            std::env::remove_var("QUILL_TEST_SHARED");
            std::env::remove_var("QUILL_TEST_HOME_ONLY");
            std::env::remove_var("QUILL_TEST_PRESET");
        }
    }
}
