use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_greenlens_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("GREENLENS_MODEL");
        env::remove_var("GREENLENS_CORPUS_DIR");
        env::remove_var("GREENLENS_REASONING_TIMEOUT_SECS");
        env::remove_var("OPENAI_API_KEY");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.corpus_dir.is_none());
    assert_eq!(config.reasoning_timeout_secs, 60);
    assert_eq!(config.reasoning_timeout().as_secs(), 60);
}

#[test]
#[serial]
fn test_from_env_requires_api_key() {
    clear_greenlens_env();

    let result = Config::from_env();

    assert!(matches!(
        result,
        Err(ConfigError::MissingApiKey { var: "OPENAI_API_KEY" })
    ));
}

#[test]
#[serial]
fn test_blank_api_key_is_missing() {
    clear_greenlens_env();

    let result = with_env_vars(&[("OPENAI_API_KEY", "   ")], Config::from_env);

    assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
}

#[test]
#[serial]
fn test_from_env_with_overrides() {
    clear_greenlens_env();

    let config = with_env_vars(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("GREENLENS_MODEL", "gpt-4o-mini"),
            ("GREENLENS_CORPUS_DIR", "/tmp/corpus"),
            ("GREENLENS_REASONING_TIMEOUT_SECS", "15"),
        ],
        Config::from_env,
    )
    .unwrap();

    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.corpus_dir, Some(PathBuf::from("/tmp/corpus")));
    assert_eq!(config.reasoning_timeout_secs, 15);
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_greenlens_env();

    let config = with_env_vars(&[("OPENAI_API_KEY", "sk-test")], Config::from_env).unwrap();

    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.corpus_dir.is_none());
    assert_eq!(config.reasoning_timeout_secs, 60);
}

#[test]
#[serial]
fn test_invalid_timeout_rejected() {
    clear_greenlens_env();

    let result = with_env_vars(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("GREENLENS_REASONING_TIMEOUT_SECS", "soon"),
        ],
        Config::from_env,
    );

    assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));
}

#[test]
fn test_validate_missing_corpus_dir() {
    let config = Config {
        corpus_dir: Some(PathBuf::from("/nonexistent/corpus")),
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::CorpusDirNotFound { .. })
    ));
}

#[test]
fn test_validate_corpus_path_must_be_directory() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        corpus_dir: Some(file.path().to_path_buf()),
        ..Config::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::CorpusDirNotADirectory { .. })
    ));
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}
