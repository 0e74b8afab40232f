use std::path::Path;

use uaprobe::{
    error::{BoxError, ErrorContext as _},
    ua::ClassifierConfig,
};

pub mod classify;
pub mod config;

/// Load the classifier configuration from a JSON file,
/// falling back to the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ClassifierConfig, BoxError> {
    let Some(path) = path else {
        return Ok(ClassifierConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read classifier config from '{}'", path.display()))?;
    let config: ClassifierConfig =
        serde_json::from_str(&raw).context("parse classifier config as json")?;

    tracing::debug!(path = %path.display(), "loaded classifier config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), ClassifierConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(Path::new("/this/path/does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().starts_with("read classifier config from"));
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "uaprobe-cli-test-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"max_ua_length": 64, "ie": {"modern": 10.0}}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.max_ua_length, Some(64));
        assert_eq!(config.ie.modern, 10.0);
        assert_eq!(config.ie.transitional, 7.0);
        assert_eq!(config.opera_min_version, 5.0);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let path = std::env::temp_dir().join(format!(
            "uaprobe-cli-test-invalid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "max_ua_length = 64").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(err.to_string().starts_with("parse classifier config as json"));
    }
}
