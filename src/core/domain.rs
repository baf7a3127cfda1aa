use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
    fn version(&self) -> i64;
}

const ENV_PREFIX: &str = "LMS";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: true,
        }
    }

    /// Loads `LMS_BRANCH_ID`, `LMS_LOG_LEVEL` and `LMS_JSON_LOGS` on top of the defaults.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    // from_source layers a single config source over Configuration::new("default")
    pub fn from_source<S>(source: S) -> LibraryResult<Self>
        where S: config::Source + Send + Sync + 'static {
        let defaults = Configuration::new("default");
        let cfg = config::Config::builder()
            .set_default("branch_id", defaults.branch_id)?
            .set_default("log_level", defaults.log_level)?
            .set_default("json_logs", defaults.json_logs)?
            .add_source(source)
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::{Configuration, ENV_PREFIX};
    use crate::core::library::LibraryError;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert(k.to_string(), v.to_string());
        }
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("info", config.log_level.as_str());
        assert!(config.json_logs);
    }

    #[tokio::test]
    async fn test_should_default_config_without_env() {
        let config = Configuration::from_source(env(&[])).expect("should load config");
        assert_eq!(Configuration::new("default"), config);
    }

    #[tokio::test]
    async fn test_should_build_config_from_env() {
        let config = Configuration::from_source(env(&[
            ("LMS_BRANCH_ID", "downtown"),
            ("LMS_LOG_LEVEL", "debug"),
            ("LMS_JSON_LOGS", "off"),
        ])).expect("should load config");
        assert_eq!("downtown", config.branch_id.as_str());
        assert_eq!("debug", config.log_level.as_str());
        assert!(!config.json_logs);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_json_logs() {
        let err = Configuration::from_source(env(&[("LMS_JSON_LOGS", "maybe")]))
            .expect_err("should reject json_logs");
        assert!(matches!(err, LibraryError::Validation { .. }));
    }
}
