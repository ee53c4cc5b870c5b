//! Runtime configuration: TOML file, then `UNIBOT_*` environment overrides.

use crate::engine::StudentKeyPolicy;
use crate::store::{Record, StudentRecord, TimetableEntry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub lookup: LookupConfig,
    pub logging: LoggingConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Dynamodb,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// JSON fixture used by the memory backend.
    pub fixture_path: Option<PathBuf>,
    pub student_table: String,
    pub timetable_table: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LookupConfig {
    /// When set, every student lookup uses this id instead of the slot value.
    pub fixed_student_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            fixture_path: Some(PathBuf::from("fixtures/records.json")),
            student_table: StudentRecord::DEFAULT_TABLE.to_string(),
            timetable_table: TimetableEntry::DEFAULT_TABLE.to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// First config file present in the usual places.
    pub fn locate() -> Option<PathBuf> {
        ["unibot.toml", "config/unibot.toml"]
            .into_iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    /// The file from [`Config::locate`], or defaults; then the environment
    /// (including a `.env` file) on top.
    pub fn load() -> ConfigResult<Self> {
        dotenv::dotenv().ok();

        let mut config = match Self::locate() {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Overlay `UNIBOT_*` values supplied by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup("UNIBOT_STORE_BACKEND") {
            self.store.backend = match backend.to_lowercase().as_str() {
                "memory" => StoreBackend::Memory,
                "dynamodb" => StoreBackend::Dynamodb,
                other => {
                    return Err(ConfigError::Invalid(format!("unknown store backend '{}'", other)))
                }
            };
        }
        if let Some(path) = lookup("UNIBOT_FIXTURE_PATH") {
            self.store.fixture_path = Some(PathBuf::from(path));
        }
        if let Some(table) = lookup("UNIBOT_STUDENT_TABLE") {
            self.store.student_table = table;
        }
        if let Some(table) = lookup("UNIBOT_TIMETABLE_TABLE") {
            self.store.timetable_table = table;
        }
        if let Some(region) = lookup("UNIBOT_REGION") {
            self.store.region = Some(region);
        }
        if let Some(endpoint) = lookup("UNIBOT_ENDPOINT_URL") {
            self.store.endpoint_url = Some(endpoint);
        }
        if let Some(id) = lookup("UNIBOT_FIXED_STUDENT_ID") {
            self.lookup.fixed_student_id = Some(id);
        }
        if let Some(level) = lookup("UNIBOT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("UNIBOT_LOG_JSON") {
            self.logging.json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        self.validate()
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.store.student_table.trim().is_empty() {
            return Err(ConfigError::MissingField("store.student_table".to_string()));
        }
        if self.store.timetable_table.trim().is_empty() {
            return Err(ConfigError::MissingField("store.timetable_table".to_string()));
        }
        if self.store.backend == StoreBackend::Memory && self.store.fixture_path.is_none() {
            return Err(ConfigError::MissingField("store.fixture_path".to_string()));
        }
        if let Some(ref id) = self.lookup.fixed_student_id {
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "lookup.fixed_student_id must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn student_key_policy(&self) -> StudentKeyPolicy {
        match self.lookup.fixed_student_id {
            Some(ref id) => StudentKeyPolicy::Fixed(id.clone()),
            None => StudentKeyPolicy::FromSlot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.student_table, "StudentRecords");
        assert_eq!(config.store.timetable_table, "Timetable");
        assert_eq!(config.store.student_table, StudentRecord::DEFAULT_TABLE);
        assert_eq!(config.store.timetable_table, TimetableEntry::DEFAULT_TABLE);
        assert_eq!(config.student_key_policy(), StudentKeyPolicy::FromSlot);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_str(
            r#"
            [store]
            backend = "dynamodb"
            student_table = "Students"
            region = "ap-south-1"

            [lookup]
            fixed_student_id = "RA2211028010179"

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Dynamodb);
        assert_eq!(config.store.student_table, "Students");
        assert_eq!(config.store.timetable_table, "Timetable");
        assert_eq!(config.store.region.as_deref(), Some("ap-south-1"));
        assert!(config.logging.json);
        assert_eq!(
            config.student_key_policy(),
            StudentKeyPolicy::Fixed("RA2211028010179".to_string())
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\ntimetable_table = \"Week\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.store.timetable_table, "Week");
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            Config::from_str("[store\nbackend ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let err = Config::from_str("[store]\nstudent_table = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("UNIBOT_STORE_BACKEND", "DynamoDB"),
                ("UNIBOT_TIMETABLE_TABLE", "Schedule"),
                ("UNIBOT_FIXED_STUDENT_ID", "RA42"),
                ("UNIBOT_LOG_JSON", "true"),
            ]))
            .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Dynamodb);
        assert_eq!(config.store.timetable_table, "Schedule");
        assert_eq!(config.student_key_policy(), StudentKeyPolicy::Fixed("RA42".into()));
        assert!(config.logging.json);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(env(&[("UNIBOT_STORE_BACKEND", "postgres")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_blank_fixed_id_rejected() {
        let mut config = Config::default();
        assert!(config
            .apply_overrides(env(&[("UNIBOT_FIXED_STUDENT_ID", " ")]))
            .is_err());
    }
}
