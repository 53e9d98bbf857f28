use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME};
use crate::error::BarkError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Email,
    ApiKey,
    MissionId,
}

impl ConfigField {
    #[allow(dead_code)]
    pub const ALL: [ConfigField; 3] = [
        ConfigField::Email,
        ConfigField::ApiKey,
        ConfigField::MissionId,
    ];

    /// Key used in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Email => "email",
            ConfigField::ApiKey => "api_key",
            ConfigField::MissionId => "mission_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Email => "Email",
            ConfigField::ApiKey => "API key",
            ConfigField::MissionId => "Mission ID",
        }
    }

    pub fn set_flag(self) -> &'static str {
        match self {
            ConfigField::Email => "--set-email",
            ConfigField::ApiKey => "--set-api-key",
            ConfigField::MissionId => "--set-mission-id",
        }
    }

    pub fn get_flag(self) -> &'static str {
        match self {
            ConfigField::Email => "--get-email",
            ConfigField::ApiKey => "--get-api-key",
            ConfigField::MissionId => "--get-mission-id",
        }
    }

    pub fn value_name(self) -> &'static str {
        match self {
            ConfigField::Email => "EMAIL",
            ConfigField::ApiKey => "KEY",
            ConfigField::MissionId => "ID",
        }
    }

    /// Whether the value may be echoed back in confirmations and logs.
    pub fn is_secret(self) -> bool {
        matches!(self, ConfigField::ApiKey)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_mission_id"
    )]
    pub mission_id: Option<String>,
}

impl ClientConfig {
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        match field {
            ConfigField::Email => self.email.as_deref(),
            ConfigField::ApiKey => self.api_key.as_deref(),
            ConfigField::MissionId => self.mission_id.as_deref(),
        }
    }

    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let slot = match field {
            ConfigField::Email => &mut self.email,
            ConfigField::ApiKey => &mut self.api_key,
            ConfigField::MissionId => &mut self.mission_id,
        };
        *slot = Some(value.into());
    }

    /// Like [`ClientConfig::get`], but an unset or empty value is an error.
    pub fn require(&self, field: ConfigField) -> Result<&str, BarkError> {
        self.get(field)
            .filter(|value| !value.is_empty())
            .ok_or(BarkError::MissingCredential { field })
    }
}

// Hand-edited files may carry the mission id as a bare integer.
fn deserialize_mission_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MissionId {
        Text(String),
        Number(u64),
    }

    Ok(
        Option::<MissionId>::deserialize(deserializer)?.map(|id| match id {
            MissionId::Text(text) => text,
            MissionId::Number(number) => number.to_string(),
        }),
    )
}

/// Persistent store for the single per-user [`ClientConfig`] record.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user location, honouring `BARK_CONFIG_DIR`.
    pub fn from_env() -> Result<Self, BarkError> {
        let override_dir = std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from);
        let path = resolve_config_path(override_dir, dirs::config_dir())?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the default record when no file exists yet.
    pub fn load(&self) -> Result<ClientConfig, BarkError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(ClientConfig::default());
            }
            Err(e) => return Err(self.read_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        let config: ClientConfig = serde_yaml::from_str(&content).map_err(|e| self.read_error(e))?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    /// Replaces the file atomically: the record is written to a sibling
    /// temporary file which is then renamed over the target.
    pub fn save(&self, config: &ClientConfig) -> Result<(), BarkError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let content = serde_yaml::to_string(config).map_err(|e| self.write_error(e))?;

        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| self.write_error(e))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Read-modify-write of a single field. A corrupt file is replaced by a
    /// fresh record so that setting a field always repairs it.
    pub fn set_field(
        &self,
        field: ConfigField,
        value: impl Into<String>,
    ) -> Result<ClientConfig, BarkError> {
        let mut config = match self.load() {
            Ok(config) => config,
            Err(e @ BarkError::ConfigRead { .. }) => {
                tracing::warn!("{e}; starting from an empty config");
                ClientConfig::default()
            }
            Err(e) => return Err(e),
        };

        config.set(field, value);
        self.save(&config)?;
        Ok(config)
    }

    fn read_error(&self, reason: impl ToString) -> BarkError {
        BarkError::ConfigRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, reason: impl ToString) -> BarkError {
        BarkError::ConfigWrite {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

fn resolve_config_path(
    override_dir: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, BarkError> {
    if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir.join(CONFIG_FILENAME));
    }

    let base_dir = platform_dir.ok_or(BarkError::ConfigLocation)?;
    Ok(base_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}
