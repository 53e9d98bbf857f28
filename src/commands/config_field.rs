use crate::config::{ClientConfig, ConfigField, ConfigStore};
use anyhow::Result;
use std::io::Write;

pub fn run_set_field(
    store: &ConfigStore,
    field: ConfigField,
    value: &str,
    out: &mut impl Write,
) -> Result<ClientConfig> {
    let config = store.set_field(field, value)?;
    tracing::info!(field = field.key(), path = %store.path().display(), "updated config");

    if field.is_secret() {
        writeln!(out, "✅ {} updated", field.label())?;
    } else {
        writeln!(out, "✅ {} set to {value}", field.label())?;
    }
    Ok(config)
}

pub fn run_get_field(config: &ClientConfig, field: ConfigField, out: &mut impl Write) -> Result<()> {
    let value = config.require(field)?;
    writeln!(out, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarkError;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_set_field_prints_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());
        let mut out = Vec::new();

        let config = run_set_field(&store, ConfigField::Email, "ops@example.com", &mut out).unwrap();

        assert_eq!(config.email.as_deref(), Some("ops@example.com"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "✅ Email set to ops@example.com\n"
        );
    }

    #[test]
    fn test_run_set_field_does_not_echo_api_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(temp_dir.path());
        let mut out = Vec::new();

        run_set_field(&store, ConfigField::ApiKey, "top-secret", &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("top-secret"));
        assert_eq!(store.load().unwrap().api_key.as_deref(), Some("top-secret"));
    }

    #[test]
    fn test_run_get_field_prints_value() {
        let config = ClientConfig {
            mission_id: Some("1701".to_string()),
            ..ClientConfig::default()
        };
        let mut out = Vec::new();

        run_get_field(&config, ConfigField::MissionId, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1701\n");
    }

    #[test]
    fn test_run_get_field_unset_is_missing_credential() {
        let mut out = Vec::new();

        let err = run_get_field(&ClientConfig::default(), ConfigField::Email, &mut out).unwrap_err();

        let err = err.downcast::<BarkError>().unwrap();
        assert!(err.to_string().contains("--set-email"));
        assert!(out.is_empty());
    }
}
