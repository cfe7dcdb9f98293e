//! Form configuration and builder

use crate::error::FormResult;
use serde::{Deserialize, Serialize};
use service_builder::builder;

/// Settings shared by the forms built from this crate.
///
/// - `minimum_age`: youngest age, in whole years, accepted by the
///   date-of-birth check (18)
/// - `redact_submitted_values`: log only the submitted field keys instead of
///   their values (true)
/// - `password_key`: key of the password field that the confirmation field
///   must match ("password")
///
/// Fields are read through the generated `get_*` accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[builder]
pub struct FormConfig {
    #[builder(getter, default = "18")]
    pub minimum_age: u32,

    #[builder(getter, default = "true")]
    pub redact_submitted_values: bool,

    #[builder(getter, default = "\"password\".to_string()")]
    pub password_key: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            redact_submitted_values: true,
            password_key: "password".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// Add convenience methods to the generated builder
impl FormConfigBuilder {
    /// Log submitted values in full, for local debugging
    pub fn log_submitted_values(self) -> Self {
        self.redact_submitted_values(false)
    }

    pub fn build_config(self) -> FormConfig {
        self.build_with_defaults().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(*config.get_minimum_age(), 18);
        assert!(*config.get_redact_submitted_values());
        assert_eq!(config.get_password_key(), "password");
    }

    #[test]
    fn test_config_builder() {
        let config = FormConfig::builder()
            .minimum_age(21)
            .password_key("passphrase".to_string())
            .log_submitted_values()
            .build_config();

        assert_eq!(*config.get_minimum_age(), 21);
        assert!(!*config.get_redact_submitted_values());
        assert_eq!(config.get_password_key(), "passphrase");
    }

    #[test]
    fn test_config_from_json() {
        let config = FormConfig::from_json(r#"{ "minimum_age": 16 }"#).unwrap();
        assert_eq!(*config.get_minimum_age(), 16);
        assert!(*config.get_redact_submitted_values());
        assert_eq!(config.get_password_key(), "password");

        assert!(FormConfig::from_json("{ not json").is_err());
    }
}
