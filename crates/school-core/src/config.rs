//! School Configuration
//!
//! Branding and runtime knobs, read from an embedded JSON document.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::roles::Role;

/// Configuration shipped with the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../config/school.json");

/// Sidebar subtitle per portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PortalNames {
    pub admin: String,
    pub student: String,
    pub teacher: String,
    pub registrar: String,
    pub dean: String,
    pub vice_principal: String,
}

impl Default for PortalNames {
    fn default() -> Self {
        Self {
            admin: "Administration".to_string(),
            student: "Student Portal".to_string(),
            teacher: "Teacher Portal".to_string(),
            registrar: "Registrar Office".to_string(),
            dean: "Dean of Students".to_string(),
            vice_principal: "Vice Principal Office".to_string(),
        }
    }
}

impl PortalNames {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin,
            Role::Student => &self.student,
            Role::Teacher => &self.teacher,
            Role::Registrar => &self.registrar,
            Role::Dean => &self.dean,
            Role::VicePrincipal => &self.vice_principal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SchoolConfig {
    pub school_name: String,
    pub tagline: String,
    pub portal_names: PortalNames,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
    pub toast_duration_ms: u32,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            school_name: "Eastwood Academy".to_string(),
            tagline: "Student Information System".to_string(),
            portal_names: PortalNames::default(),
            log_level: "info".to_string(),
            log_capacity: 200,
            toast_duration_ms: 4000,
        }
    }
}

impl SchoolConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The embedded document, or defaults if it fails to parse
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::warn!("[CONFIG] {}; using defaults", e);
            Self::default()
        })
    }

    /// Parsed log level; unknown names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SchoolConfig::from_json(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(config.school_name, "Eastwood Academy");
        assert_eq!(config.portal_names.for_role(Role::Student), "Student Portal");
        assert_eq!(config, SchoolConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SchoolConfig::from_json(r#"{"schoolName": "Monrovia Central High School"}"#).unwrap();
        assert_eq!(config.school_name, "Monrovia Central High School");
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.portal_names, PortalNames::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = SchoolConfig::from_json(r#"{"schoolNam": "typo"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid school configuration"));
    }

    #[test]
    fn test_level_filter() {
        let mut config = SchoolConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
