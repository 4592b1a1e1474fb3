//! Pagination settings
//!
//! Settings are loaded from YAML or JSON and applied to a controller once its
//! providers are in place.

use crate::error::{Error, Result, ResultExt};
use crate::pagination::PaginationController;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Settings applied to a [`PaginationController`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Entries per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Page to jump to after sizing
    #[serde(default = "default_start_page")]
    pub start_page: u64,

    /// Clamp the current page when a recount leaves it past the last page
    #[serde(default)]
    pub clamp_current_page: bool,

    /// Log level for the CLI
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

fn default_page_size() -> u64 {
    10
}

fn default_start_page() -> u64 {
    1
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            start_page: default_start_page(),
            clamp_current_page: false,
            log_level: None,
        }
    }
}

impl PaginationSettings {
    /// Check the settings for values a controller would reject
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page_size must be at least 1"));
        }
        if self.start_page == 0 {
            return Err(Error::config("start_page must be at least 1"));
        }
        Ok(())
    }

    /// Apply the settings to a controller that already has a count provider
    ///
    /// Returns whether `start_page` is a real page the controller now sits on.
    /// A start page past the last page, or any start page of an empty
    /// collection, leaves the controller where it was and returns `false`.
    pub fn apply<T>(&self, controller: &mut PaginationController<T>) -> Result<bool> {
        self.validate()?;
        controller
            .set_clamp_on_recount(self.clamp_current_page)
            .set_page_size(self.page_size)?;

        let landed = controller.set_current_page(self.start_page);
        if !landed {
            warn!(
                start_page = self.start_page,
                pages = controller.number_of_pages(),
                "Start page out of range, staying on page {}",
                controller.current_page()
            );
        }
        Ok(landed)
    }
}

/// Load settings from a YAML or JSON file
///
/// The format is picked from the extension; anything other than `.json` is
/// parsed as YAML.
pub fn load_settings(path: impl AsRef<Path>) -> Result<PaginationSettings> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            })
        }
        result => result.context(format!(
            "Failed to read settings file '{}'",
            path.display()
        ))?,
    };

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let settings: PaginationSettings = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    settings.validate()?;
    Ok(settings)
}

/// Load settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<PaginationSettings> {
    let settings: PaginationSettings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn controller_with(entries: u64) -> PaginationController<()> {
        let mut controller = PaginationController::new();
        controller.set_count_provider(move || entries).unwrap();
        controller
    }

    #[test]
    fn test_settings_defaults() {
        let settings = load_settings_from_str("{}").unwrap();
        assert_eq!(settings, PaginationSettings::default());
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.start_page, 1);
        assert!(!settings.clamp_current_page);
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r"
page_size: 25
start_page: 3
clamp_current_page: true
log_level: DEBUG
";
        let settings = load_settings_from_str(yaml).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.start_page, 3);
        assert!(settings.clamp_current_page);
        assert_eq!(settings.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = load_settings_from_str("page_size: 0").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = load_settings_from_str("page_size: [1, 2").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"page_size": 5, "start_page": 2}}"#).unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.start_page, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings("/nonexistent/pagectl.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_load_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    #[test]
    fn test_apply_start_page_one_lands() {
        let mut controller = controller_with(5);
        assert!(PaginationSettings::default().apply(&mut controller).unwrap());
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_apply_sizes_and_jumps() {
        let settings = PaginationSettings {
            page_size: 10,
            start_page: 3,
            ..Default::default()
        };
        let mut controller = controller_with(25);
        assert!(settings.apply(&mut controller).unwrap());
        assert_eq!(controller.number_of_pages(), 3);
        assert_eq!(controller.current_page(), 3);
    }

    #[test]
    fn test_apply_start_page_out_of_range() {
        let settings = PaginationSettings {
            page_size: 10,
            start_page: 9,
            ..Default::default()
        };
        let mut controller = controller_with(25);
        assert!(!settings.apply(&mut controller).unwrap());
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_apply_on_empty_collection_does_not_land() {
        let settings = PaginationSettings::default();
        let mut controller = controller_with(0);
        assert!(!settings.apply(&mut controller).unwrap());
        assert_eq!(controller.number_of_pages(), 0);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_apply_without_count_provider_fails() {
        let mut controller: PaginationController<()> = PaginationController::new();
        let err = PaginationSettings::default()
            .apply(&mut controller)
            .unwrap_err();
        assert!(matches!(err, Error::MissingCountProvider));
    }
}
