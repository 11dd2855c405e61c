//! Grid layout settings.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};
use crate::geometry::EventGeometry;

/// Prefix for environment overrides, e.g. `DAYGRID_CELL_HEIGHT=80`.
const ENV_PREFIX: &str = "DAYGRID";

/// Drawing constants and the short-event floor used by the layout pass.
///
/// Stored at ~/.config/daygrid/layout.toml; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Height of one hour cell in pixels.
    pub cell_height: f32,
    pub hour_gap: i32,
    pub cell_margin: i32,
    pub min_event_height: i32,
    pub all_day_row_height: i32,

    /// Explicit minimum duration. When unset it is derived from
    /// `min_event_height` so an event never expires before its drawn box ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration_minutes: Option<i64>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            cell_height: 64.0,
            hour_gap: 1,
            cell_margin: 1,
            min_event_height: 24,
            all_day_row_height: 34,
            min_duration_minutes: None,
        }
    }
}

impl LayoutSettings {
    pub fn config_path() -> DayGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayGridError::Config("Could not determine config directory".into()))?
            .join("daygrid");

        Ok(config_dir.join("layout.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> DayGridResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) layered with `DAYGRID_*` overrides.
    pub fn load_from(path: &Path) -> DayGridResult<Self> {
        let settings: LayoutSettings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| DayGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayGridError::Config(e.to_string()))?;

        if let Err(err) = settings.validate() {
            warn!(
                "event=settings_rejected module=settings path={} error={}",
                path.display(),
                err
            );
            return Err(err);
        }

        info!(
            "event=settings_loaded module=settings path={} min_duration={}",
            path.display(),
            settings.min_duration_minutes()
        );

        Ok(settings)
    }

    pub fn validate(&self) -> DayGridResult<()> {
        if self.cell_height.is_nan() || self.cell_height <= 0.0 {
            return Err(DayGridError::Config(format!(
                "cell_height must be positive, got {}",
                self.cell_height
            )));
        }
        if self.min_event_height < 0 || self.hour_gap < 0 || self.cell_margin < 0 {
            return Err(DayGridError::Config(
                "min_event_height, hour_gap and cell_margin must not be negative".into(),
            ));
        }
        if self.all_day_row_height <= 0 {
            return Err(DayGridError::Config(format!(
                "all_day_row_height must be positive, got {}",
                self.all_day_row_height
            )));
        }
        if let Some(minutes) = self.min_duration_minutes.filter(|m| *m < 0) {
            return Err(DayGridError::Config(format!(
                "min_duration_minutes must not be negative, got {minutes}"
            )));
        }
        Ok(())
    }

    /// Floor applied to timed event durations during layout.
    pub fn min_duration_minutes(&self) -> i64 {
        self.min_duration_minutes.unwrap_or_else(|| {
            (self.min_event_height as f32 * 60.0 / self.cell_height).ceil() as i64
        })
    }

    pub fn geometry(&self) -> EventGeometry {
        EventGeometry {
            minute_height: self.cell_height / 60.0,
            hour_gap: self.hour_gap,
            cell_margin: self.cell_margin,
            min_event_height: self.min_event_height,
            all_day_row_height: self.all_day_row_height,
        }
    }

    /// Save the current settings to `path`.
    pub fn save(&self, path: &Path) -> DayGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DayGridError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Write a settings file with every option commented out.
    pub fn create_default_config(path: &Path) -> DayGridResult<()> {
        let defaults = LayoutSettings::default();
        let contents = format!(
            "\
# daygrid layout settings

# Pixels per hour cell:
# cell_height = {:.1}

# Gap between hour cells and margin between columns:
# hour_gap = {}
# cell_margin = {}

# Shortest box drawn for a timed event, in pixels:
# min_event_height = {}

# Row height in the all-day strip:
# all_day_row_height = {}

# Treat shorter events as this long when detecting overlap
# (derived from min_event_height when unset):
# min_duration_minutes = 15
",
            defaults.cell_height,
            defaults.hour_gap,
            defaults.cell_margin,
            defaults.min_event_height,
            defaults.all_day_row_height,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LayoutSettings::load_from(&dir.path().join("layout.toml")).unwrap();
        assert_eq!(settings, LayoutSettings::default());
    }

    #[test]
    fn test_load_from_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "cell_height = 120.0\nmin_duration_minutes = 10\n").unwrap();

        let settings = LayoutSettings::load_from(&path).unwrap();

        assert_eq!(settings.cell_height, 120.0);
        assert_eq!(settings.min_duration_minutes(), 10);
        assert_eq!(settings.min_event_height, 24);
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "cell_height = 0.0\n").unwrap();

        let result = LayoutSettings::load_from(&path);
        assert!(matches!(result, Err(DayGridError::Config(_))));
    }

    #[test]
    fn test_default_config_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("layout.toml");

        LayoutSettings::create_default_config(&path).unwrap();
        let settings = LayoutSettings::load_from(&path).unwrap();

        assert_eq!(settings, LayoutSettings::default());
    }

    #[test]
    fn test_saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        let settings = LayoutSettings {
            cell_height: 96.0,
            min_duration_minutes: Some(30),
            ..LayoutSettings::default()
        };

        settings.save(&path).unwrap();

        assert_eq!(LayoutSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_min_duration_derived_from_event_height() {
        let settings = LayoutSettings {
            cell_height: 64.0,
            min_event_height: 24,
            ..LayoutSettings::default()
        };
        // 24px at 64px/hour is 22.5 minutes, rounded up.
        assert_eq!(settings.min_duration_minutes(), 23);
    }

    #[test]
    fn test_geometry_uses_per_minute_height() {
        let settings = LayoutSettings {
            cell_height: 120.0,
            ..LayoutSettings::default()
        };
        assert_eq!(settings.geometry().minute_height, 2.0);
    }
}
