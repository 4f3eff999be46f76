use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the per-user config directory.
    pub fn from_default_location() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, returning defaults when the file does not exist yet.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Like `get`, but logs and falls back to defaults on any error.
    pub fn get_or_default(&self) -> Settings {
        self.get().unwrap_or_else(|err| {
            log::warn!("Using default settings: {err:#}");
            Settings::default()
        })
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}

fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "DobPicker", "DobPicker") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}
