use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::{ActiveTheme, ColorSchemeName};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Color scheme applied to the editor panels
    #[serde(default)]
    pub color_scheme: ColorSchemeName,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to switch the active color scheme
#[derive(Message)]
pub struct SetColorSchemeRequest {
    pub scheme: ColorSchemeName,
}

/// Parse config file contents.
///
/// On failure returns the defaults together with a user-facing reason.
pub fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str(json) {
        Ok(data) => (data, None),
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Load configuration from disk.
///
/// Returns the data and, if it had to fall back to defaults, the reason.
fn load_config(config_path: &Path) -> (AppConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (AppConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.1.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut theme: ResMut<ActiveTheme>,
    mut clear_color: ResMut<ClearColor>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    *theme = ActiveTheme::new(config.data.color_scheme);
    clear_color.0 = theme.clear_color();

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to switch the color scheme and remember the choice
fn set_color_scheme_system(
    mut events: MessageReader<SetColorSchemeRequest>,
    mut config: ResMut<AppConfig>,
    mut theme: ResMut<ActiveTheme>,
    mut clear_color: ResMut<ClearColor>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if theme.name == event.scheme {
            continue;
        }
        *theme = ActiveTheme::new(event.scheme);
        clear_color.0 = theme.clear_color();
        config.data.color_scheme = event.scheme;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Switched color scheme to {}", event.scheme.display_name());
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let theme = ActiveTheme::default();
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .insert_resource(theme)
            .insert_resource(ClearColor(theme.clear_color()))
            .add_message::<SaveConfigRequest>()
            .add_message::<SetColorSchemeRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_color_scheme_system.run_if(on_message::<SetColorSchemeRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
