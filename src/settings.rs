//! User settings persistence - save/load config to JSON file.
//!
//! Only configuration lives here (scheme choice, panel defaults). Session
//! state - counters, expansion depth, expression text - is never persisted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hierarchy::SchemeId;

/// Persisted user settings. Saved to `Documents/Echelon/settings.json`.
#[derive(Resource, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSettings {
    #[serde(default)]
    pub scheme: SchemeId,
    // Panel visibility defaults
    #[serde(default = "default_true")]
    pub algebra_open: bool,
    #[serde(default = "default_true")]
    pub camp_open: bool,
    #[serde(default = "default_true")]
    pub recap_open: bool,
}

fn default_true() -> bool { true }

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            scheme: SchemeId::default(),
            algebra_open: true,
            camp_open: true,
            recap_open: true,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .or_else(|_| std::env::var("HOME"))
        .ok()?;
    let dir = PathBuf::from(home).join("Documents").join("Echelon");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("settings.json"))
}

pub fn save_settings(settings: &UserSettings) {
    let Some(path) = settings_path() else { return };
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!("Failed to save settings: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize settings: {}", e),
    }
}

pub fn load_settings() -> UserSettings {
    let Some(path) = settings_path() else { return UserSettings::default() };
    match std::fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => UserSettings::default(),
    }
}
