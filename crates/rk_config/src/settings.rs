//! Volatile settings toggle store
//!
//! A fixed set of named boolean flags toggled from the Settings screen.
//! Values live in memory only and reset on every launch; none of the flags
//! changes the behavior of any other component.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed set of toggleable settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    PushNotifications,
    LocationServices,
    BluetoothMesh,
    DarkMode,
    HighContrast,
    AutoDownload,
    OfflineMode,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::PushNotifications => "push_notifications",
            SettingKey::LocationServices => "location_services",
            SettingKey::BluetoothMesh => "bluetooth_mesh",
            SettingKey::DarkMode => "dark_mode",
            SettingKey::HighContrast => "high_contrast",
            SettingKey::AutoDownload => "auto_download",
            SettingKey::OfflineMode => "offline_mode",
        }
    }

    /// Row title shown on the Settings screen
    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::PushNotifications => "Push Notifications",
            SettingKey::LocationServices => "Location Services",
            SettingKey::BluetoothMesh => "Bluetooth Mesh Network",
            SettingKey::DarkMode => "Dark Mode",
            SettingKey::HighContrast => "High Contrast Mode",
            SettingKey::AutoDownload => "Auto-Download Maps",
            SettingKey::OfflineMode => "Offline Mode",
        }
    }

    /// Row description shown under the title
    pub fn description(&self) -> &'static str {
        match self {
            SettingKey::PushNotifications => "Receive real-time disaster alerts",
            SettingKey::LocationServices => "Required for location-based alerts",
            SettingKey::BluetoothMesh => "Enable offline peer-to-peer communication",
            SettingKey::DarkMode => "Reduces eye strain in low light",
            SettingKey::HighContrast => "Improves visibility during emergencies",
            SettingKey::AutoDownload => "Download offline maps for your area",
            SettingKey::OfflineMode => "Prefer mesh relay over network access",
        }
    }

    /// Initial value on launch
    pub fn default_value(&self) -> bool {
        match self {
            SettingKey::PushNotifications => true,
            SettingKey::LocationServices => true,
            SettingKey::BluetoothMesh => true,
            SettingKey::DarkMode => false,
            SettingKey::HighContrast => false,
            SettingKey::AutoDownload => true,
            SettingKey::OfflineMode => false,
        }
    }

    /// All keys in display order
    pub fn all() -> &'static [SettingKey] {
        &[
            SettingKey::PushNotifications,
            SettingKey::LocationServices,
            SettingKey::BluetoothMesh,
            SettingKey::DarkMode,
            SettingKey::HighContrast,
            SettingKey::AutoDownload,
            SettingKey::OfflineMode,
        ]
    }
}

impl std::str::FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "push_notifications" => Ok(SettingKey::PushNotifications),
            "location_services" => Ok(SettingKey::LocationServices),
            "bluetooth_mesh" => Ok(SettingKey::BluetoothMesh),
            "dark_mode" => Ok(SettingKey::DarkMode),
            "high_contrast" => Ok(SettingKey::HighContrast),
            "auto_download" => Ok(SettingKey::AutoDownload),
            "offline_mode" => Ok(SettingKey::OfflineMode),
            other => Err(format!("unknown setting key: {other}")),
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory store of setting flags
#[derive(Debug, Clone)]
pub struct SettingsStore {
    values: BTreeMap<SettingKey, bool>,
}

impl SettingsStore {
    /// Create a store with every flag at its default value
    pub fn new() -> Self {
        let values = SettingKey::all()
            .iter()
            .map(|key| (*key, key.default_value()))
            .collect();
        Self { values }
    }

    /// Current value of a flag
    pub fn get(&self, key: SettingKey) -> bool {
        self.values.get(&key).copied().unwrap_or_default()
    }

    /// Flip a flag, returning the new value
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let entry = self.values.entry(key).or_insert_with(|| key.default_value());
        *entry = !*entry;
        tracing::debug!(key = %key.as_str(), value = *entry, "setting toggled");
        *entry
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = SettingsStore::new();
        assert!(store.get(SettingKey::PushNotifications));
        assert!(store.get(SettingKey::BluetoothMesh));
        assert!(!store.get(SettingKey::DarkMode));
        assert!(!store.get(SettingKey::OfflineMode));
    }

    #[test]
    fn test_toggle_flips_value() {
        let mut store = SettingsStore::new();
        assert!(!store.get(SettingKey::DarkMode));
        assert!(store.toggle(SettingKey::DarkMode));
        assert!(store.get(SettingKey::DarkMode));
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut store = SettingsStore::new();
        for key in SettingKey::all() {
            let before = store.get(*key);
            store.toggle(*key);
            store.toggle(*key);
            assert_eq!(store.get(*key), before, "double toggle changed {key}");
        }
    }

    #[test]
    fn test_key_roundtrip() {
        for key in SettingKey::all() {
            let parsed: SettingKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, *key);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("airplane_mode".parse::<SettingKey>().is_err());
    }
}
