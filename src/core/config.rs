use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Delay before controls hide during uninterrupted fullscreen playback.
    pub autohide_delay_ms: u64,
    /// Volume applied to the media element when the player starts.
    pub default_volume: f64,
    /// Volume restored when unmuting while the slider sits at zero.
    pub unmute_restore_volume: f64,
    /// Seconds skipped by the rewind/forward buttons and arrow keys.
    pub skip_seconds: f64,
    /// Seconds stepped by the J/L keys.
    pub step_seconds: f64,
    /// Playback rates offered by the speed selector.
    pub speed_options: Vec<f64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autohide_delay_ms: 2000,
            default_volume: 0.7,
            unmute_restore_volume: 0.5,
            skip_seconds: 10.0,
            step_seconds: 5.0,
            speed_options: vec![0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
        }
    }
}

impl PlayerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| anyhow::anyhow!("Failed to read config file at {}: {}", config_path.display(), e))?;

            // Try to parse the config, but if it fails due to missing fields, create a new one
            match serde_json::from_str::<Self>(&content) {
                Ok(config) => {
                    log::info!("Loaded existing config from {}", config_path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Config file exists but has issues ({}), creating new one with defaults", e);
                    let new_config = Self::default();
                    new_config.save()
                        .map_err(|save_err| anyhow::anyhow!("Failed to save new config: {}", save_err))?;
                    log::info!("Created new config file at {}", config_path.display());
                    Ok(new_config)
                }
            }
        } else {
            log::info!("No config file found, creating default config");
            let config = Self::default();
            config.save()
                .map_err(|e| anyhow::anyhow!("Failed to save default config: {}", e))?;
            log::info!("Created new config file at {}", config_path.display());
            Ok(config)
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("overlay-player")
            .join("config.json")
    }

    pub fn autohide_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.autohide_delay_ms)
    }
}
