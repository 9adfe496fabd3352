use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::TexturePack;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Viewer settings. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Map region inside the window; the whole window when unset
    pub game_screen_width: Option<u32>,
    pub game_screen_height: Option<u32>,
    pub window_x_offset: u32,
    pub window_y_offset: u32,
    pub map_width: usize,
    pub map_height: usize,
    pub tile_size: u32,
    pub camera_speed: f64,
    pub texture_pack: TexturePack,
    /// Map seed; a fresh random map each run when unset
    pub seed: Option<u64>,
    pub asset_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 840,
            window_height: 640,
            game_screen_width: None,
            game_screen_height: None,
            window_x_offset: 0,
            window_y_offset: 0,
            map_width: 30,
            map_height: 20,
            tile_size: 64,
            camera_speed: 1.0,
            texture_pack: TexturePack::default(),
            seed: None,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

impl ViewerConfig {
    /// Read and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Game screen size, falling back to the window size
    pub fn game_screen_size(&self) -> (u32, u32) {
        (
            self.game_screen_width.unwrap_or(self.window_width),
            self.game_screen_height.unwrap_or(self.window_height),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (game_w, game_h) = self.game_screen_size();
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        if game_w == 0 || game_h == 0 {
            return Err(ConfigError::Invalid("game screen size must be non-zero".to_string()));
        }
        if game_w > self.window_width || game_h > self.window_height {
            return Err(ConfigError::Invalid(format!(
                "game screen {game_w}x{game_h} does not fit in window {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(ConfigError::Invalid("map must have at least one tile".to_string()));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid("tile size must be non-zero".to_string()));
        }
        if !self.camera_speed.is_finite() || self.camera_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "camera speed must be positive, got {}",
                self.camera_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game_screen_size(), (840, 640));
    }

    #[test]
    fn test_partial_yaml() {
        let config = ViewerConfig::from_yaml("map_width: 10\ntexture_pack: wilds\nseed: 99\n").unwrap();
        assert_eq!(config.map_width, 10);
        assert_eq!(config.map_height, 20);
        assert_eq!(config.texture_pack, TexturePack::Wilds);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_rejects_unknown_pack() {
        assert!(matches!(
            ViewerConfig::from_yaml("texture_pack: desert\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(matches!(ViewerConfig::from_yaml("zoom: 3\n"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_oversized_game_screen() {
        let err = ViewerConfig::from_yaml("game_screen_width: 900\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("900x640"));
    }

    #[test]
    fn test_rejects_bad_speed() {
        let config = ViewerConfig {
            camera_speed: 0.0,
            ..ViewerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window_width: 1024\nwindow_height: 768\ngame_screen_width: 800").unwrap();
        let config = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(config.game_screen_size(), (800, 768));
    }

    #[test]
    fn test_missing_file() {
        let err = ViewerConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
