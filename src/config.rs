use crate::{CONFIG_DIRECTORY, CONFIG_FILE, expand_tilde};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SOUNDS_DIR: &str = "sounds";
const DEFAULT_PLAYER: &str = "mplayer";
const DEFAULT_MIXER: &str = "amixer";
const DEFAULT_MIXER_CONTROL: &str = "Master";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_LABEL_WIDTH: usize = 15;
const DEFAULT_VOLUME: u8 = 75;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root of the sound library: `<sounds_dir>/<category>/<subcategory>/<clip>`
    pub sounds_dir: PathBuf,
    pub player: String,
    pub mixer: String,
    pub mixer_control: String,
    /// Clips shown per group before "Show More"
    pub page_size: usize,
    pub label_width: usize,
    pub initial_volume: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sounds_dir: PathBuf::from(DEFAULT_SOUNDS_DIR),
            player: DEFAULT_PLAYER.to_string(),
            mixer: DEFAULT_MIXER.to_string(),
            mixer_control: DEFAULT_MIXER_CONTROL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            label_width: DEFAULT_LABEL_WIDTH,
            initial_volume: DEFAULT_VOLUME,
        }
    }
}

impl Config {
    /// Load `config.toml` from the user's config directory.
    /// A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file_str = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;

        Self::from_toml(&file_str)
            .with_context(|| format!("Malformed config file {}", path.display()))
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let mut config = toml::from_str::<Config>(s)?;
        config.initial_volume = config.initial_volume.min(100);
        config.page_size = config.page_size.max(1);

        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    pub fn sounds_root(&self) -> Result<PathBuf> {
        expand_tilde(&self.sounds_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.label_width, 15);
        assert_eq!(config.initial_volume, 75);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config = Config::from_toml(
            r#"
            sounds_dir = "/srv/samples"
            player = "mpv"
            initial_volume = 140
            "#,
        )
        .unwrap();

        assert_eq!(config.sounds_dir, PathBuf::from("/srv/samples"));
        assert_eq!(config.player, "mpv");
        assert_eq!(config.mixer, "amixer");
        assert_eq!(config.mixer_control, "Master");
        assert_eq!(config.initial_volume, 100);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("volume = 3").is_err());
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "page_size = \"ten\"").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Malformed config file"));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let config = Config::from_toml("page_size = 0").unwrap();
        assert_eq!(config.page_size, 1);
    }
}
