use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generic "play something" phrases used when none are configured
pub const DEFAULT_MUSIC_COMMANDS: &[&str] = &[
    "来一首歌",
    "唱一首歌",
    "播放音乐",
    "来点音乐",
    "背景音乐",
    "放首歌",
    "播放歌曲",
    "来点背景音乐",
    "我想听歌",
    "我要听歌",
    "放点音乐",
    "play some music",
    "play music",
    "play a song",
    "sing a song",
    "background music",
    "i want to hear a song",
];

/// Music catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Root directory holding the playable files
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,
    /// Phrases that mean "play anything"
    #[serde(default = "default_music_commands")]
    pub music_commands: Vec<String>,
    /// Name of the cached index file inside `music_dir`
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Lower-case extensions picked up by a directory scan
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_music_dir() -> PathBuf {
    PathBuf::from("./music")
}

fn default_music_commands() -> Vec<String> {
    DEFAULT_MUSIC_COMMANDS.iter().map(|s| s.to_string()).collect()
}

fn default_index_file() -> String {
    "music.txt".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["mp3".to_string(), "wav".to_string()]
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            music_dir: default_music_dir(),
            music_commands: default_music_commands(),
            index_file: default_index_file(),
            extensions: default_extensions(),
        }
    }
}

impl MusicConfig {
    /// Config rooted at `music_dir` with everything else defaulted
    pub fn with_dir(music_dir: impl Into<PathBuf>) -> Self {
        Self {
            music_dir: music_dir.into(),
            ..Self::default()
        }
    }

    /// `music_dir` made absolute against the current directory
    pub fn absolute_music_dir(&self) -> PathBuf {
        if self.music_dir.is_absolute() {
            return self.music_dir.clone();
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(&self.music_dir))
            .unwrap_or_else(|_| self.music_dir.clone())
    }

    /// Full path of the index file
    pub fn index_path(&self) -> PathBuf {
        self.absolute_music_dir().join(&self.index_file)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absent section means built-in music defaults
    #[serde(default)]
    pub music: Option<MusicConfig>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            music: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`; a corrupt file is moved aside and defaults are used
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Music section, falling back to defaults
    pub fn music(&self) -> MusicConfig {
        self.music.clone().unwrap_or_default()
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tunefinder")
        .join("config.json")
}
