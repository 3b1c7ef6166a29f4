//! Data directory and configuration shared by every command.

use std::path::PathBuf;

use studyhelper_core::Config;

pub struct Context {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let data_dir = data_dir()?;
        let config_path = data_dir.join("config.toml");
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            data_dir,
            config_path,
            config,
        })
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.config.tasks_path(&self.data_dir)
    }

    pub fn decks_path(&self) -> PathBuf {
        self.config.decks_path(&self.data_dir)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `STUDYHELPER_DATA_DIR` wins when set. Otherwise `~/.config/studyhelper`,
/// or `~/.config/studyhelper-dev` with `STUDYHELPER_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = match std::env::var_os("STUDYHELPER_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYHELPER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studyhelper-dev")
            } else {
                base_dir.join("studyhelper")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
