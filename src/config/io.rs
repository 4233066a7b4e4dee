//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::info;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.codeshot/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".codeshot")
    }

    /// Get the global config file path (~/.codeshot/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the config to `path` while holding the config lock
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let lock = ConfigLock::acquire(path)?;
        self.write_locked(&lock)
    }

    /// Load the config at `path`, creating it with defaults if it does not exist yet.
    ///
    /// The existence check and the first write happen under one lock, so two
    /// processes starting together both end up reading the same file.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        let lock = ConfigLock::acquire(path)?;
        if path.exists() {
            return Self::from_file(path);
        }

        let config = Self::with_defaults();
        config.write_locked(&lock)?;
        info!("[codeshot] Created {}", path.display());
        Ok(config)
    }

    /// Serialize into a sibling `.toml.tmp` and rename it over the target
    fn write_locked(&self, lock: &ConfigLock) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Could not serialize settings")?;
        let target = lock.target.as_path();
        let staged = target.with_extension("toml.tmp");

        let mut file = File::create(&staged)
            .with_context(|| format!("Could not stage config at {}", staged.display()))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.sync_all())
            .with_context(|| format!("Could not write {}", staged.display()))?;
        drop(file);

        std::fs::rename(&staged, target)
            .with_context(|| format!("Could not replace {}", target.display()))
    }
}

/// Exclusive lock on a config file, held through a sidecar `.toml.lock`.
///
/// Released when dropped.
struct ConfigLock {
    target: PathBuf,
    _file: File,
}

impl ConfigLock {
    fn acquire(target: &Path) -> Result<Self> {
        if let Some(dir) = target.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create {}", dir.display()))?;
        }

        let lock_path = target.with_extension("toml.lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Could not open {}", lock_path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Could not lock {}", lock_path.display()))?;

        Ok(Self {
            target: target.to_path_buf(),
            _file: file,
        })
    }
}
