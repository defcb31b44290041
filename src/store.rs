// Store module: reads and writes the watchlist JSON file.
//
// Loading is fail-soft: a missing, unreadable or corrupt file all yield an
// empty watchlist. Saving rewrites the whole file and propagates errors.

use crate::model::Watchlist;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the persisted watchlist.
pub const DATA_FILE_NAME: &str = "watchlist.json";

/// Anything the controller can hand the full watchlist to after a change.
pub trait Persistence {
    fn save(&mut self, watchlist: &Watchlist) -> Result<()>;
}

/// JSON file store at a fixed path.
#[derive(Debug, Clone)]
pub struct WatchlistStore {
    path: PathBuf,
}

impl WatchlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WatchlistStore { path: path.into() }
    }

    /// Store located next to the running executable, falling back to the
    /// current directory if the executable path is unavailable.
    pub fn in_install_dir() -> Self {
        Self::new(install_dir().join(DATA_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the watchlist. Never fails: any problem reading or parsing the
    /// file results in an empty list.
    pub fn load(&self) -> Watchlist {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no watchlist at {}, starting empty", self.path.display());
                return Watchlist::new();
            }
            Err(e) => {
                log::info!("could not read {}: {}; starting empty", self.path.display(), e);
                return Watchlist::new();
            }
        };

        // A file holding just `null` is treated like an empty list.
        match serde_json::from_str::<Option<Watchlist>>(&json) {
            Ok(list) => {
                let list = list.unwrap_or_default();
                log::debug!("loaded {} items from {}", list.len(), self.path.display());
                list
            }
            Err(e) => {
                log::info!("discarding unreadable {}: {}", self.path.display(), e);
                Watchlist::new()
            }
        }
    }

    /// Serialize the whole list as indented JSON, replacing the file.
    pub fn write(&self, watchlist: &Watchlist) -> Result<()> {
        let json = serde_json::to_string_pretty(watchlist).context("Serializing watchlist")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("saved {} items to {}", watchlist.len(), self.path.display());
        Ok(())
    }
}

impl Persistence for WatchlistStore {
    fn save(&mut self, watchlist: &Watchlist) -> Result<()> {
        self.write(watchlist)
    }
}

fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
