//! Where the portal keeps its files on disk.
//!
//! Everything sits in one `.intern_portal` folder beneath a base directory.
//! The base is, in order of preference: a test-scoped override, the
//! `INTERN_PORTAL_CONFIG_HOME` variable, then the platform config root.

use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use directories::BaseDirs;
use thiserror::Error;

/// Folder created under the base directory for all portal files.
pub const APP_DIR_NAME: &str = ".intern_portal";
/// Environment variable that replaces the platform config root.
pub const CONFIG_HOME_ENV: &str = "INTERN_PORTAL_CONFIG_HOME";

const LOGS_SUBDIR: &str = "logs";

static SCOPED_BASE: LazyLock<Mutex<Option<PathBuf>>> = LazyLock::new(|| Mutex::new(None));

/// Failure to locate or create a portal directory.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// Neither an override nor a platform config root is available.
    #[error("Cannot determine a config directory on this system")]
    NoBaseDir,
    /// The directory could not be created.
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `.intern_portal` folder, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = resolve_base().ok_or(AppDirError::NoBaseDir)?;
    create_under(&base, APP_DIR_NAME)
}

/// The `logs` folder inside [`app_root_dir`], created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    create_under(&app_root_dir()?, LOGS_SUBDIR)
}

fn create_under(parent: &Path, name: &str) -> Result<PathBuf, AppDirError> {
    let dir = parent.join(name);
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Ok(dir),
        Err(source) => Err(AppDirError::CreateDir { path: dir, source }),
    }
}

fn resolve_base() -> Option<PathBuf> {
    let scoped = SCOPED_BASE
        .lock()
        .map(|slot| slot.clone())
        .unwrap_or_else(|poisoned| poisoned.into_inner().clone());
    scoped
        .or_else(|| std::env::var_os(CONFIG_HOME_ENV).map(PathBuf::from))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}

#[cfg(test)]
static SCOPE_SERIAL: Mutex<()> = Mutex::new(());

/// Points [`app_root_dir`] at a temporary base until dropped.
///
/// Holders are serialized so parallel tests never see each other's base.
#[cfg(test)]
pub(crate) struct ScopedConfigHome {
    _serial: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ScopedConfigHome {
    pub(crate) fn install(base: PathBuf) -> Self {
        let serial = SCOPE_SERIAL.lock().unwrap_or_else(|p| p.into_inner());
        Self::replace(Some(base));
        Self { _serial: serial }
    }

    fn replace(base: Option<PathBuf>) {
        *SCOPED_BASE.lock().unwrap_or_else(|p| p.into_inner()) = base;
    }
}

#[cfg(test)]
impl Drop for ScopedConfigHome {
    fn drop(&mut self) {
        Self::replace(None);
    }
}
