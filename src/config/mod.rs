//! Read-only application settings stored as TOML in the app directory.

mod errors;
mod load;
mod types;


use crate::app_dirs;

pub use errors::ConfigError;
pub use load::{config_path, load_or_default, load_roster};
pub use types::{AppSettings, FormTimings};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
