use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::egui_app::state::ThemeMode;

/// Longest delay accepted for either simulated form timer.
pub(super) const MAX_TIMER_MS: u64 = 60_000;

fn default_commit_delay_ms() -> u64 {
    1_000
}

fn default_success_reset_ms() -> u64 {
    3_000
}

/// Settings read from `config.toml`.
///
/// Config keys (TOML): `theme`, `roster_path`, `timings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Theme applied at launch.
    #[serde(default)]
    pub theme: ThemeMode,
    /// Optional JSON roster replacing the bundled interns.
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
    #[serde(default)]
    pub timings: FormTimings,
}

impl AppSettings {
    pub(crate) fn normalized(self) -> Self {
        Self {
            timings: self.timings.normalized(),
            ..self
        }
    }
}

/// Delays for the add-intern form's simulated commit and success banner.
///
/// Config keys: `commit_delay_ms`, `success_reset_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTimings {
    /// Latency of the simulated save.
    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,
    /// How long the success banner stays before the form resets.
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: u64,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            commit_delay_ms: default_commit_delay_ms(),
            success_reset_ms: default_success_reset_ms(),
        }
    }
}

impl FormTimings {
    /// Simulated latency of saving a new intern.
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    /// How long the success banner stays before the form resets.
    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            commit_delay_ms: self.commit_delay_ms.min(MAX_TIMER_MS),
            success_reset_ms: self.success_reset_ms.min(MAX_TIMER_MS),
        }
    }
}
