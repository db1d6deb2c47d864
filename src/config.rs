//! Game configuration: defaults, optional JSON file, command-line overrides.
//!
//! Precedence is CLI flag > config file > built-in default.
//!
//! ```json
//! { "cols": 10, "rows": 20, "speed": "NORMAL", "seed": 42 }
//! ```

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use thiserror::Error;

use crate::core::{Grid, GridError};
use crate::types::{Speed, DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("unknown speed {0:?}, expected SLOW, NORMAL or FAST")]
    UnknownSpeed(String),
}

/// Settings for a session. Missing fields in a file fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    /// One of `SLOW`, `NORMAL`, `FAST`.
    pub speed: String,
    /// Piece sequence seed; `None` seeds from the system clock.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            speed: Speed::default().name().to_string(),
            seed: None,
        }
    }
}

/// Command-line flags that override the file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Grid width in cells.
    #[arg(long)]
    pub cols: Option<u16>,
    /// Grid height in cells.
    #[arg(long)]
    pub rows: Option<u16>,
    /// Starting gravity speed: SLOW, NORMAL or FAST.
    #[arg(long)]
    pub speed: Option<String>,
    /// Seed for the piece sequence, for replaying a run.
    #[arg(short, long)]
    pub seed: Option<u32>,
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Load `path` if given, then apply the overrides and validate.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(cols) = overrides.cols {
            self.cols = cols;
        }
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(speed) = overrides.speed {
            self.speed = speed;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.speed()?;
        self.grid()?;
        Ok(())
    }

    /// Configured speed. Unlike the in-game command, an unknown name here is an error.
    pub fn speed(&self) -> Result<Speed, ConfigError> {
        Speed::from_name(&self.speed).ok_or_else(|| ConfigError::UnknownSpeed(self.speed.clone()))
    }

    /// A fresh empty grid of the configured size.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.cols, self.rows)?)
    }

    /// The configured seed, or one derived from the current time.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
