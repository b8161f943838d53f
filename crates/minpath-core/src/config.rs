//! Configuration for minpath
//!
//! Read from the file given with `--config`, or from `minpath.toml` in the
//! working directory when present. Every field has a default, so an empty
//! or missing file yields [`MinPathConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MinPathError, Result};
use crate::graph::FrontierStrategy;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "minpath.toml";

/// Largest number of decimals accepted for human cost output
pub const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinPathConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub edges: EdgeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Frontier implementation used by the engine
    #[serde(default)]
    pub frontier: FrontierStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeConfig {
    /// Accept edges of length 0 from scripts and the command line
    #[serde(default)]
    pub allow_zero_weight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Fixed number of decimals for costs in human output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl MinPathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MinPathConfig =
            toml::from_str(&content).map_err(|e| MinPathError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; otherwise `minpath.toml` under `dir` is
    /// used when present and defaults apply when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "load_config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(precision) = self.output.precision {
            if precision > MAX_PRECISION {
                return Err(MinPathError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: format!(
                        "output.precision must be at most {MAX_PRECISION} (got {precision})"
                    ),
                });
            }
        }
        Ok(())
    }

    /// Reject weights this configuration does not allow, beyond what the
    /// graph itself rejects
    pub fn check_weight(&self, weight: f64) -> Result<()> {
        if weight == 0.0 && !self.edges.allow_zero_weight {
            crate::bail_weight!(weight, "zero-length edges are disabled (edges.allow_zero_weight)");
        }
        Ok(())
    }
}
