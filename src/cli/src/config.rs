use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{WrapErr, eyre};
use cube_core::scramble::Scrambler;
use log::{debug, info};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "cube.toml";

/// Everything `cube.toml` can set. Sections and keys left out take their
/// defaults, and so does a missing file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub solver: SolverConfig,
    pub scramble: ScrambleConfig,
    pub capture: CaptureConfig,
}

/// The external solver program. It gets the facelet string on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            program: PathBuf::from("kociemba"),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig {
            min_len: Scrambler::DEFAULT_MIN_LEN,
            max_len: Scrambler::DEFAULT_MAX_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    /// Samples per face for the majority vote.
    pub samples: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig { samples: 1 }
    }
}

/// `<config dir>/cube/cube.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("cube");
    path.push(CONFIG_FILE_NAME);
    Some(path)
}

impl CliConfig {
    /// Load the configuration from `path`, or from [`default_path`] when no
    /// path is given. A file that doesn't exist means the defaults; one that
    /// exists but doesn't parse is an error.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CliConfig> {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_path) else {
            debug!("No config directory on this platform, using defaults");
            return Ok(CliConfig::default());
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, using defaults", path.display());
                return Ok(CliConfig::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", path.display()));
            }
        };

        let config = CliConfig::parse(&text)
            .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<CliConfig> {
        let config = toml::from_str::<CliConfig>(text)?;

        if config.capture.samples == 0 {
            return Err(eyre!("`capture.samples` must be at least 1"));
        }

        Ok(config)
    }

    pub fn scrambler(&self) -> Scrambler {
        Scrambler::new().lengths(self.scramble.min_len, self.scramble.max_len)
    }
}
