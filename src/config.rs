use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where rules come from and where generated documents go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub languages: Vec<String>,
    pub rules_dir: PathBuf,
    pub output_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::compiled_default()
    }
}

impl Config {
    /// The bundled `default_config.toml`, checked by the build script.
    pub fn compiled_default() -> Self {
        // serde(default) would recurse into this function, so parse the
        // table into the raw shape first
        #[derive(Deserialize)]
        struct Raw {
            languages: Vec<String>,
            rules_dir: PathBuf,
            output_dir: PathBuf,
            file_prefix: String,
        }

        match toml::from_str::<Raw>(DEFAULT_CONFIG) {
            Ok(raw) => Self {
                languages: raw.languages,
                rules_dir: raw.rules_dir,
                output_dir: raw.output_dir,
                file_prefix: raw.file_prefix,
            },
            Err(e) => unreachable!("default_config.toml is validated at build time: {e}"),
        }
    }

    /// Load config from a TOML file, or return defaults if it does not exist.
    /// Keys missing from the file keep their default values.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::compiled_default());
        }

        let content = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// `<rules_dir>/<language>.toml`
    pub fn rules_path(&self, language: &str) -> PathBuf {
        self.rules_dir.join(format!("{language}.toml"))
    }

    /// `<output_dir>/<file_prefix><LANGUAGE>.txt`
    pub fn output_path(&self, language: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.txt", self.file_prefix, language.to_uppercase()))
    }
}
