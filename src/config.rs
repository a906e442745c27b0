//! This module defines the configuration file format, discovery and loading for mdsplice.
//! A config file lists the splice jobs that `mdsplice run` executes and any extra fence languages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Config file names, in order of precedence
pub const CONFIG_FILES: &[&str] = &[".mdsplice.toml", "mdsplice.toml"];

/// Name used by `mdsplice init`
pub const DEFAULT_CONFIG_FILE: &str = ".mdsplice.toml";

const MAX_DEPTH: usize = 100;

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to access config file at {}: {source}", path.display())]
    Io { source: io::Error, path: PathBuf },

    /// Failed to parse the TOML content
    #[error("Failed to parse config file at {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration file already exists
    #[error("Configuration file already exists at {}", path.display())]
    FileExists { path: PathBuf },

    /// An explicitly requested configuration file is missing
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },
}

/// Complete configuration loaded from `.mdsplice.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base directory for files named in inject markers
    pub code_root: Option<PathBuf>,

    /// Extra extension -> fence language entries
    pub languages: BTreeMap<String, String>,

    /// Code injection jobs
    pub inject: Vec<InjectJob>,

    /// Fragment copy jobs
    pub copy: Vec<CopyJob>,
}

/// Inject fenced code blocks into each of `files`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InjectJob {
    pub files: Vec<PathBuf>,

    /// Overrides the top-level `code_root` for this job
    #[serde(default)]
    pub code_root: Option<PathBuf>,
}

/// Copy the fragments of `source` into each of `targets`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CopyJob {
    pub source: PathBuf,
    pub targets: Vec<PathBuf>,
}

impl Config {
    /// Parse configuration text. Paths are left as written.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    source,
                    path: path.to_path_buf(),
                }
            }
        })?;

        let config = Self::from_toml(&content, path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        log::debug!("Loaded config from {}", path.display());
        Ok(config.resolve_paths(base))
    }

    /// Load the explicit config file if given, otherwise the nearest one found
    /// walking up from `start`. Returns `None` when no config file exists.
    pub fn load_with_discovery(explicit: Option<&Path>, start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match discover_config_upward(start) {
                Some(path) => path,
                None => return Ok(None),
            },
        };
        let config = Self::load(&path)?;
        Ok(Some((path, config)))
    }

    /// Join every relative path onto `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        if let Some(root) = self.code_root.as_mut() {
            resolve(root);
        }
        for job in &mut self.inject {
            job.files.iter_mut().for_each(resolve);
            if let Some(root) = job.code_root.as_mut() {
                resolve(root);
            }
        }
        for job in &mut self.copy {
            resolve(&mut job.source);
            job.targets.iter_mut().for_each(resolve);
        }
        self
    }

    /// Code root for `job`: the job's own, then the global one, then `fallback`.
    pub fn code_root_for<'a>(&'a self, job: &'a InjectJob, fallback: &'a Path) -> &'a Path {
        job.code_root
            .as_deref()
            .or(self.code_root.as_deref())
            .unwrap_or(fallback)
    }

    /// True when there is nothing for `mdsplice run` to do
    pub fn has_no_jobs(&self) -> bool {
        self.inject.is_empty() && self.copy.is_empty()
    }
}

/// Search `start` and its ancestors for a config file, stopping at the
/// directory that holds `.git`.
pub fn discover_config_upward(start: &Path) -> Option<PathBuf> {
    let mut current_dir = start.to_path_buf();

    for _ in 0..MAX_DEPTH {
        log::debug!("Searching for config in: {}", current_dir.display());

        for config_name in CONFIG_FILES {
            let config_path = current_dir.join(config_name);
            if config_path.is_file() {
                log::debug!("Found config file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if current_dir.join(".git").exists() {
            log::debug!("Stopping at .git directory");
            return None;
        }

        if !current_dir.pop() {
            return None;
        }
    }

    log::debug!("Maximum traversal depth reached");
    None
}

/// Create a default configuration file at the specified path
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.to_path_buf(),
        });
    }

    let default_config = r#"# mdsplice configuration file
#
# Paths are relative to the directory containing this file.

# Base directory for files named in `<!-- begin FILE -->` markers
# code_root = "."

# Extra file extension -> fence language entries
# (built in: toml = "toml", rs = "rust", hcl = "hcl")
[languages]
# py = "python"

# Inject example source files as fenced code blocks
# [[inject]]
# files = ["README.md", "docs/getting-started.md"]
# code_root = "examples/hello-world"

# Copy pre-rendered HTML fragments into templates
# [[copy]]
# source = "dist/index.html"
# targets = ["templates/index.html"]
"#;

    fs::write(path, default_config).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })
}
