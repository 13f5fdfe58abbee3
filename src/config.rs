//! Project configuration loader describing source folders and naming rules.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::NamingConfig;
use crate::selection::SourceSelection;

/// Configuration file names searched for, in order, by [`ProjectConfig::discover`].
pub const DEFAULT_CONFIG_FILES: [&str; 3] =
  ["bundle_namer.json", "bundle_namer.yaml", "bundle_namer.yml"];

/// Name of the text report written next to the bundles.
pub const BUILD_REPORT_FILE: &str = "build_report.txt";

/// Discoverable project configuration: where assets live, where bundles go, how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
  /// Folders, relative to the project root, scanned for assets.
  pub source_folders: Vec<String>,
  /// Folders excluded from scanning even when below a source folder.
  pub exclude_folders: Vec<String>,
  /// Directory receiving the packaged bundles and the build report.
  pub output_path: String,
  /// Naming rules handed to the engine.
  pub naming: NamingConfig,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      source_folders: vec!["Assets/Art".into()],
      exclude_folders: Vec::new(),
      output_path: "AssetBundles".into(),
      naming: NamingConfig::default(),
    }
  }
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON configuration file.
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML configuration file.
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
  /// File extension is neither JSON nor YAML.
  UnsupportedFormat(PathBuf),
}

impl ProjectConfig {
  /// Look for a configuration file in `project_root`.
  ///
  /// Returns `Ok(None)` when no candidate exists. The first existing candidate must load.
  pub fn discover(project_root: &Path) -> Result<Option<Self>, ConfigError> {
    let Some(candidate) = DEFAULT_CONFIG_FILES
      .iter()
      .map(|name| project_root.join(name))
      .find(|path| path.is_file())
    else {
      return Ok(None);
    };

    tracing::debug!("loading configuration from {}", candidate.display());
    Self::load_from_path(&candidate).map(Some)
  }

  /// Read configuration from a specific JSON or YAML file.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
      .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    format.parse(path, &contents)
  }

  /// Serialise the configuration as pretty JSON.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  /// Configuration with the starter naming rules.
  pub fn starter() -> Self {
    Self {
      naming: NamingConfig::starter(),
      ..Self::default()
    }
  }

  /// Folder scoping derived from `source_folders` and `exclude_folders`.
  pub fn selection(&self) -> SourceSelection {
    SourceSelection::new(
      self.source_folders.iter().cloned(),
      self.exclude_folders.iter().cloned(),
    )
  }

  /// Output directory resolved against the project root.
  pub fn output_dir(&self, project_root: &Path) -> PathBuf {
    project_root.join(&self.output_path)
  }

  /// Default location of the text build report.
  pub fn report_path(&self, project_root: &Path) -> PathBuf {
    self.output_dir(project_root).join(BUILD_REPORT_FILE)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
  Json,
  Yaml,
}

impl ConfigFormat {
  fn from_path(path: &Path) -> Option<Self> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
      "json" => Some(Self::Json),
      "yaml" | "yml" => Some(Self::Yaml),
      _ => None,
    }
  }

  fn parse(self, path: &Path, contents: &str) -> Result<ProjectConfig, ConfigError> {
    match self {
      Self::Json => serde_json::from_str(contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
      }),
      Self::Yaml => serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
      }),
    }
  }
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Json { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::Yaml { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::UnsupportedFormat(path) => {
        write!(f, "unsupported configuration format: {}", path.display())
      }
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Json { source, .. } => Some(source),
      Self::Yaml { source, .. } => Some(source),
      Self::UnsupportedFormat(_) => None,
    }
  }
}
