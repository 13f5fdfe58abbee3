//! Data structures describing naming rules and the results of resolving asset paths.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Token marking the root of the content tree when none is configured.
pub const DEFAULT_ROOT_TOKEN: &str = "Assets";

/// Separator used inside generated names when the configured one is empty.
pub const DEFAULT_SEPARATOR: char = '/';

/// Strategy used to derive a bundle name from the segments of an asset path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PatternKind {
  /// Name of the folder directly containing the asset.
  #[default]
  ParentFolder,
  /// Containing folder plus the asset's file stem.
  TwoLevelFolders,
  /// Every folder below the root plus the file stem.
  FullPath,
  /// Placeholder template supplied by the rule.
  Custom,
}

/// Keyword-triggered naming strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingRule {
  /// Case-insensitive substring that must occur in the asset path. Empty never matches.
  pub path_keyword: String,
  /// Pattern applied when the rule is selected.
  pub pattern: PatternKind,
  /// Template used when `pattern` is [`PatternKind::Custom`], e.g. `ui/{0}/{1}`.
  pub custom_pattern: String,
  /// Higher priorities are tried first; ties keep list order.
  pub priority: i32,
}

impl NamingRule {
  /// Convenience constructor for a non-custom rule.
  pub fn new(path_keyword: impl Into<String>, pattern: PatternKind, priority: i32) -> Self {
    Self {
      path_keyword: path_keyword.into(),
      pattern,
      custom_pattern: String::new(),
      priority,
    }
  }

  /// Constructor for a [`PatternKind::Custom`] rule.
  pub fn custom(
    path_keyword: impl Into<String>,
    custom_pattern: impl Into<String>,
    priority: i32,
  ) -> Self {
    Self {
      path_keyword: path_keyword.into(),
      pattern: PatternKind::Custom,
      custom_pattern: custom_pattern.into(),
      priority,
    }
  }
}

/// Fallback strategy applied when no rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultRule {
  /// Pattern applied to unmatched assets.
  pub pattern: PatternKind,
  /// Template used when `pattern` is [`PatternKind::Custom`].
  pub custom_pattern: String,
}

/// Immutable naming configuration handed to the engine for each resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamingConfig {
  /// Conditional rules, in authoring order.
  pub rules: Vec<NamingRule>,
  /// Strategy used when none of `rules` match.
  pub default_rule: DefaultRule,
  /// Join two-level names with `_` instead of the separator.
  pub use_flat_structure: bool,
  /// Number of positional placeholders honoured in custom templates.
  pub max_folder_depth: usize,
  /// Delimiter placed between path components of generated names. Only the first
  /// character is used.
  pub separator: String,
  /// Leading path component that marks the content tree root.
  pub root_token: String,
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      rules: Vec::new(),
      default_rule: DefaultRule::default(),
      use_flat_structure: false,
      max_folder_depth: 3,
      separator: DEFAULT_SEPARATOR.to_string(),
      root_token: DEFAULT_ROOT_TOKEN.into(),
    }
  }
}

impl NamingConfig {
  /// Starter rule set offered for freshly created configurations.
  pub fn starter() -> Self {
    Self {
      rules: vec![
        NamingRule::new("UI", PatternKind::TwoLevelFolders, 10),
        NamingRule::new("Character", PatternKind::TwoLevelFolders, 10),
        NamingRule::new("Effect", PatternKind::TwoLevelFolders, 10),
      ],
      ..Self::default()
    }
  }

  /// First character of the configured separator, or `/` when unset.
  pub fn separator_char(&self) -> char {
    self.separator.chars().next().unwrap_or(DEFAULT_SEPARATOR)
  }

  /// Configured root token, or `Assets` when unset.
  pub fn root_token(&self) -> &str {
    let token = self.root_token.trim_matches('/');
    if token.is_empty() {
      DEFAULT_ROOT_TOKEN
    } else {
      token
    }
  }
}

/// Failure kinds recovered inside the engine and reported alongside the sentinel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingFault {
  /// Empty or unparsable path.
  InvalidPath,
  /// Path resolves to the content root itself.
  InvalidRootPath,
  /// A folder or file name component could not be derived.
  UnknownSegment,
  /// Custom template could not be expanded.
  TemplateExpansionFailure,
  /// No configuration was supplied.
  ConfigAbsent,
}

impl NamingFault {
  /// Stable name returned in place of a generated one.
  pub fn sentinel(self) -> &'static str {
    match self {
      Self::InvalidPath => "invalid_path",
      Self::InvalidRootPath => "invalid_root_path",
      Self::UnknownSegment => "unknown",
      Self::TemplateExpansionFailure => "custom_error",
      Self::ConfigAbsent => "default",
    }
  }
}

impl fmt::Display for NamingFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let message = match self {
      Self::InvalidPath => "path is empty or cannot be parsed",
      Self::InvalidRootPath => "path points at the content root",
      Self::UnknownSegment => "path has no usable folder or file name",
      Self::TemplateExpansionFailure => "custom pattern could not be expanded",
      Self::ConfigAbsent => "no naming configuration supplied",
    };
    f.write_str(message)
  }
}

/// Which branch of the engine produced a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ResolutionSource {
  /// A configured rule matched.
  Rule {
    /// Position of the rule in the caller's `rules` list.
    index: usize,
    /// Keyword that matched.
    keyword: String,
  },
  /// No rule matched and the default rule was applied.
  DefaultRule,
  /// The path was empty or root-level and the root pre-check decided the name.
  RootCheck,
  /// No configuration was supplied.
  Unconfigured,
}

/// Bundle name together with the diagnostic describing how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
  /// Final, normalised bundle name. Never empty.
  pub name: String,
  /// Branch that produced the name.
  pub source: ResolutionSource,
  /// Recovered failure, when the name is a sentinel or a degraded fallback.
  pub fault: Option<NamingFault>,
}

/// Bundle assigned to a single asset during planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAssignment {
  /// Project-relative asset path.
  pub path: String,
  /// Bundle the asset is packaged into.
  pub bundle: String,
  /// Recovered naming fault, if the bundle is a sentinel or degraded name.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fault: Option<NamingFault>,
}

/// Complete naming plan for a project, ready to hand to a packager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundlePlan {
  /// Directory the packager writes bundles to.
  pub output_path: String,
  /// Assets grouped by bundle name, both sorted.
  pub bundles: BTreeMap<String, Vec<String>>,
  /// Assignments in enumeration order.
  pub assignments: Vec<AssetAssignment>,
}

impl BundlePlan {
  /// Assignments whose names came from a recovered fault.
  pub fn faults(&self) -> impl Iterator<Item = &AssetAssignment> {
    self
      .assignments
      .iter()
      .filter(|assignment| assignment.fault.is_some())
  }

  /// Number of assets in the plan.
  pub fn asset_count(&self) -> usize {
    self.assignments.len()
  }
}
