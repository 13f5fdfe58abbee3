//! Helpers used to decide which assets are handed to the naming engine.

use std::collections::BTreeSet;

/// Trait describing filters applied to candidate asset paths before naming.
pub trait AssetInclusion {
  /// Returns `true` when the asset should be bundled.
  fn should_include(&self, asset_path: &str) -> bool;
}

/// Folder scoping built from the configured source and excluded folders.
#[derive(Debug, Clone, Default)]
pub struct SourceSelection {
  include: Option<BTreeSet<String>>,
  exclude: BTreeSet<String>,
}

impl SourceSelection {
  /// Build a selection from include and exclude folder lists. An empty include list
  /// admits every folder.
  pub fn new(
    include: impl IntoIterator<Item = String>,
    exclude: impl IntoIterator<Item = String>,
  ) -> Self {
    let include = normalise_list(include);
    let exclude = normalise_list(exclude);

    Self {
      include: (!include.is_empty()).then_some(include),
      exclude,
    }
  }

  /// Determine whether an asset path lies inside the selected folders.
  pub fn is_included(&self, asset_path: &str) -> bool {
    let asset_path = asset_path.trim_matches('/');
    if self
      .exclude
      .iter()
      .any(|folder| scope_matches(folder, asset_path))
    {
      return false;
    }

    match &self.include {
      Some(include) => include
        .iter()
        .any(|folder| scope_matches(folder, asset_path)),
      None => true,
    }
  }

  /// Source folders in sorted order; empty when unfiltered.
  pub fn source_folders(&self) -> impl Iterator<Item = &str> {
    self.include.iter().flatten().map(String::as_str)
  }

  /// Returns true when no filtering rules are active.
  #[cfg(test)]
  fn is_unfiltered(&self) -> bool {
    self.include.as_ref().is_none() && self.exclude.is_empty()
  }
}

impl AssetInclusion for SourceSelection {
  fn should_include(&self, asset_path: &str) -> bool {
    self.is_included(asset_path)
  }
}

/// Convert a list of raw folders into a sorted, de-duplicated set.
///
/// Values are trimmed, backslashes become `/`, and empty entries are discarded.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().replace('\\', "/").trim_matches('/').to_string())
    .filter(|value| !value.is_empty())
    .collect()
}

fn scope_matches(folder: &str, candidate: &str) -> bool {
  if candidate == folder {
    return true;
  }

  candidate
    .strip_prefix(folder)
    .is_some_and(|suffix| suffix.starts_with('/'))
}
