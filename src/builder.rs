//! Bundle planning orchestrator: enumerates sources, filters assets, names them and renders
//! the resulting plan.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::manifest::{collect_asset_paths, generate_bundle_plan};
use crate::models::{AssetAssignment, BundlePlan};
use crate::naming::NamingEngine;
use crate::selection::{AssetInclusion, SourceSelection};

/// Number of assignments shown by [`BundlePlan::preview`] when no limit is given.
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

/// High-level helper turning a project on disk into a [`BundlePlan`].
pub struct BundlePlanner<'a> {
  project_root: &'a Path,
  config: &'a ProjectConfig,
  engine: NamingEngine<'a>,
}

impl<'a> BundlePlanner<'a> {
  /// Create a planner naming assets with the project's own naming configuration.
  pub fn new(project_root: &'a Path, config: &'a ProjectConfig) -> Self {
    Self {
      project_root,
      config,
      engine: NamingEngine::new(&config.naming),
    }
  }

  /// Replace the naming engine, e.g. with [`NamingEngine::unconfigured`].
  pub fn with_engine(mut self, engine: NamingEngine<'a>) -> Self {
    self.engine = engine;
    self
  }

  /// Enumerate the configured source folders and name every asset accepted by `filter`
  /// and by the folder selection.
  pub fn plan<F: AssetInclusion + ?Sized>(&self, filter: &F) -> BundlePlan {
    let selection = self.config.selection();
    let mut folders: Vec<&str> = selection.source_folders().collect();
    if folders.is_empty() {
      folders.push("");
    }

    let paths = folders
      .into_iter()
      .flat_map(|folder| collect_asset_paths(self.project_root, folder));
    let combined = Combined {
      selection: &selection,
      filter,
    };

    let plan = generate_bundle_plan(paths, &self.engine, &combined, &self.config.output_path);
    tracing::info!(
      assets = plan.asset_count(),
      bundles = plan.bundles.len(),
      "bundle plan ready"
    );
    plan
  }
}

struct Combined<'f, F: ?Sized> {
  selection: &'f SourceSelection,
  filter: &'f F,
}

impl<F: AssetInclusion + ?Sized> AssetInclusion for Combined<'_, F> {
  fn should_include(&self, asset_path: &str) -> bool {
    self.selection.should_include(asset_path) && self.filter.should_include(asset_path)
  }
}

/// Leading slice of a plan's assignments for quick inspection.
#[derive(Debug)]
pub struct PlanPreview<'p> {
  /// Assignments shown.
  pub shown: &'p [AssetAssignment],
  /// Number of assignments left out.
  pub remaining: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanSummary<'p> {
  output_path: &'p str,
  bundles: Vec<BundleSummary<'p>>,
  faults: Vec<&'p AssetAssignment>,
}

#[derive(Serialize)]
struct BundleSummary<'p> {
  name: &'p str,
  assets: &'p [String],
}

impl BundlePlan {
  /// First `limit` assignments in enumeration order.
  pub fn preview(&self, limit: usize) -> PlanPreview<'_> {
    let shown = &self.assignments[..limit.min(self.assignments.len())];
    PlanPreview {
      shown,
      remaining: self.assignments.len() - shown.len(),
    }
  }

  /// Plain-text build report listing every bundle and its assets.
  pub fn render_report(&self, target: &str) -> String {
    let mut report = String::new();
    report.push_str("AssetBundle build report\n");
    report.push_str(&format!("Target: {target}\n"));
    report.push_str(&format!("Output: {}\n", self.output_path));
    report.push_str(&format!(
      "Bundles: {}, assets: {}\n",
      self.bundles.len(),
      self.asset_count()
    ));
    report.push_str("=================================\n");

    for (bundle, assets) in &self.bundles {
      report.push_str(&format!("\n[{bundle}]\n"));
      for asset in assets {
        report.push_str(&format!("  - {asset}\n"));
      }
    }

    let faulted: BTreeSet<&str> = self.faults().map(|a| a.path.as_str()).collect();
    if !faulted.is_empty() {
      report.push_str("\nAssets with naming faults:\n");
      for path in faulted {
        report.push_str(&format!("  ! {path}\n"));
      }
    }

    report
  }

  /// Pretty JSON summary of the plan for tooling.
  pub fn summary_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PlanSummary {
      output_path: &self.output_path,
      bundles: self
        .bundles
        .iter()
        .map(|(name, assets)| BundleSummary { name, assets })
        .collect(),
      faults: self.faults().collect(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  use crate::asset_paths::BundleableAssets;
  use crate::models::{NamingRule, PatternKind};
  use tempfile::tempdir;

  fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"asset").unwrap();
  }

  fn project() -> ProjectConfig {
    let mut config = ProjectConfig {
      source_folders: vec!["Assets/Art".into(), "Assets/Art/UI".into()],
      exclude_folders: vec!["Assets/Art/Drafts".into()],
      ..ProjectConfig::default()
    };
    config.naming.rules = vec![NamingRule::new("UI", PatternKind::TwoLevelFolders, 10)];
    config
  }

  #[test]
  fn plans_filtered_assets_once() -> std::io::Result<()> {
    let temp = tempdir()?;
    let root = temp.path();
    write(root, "Assets/Art/UI/Icons/play.png");
    write(root, "Assets/Art/UI/Icons/play.png.meta");
    write(root, "Assets/Art/Props/crate.prefab");
    write(root, "Assets/Art/Drafts/sketch.psd");
    write(root, "Assets/Art/Scripts/Spin.cs");

    let config = project();
    let plan = BundlePlanner::new(root, &config).plan(&BundleableAssets);

    assert_eq!(plan.asset_count(), 2);
    assert_eq!(plan.bundles["icons/play"], vec![
      "Assets/Art/UI/Icons/play.png".to_string()
    ]);
    assert_eq!(plan.bundles["props"], vec![
      "Assets/Art/Props/crate.prefab".to_string()
    ]);
    Ok(())
  }

  #[test]
  fn unconfigured_engine_uses_folder_names() -> std::io::Result<()> {
    let temp = tempdir()?;
    let root = temp.path();
    write(root, "Assets/Art/UI/Icons/play.png");

    let config = project();
    let plan = BundlePlanner::new(root, &config)
      .with_engine(NamingEngine::unconfigured())
      .plan(&BundleableAssets);

    assert_eq!(plan.assignments[0].bundle, "icons");
    assert_eq!(plan.faults().count(), 1);
    Ok(())
  }

  #[test]
  fn report_lists_bundles_and_assets() {
    let mut plan = BundlePlan {
      output_path: "AssetBundles".into(),
      ..BundlePlan::default()
    };
    plan
      .bundles
      .insert("icons".into(), vec!["Assets/UI/Icons/play.png".into()]);
    plan.assignments.push(AssetAssignment {
      path: "Assets/UI/Icons/play.png".into(),
      bundle: "icons".into(),
      fault: None,
    });

    let report = plan.render_report("StandaloneWindows");
    assert!(report.contains("Target: StandaloneWindows"));
    assert!(report.contains("Output: AssetBundles"));
    assert!(report.contains("[icons]\n  - Assets/UI/Icons/play.png"));
    assert!(!report.contains("naming faults"));
  }

  #[test]
  fn summary_json_includes_faults() {
    let mut plan = BundlePlan::default();
    plan.assignments.push(AssetAssignment {
      path: "Assets".into(),
      bundle: "invalid_root_path".into(),
      fault: Some(crate::models::NamingFault::InvalidRootPath),
    });
    plan
      .bundles
      .insert("invalid_root_path".into(), vec!["Assets".into()]);

    let json: serde_json::Value =
      serde_json::from_str(&plan.summary_json().unwrap()).unwrap();
    assert_eq!(json["bundles"][0]["name"], "invalid_root_path");
    assert_eq!(json["faults"][0]["fault"], "invalid_root_path");
  }

  #[test]
  fn preview_reports_remaining_count() {
    let mut plan = BundlePlan::default();
    for index in 0..3 {
      plan.assignments.push(AssetAssignment {
        path: format!("Assets/a/{index}.png"),
        bundle: "a".into(),
        fault: None,
      });
    }

    let preview = plan.preview(2);
    assert_eq!(preview.shown.len(), 2);
    assert_eq!(preview.remaining, 1);
    assert_eq!(plan.preview(DEFAULT_PREVIEW_LIMIT).remaining, 0);
  }
}
