//! Build the bundle plan by naming every enumerated asset.

use std::collections::BTreeSet;

use crate::models::{AssetAssignment, BundlePlan};
use crate::naming::NamingEngine;
use crate::selection::AssetInclusion;

/// Name every asset in `paths` accepted by `filter` and group the results by bundle.
///
/// Paths seen more than once (overlapping source folders) are only assigned once. Assets
/// that resolve to a sentinel are still assigned, but logged so a misconfigured root token
/// or rule set is visible to the operator.
pub fn generate_bundle_plan<F: AssetInclusion + ?Sized>(
  paths: impl IntoIterator<Item = String>,
  engine: &NamingEngine<'_>,
  filter: &F,
  output_path: &str,
) -> BundlePlan {
  let mut plan = BundlePlan {
    output_path: output_path.to_string(),
    ..BundlePlan::default()
  };
  let mut seen = BTreeSet::new();

  for path in paths {
    if !filter.should_include(&path) || !seen.insert(path.clone()) {
      continue;
    }

    let resolution = engine.resolve_detailed(&path);
    match resolution.fault {
      Some(fault) => tracing::warn!(path = %path, bundle = %resolution.name, "{fault}"),
      None => tracing::debug!(path = %path, bundle = %resolution.name, "assigned bundle"),
    }

    plan
      .bundles
      .entry(resolution.name.clone())
      .or_default()
      .push(path.clone());
    plan.assignments.push(AssetAssignment {
      path,
      bundle: resolution.name,
      fault: resolution.fault,
    });
  }

  for assets in plan.bundles.values_mut() {
    assets.sort();
  }

  plan
}
