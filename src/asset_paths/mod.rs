//! Helpers for normalising and filtering asset paths before they are named.
//!
//! Filtering decides whether a file is bundled at all; normalisation turns discovered
//! filesystem paths into the root-relative, forward-slash form the naming engine expects.
//! Neither is part of the naming engine itself, which assumes both already happened.

mod filters;
mod relative;

pub use filters::{BundleableAssets, should_bundle_asset};
pub use relative::{normalise_asset_path, project_relative_path};
