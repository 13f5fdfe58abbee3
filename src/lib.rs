#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod naming;
pub mod selection;

pub use builder::{BundlePlanner, PlanPreview};
pub use config::{ConfigError, ProjectConfig};
pub use models::{
  AssetAssignment, BundlePlan, DefaultRule, NamingConfig, NamingFault, NamingRule, PatternKind,
  Resolution, ResolutionSource,
};
pub use naming::{NamingEngine, resolve_bundle_name};
pub use selection::{AssetInclusion, SourceSelection};
