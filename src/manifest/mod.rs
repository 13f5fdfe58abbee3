//! Asset enumeration and bundle plan generation, split into focused submodules for easier
//! testing.

mod generation;
mod scanning;

pub use generation::generate_bundle_plan;
pub use scanning::collect_asset_paths;
