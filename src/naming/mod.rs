//! Rule-driven bundle naming for asset paths.
//!
//! The engine is a pure function of `(path, config)`: it never touches the filesystem,
//! keeps no state between calls and never fails. Invalid input maps to stable sentinel
//! names (see [`NamingFault::sentinel`]) so build tooling can cache and diff the output.
//!
//! Resolution runs strictly in one direction:
//!
//! 1. [`PathSegments::parse`] splits the path below the root token.
//! 2. The root pre-check handles blank, root-only and root-level file paths.
//! 3. [`match_rule`] picks the highest-priority rule whose keyword occurs in the path.
//! 4. [`apply_pattern`] (or the default rule) computes the raw name.
//! 5. [`normalize_name`] produces the final lower-case name, with `/` and `\` rewritten to
//!    the configured separator.

mod matcher;
mod normalize;
mod patterns;
mod segments;
mod template;

pub use matcher::match_rule;
pub use normalize::{FALLBACK_NAME, normalize_name};
pub use patterns::{ROOT_BUNDLE_PREFIX, apply_default, apply_pattern, root_outcome};
pub use segments::{PathSegments, file_stem};
pub use template::expand_template;

use crate::models::{DEFAULT_SEPARATOR, NamingConfig, NamingFault, Resolution, ResolutionSource};

/// Facade resolving bundle names against an optional, borrowed configuration.
///
/// The engine only reads the configuration, so one engine (or many engines over the same
/// config) can be shared across threads while the config is not being mutated.
#[derive(Debug, Clone, Copy)]
pub struct NamingEngine<'c> {
    config: Option<&'c NamingConfig>,
}

impl<'c> NamingEngine<'c> {
    /// Engine resolving against `config`.
    pub fn new(config: &'c NamingConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Engine used when no configuration exists; names fall back to the containing folder.
    pub fn unconfigured() -> Self {
        Self { config: None }
    }

    /// Configuration the engine resolves against, if any.
    pub fn config(&self) -> Option<&'c NamingConfig> {
        self.config
    }

    /// Bundle name for `path`. Never empty.
    pub fn resolve(&self, path: &str) -> String {
        self.resolve_detailed(path).name
    }

    /// Bundle name for `path` together with the branch and fault that produced it.
    pub fn resolve_detailed(&self, path: &str) -> Resolution {
        let Some(config) = self.config else {
            return resolve_unconfigured(path);
        };

        let separator = config.separator_char();
        let segments = PathSegments::parse(path, config.root_token());
        if let Some(outcome) = root_outcome(&segments) {
            return finish(path, outcome, ResolutionSource::RootCheck, separator);
        }

        match match_rule(path, &config.rules) {
            Some((index, rule)) => finish(
                path,
                apply_pattern(&segments, rule.pattern, &rule.custom_pattern, config),
                ResolutionSource::Rule {
                    index,
                    keyword: rule.path_keyword.clone(),
                },
                separator,
            ),
            None => finish(
                path,
                apply_default(&segments, config),
                ResolutionSource::DefaultRule,
                separator,
            ),
        }
    }
}

/// Resolve `path` against an optional configuration.
pub fn resolve_bundle_name(path: &str, config: Option<&NamingConfig>) -> String {
    match config {
        Some(config) => NamingEngine::new(config).resolve(path),
        None => NamingEngine::unconfigured().resolve(path),
    }
}

fn finish(
    path: &str,
    outcome: Result<String, NamingFault>,
    source: ResolutionSource,
    separator: char,
) -> Resolution {
    match outcome {
        Ok(name) => Resolution {
            name: normalize_name(&name, separator),
            source,
            fault: None,
        },
        Err(fault) => {
            tracing::trace!(path, %fault, "bundle name degraded to sentinel");
            Resolution {
                name: fault.sentinel().to_string(),
                source,
                fault: Some(fault),
            }
        }
    }
}

/// Without a configuration the containing folder names the bundle, or `default`.
///
/// A path ending in a separator names a folder, so its last component is used.
fn resolve_unconfigured(path: &str) -> Resolution {
    let segments = PathSegments::parse(path, "");
    if segments.has_parent_reference() {
        return finish(
            path,
            Err(NamingFault::InvalidPath),
            ResolutionSource::Unconfigured,
            DEFAULT_SEPARATOR,
        );
    }

    let names_folder = path.trim_end().ends_with(['/', '\\']);
    let folder = if names_folder {
        segments.file_name()
    } else {
        segments.parent()
    };
    let name = folder
        .map(|folder| normalize_name(folder, DEFAULT_SEPARATOR))
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    Resolution {
        name,
        source: ResolutionSource::Unconfigured,
        fault: Some(NamingFault::ConfigAbsent),
    }
}
