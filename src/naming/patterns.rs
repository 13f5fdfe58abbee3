use crate::models::{NamingConfig, NamingFault, PatternKind};
use crate::naming::segments::{PathSegments, file_stem};
use crate::naming::template::expand_template;

/// Bundle prefix used for files placed directly under the content root.
pub const ROOT_BUNDLE_PREFIX: &str = "root";

/// Pre-check shared by every pattern kind.
///
/// Returns `Some` for blank, climbing and root-level paths: blank input and paths with a
/// `..` component are invalid paths, the root itself is an invalid root path, and a single file under the root is always named
/// `root/<stem>` whatever pattern was requested. Returns `None` when the pattern should run.
pub fn root_outcome(segments: &PathSegments) -> Option<Result<String, NamingFault>> {
    if segments.is_blank() || segments.has_parent_reference() {
        return Some(Err(NamingFault::InvalidPath));
    }
    if !segments.is_degenerate() {
        return None;
    }

    let outcome = match segments.file_stem() {
        None => Err(NamingFault::InvalidRootPath),
        Some(stem) if stem.trim().is_empty() => Err(NamingFault::UnknownSegment),
        Some(stem) => Ok(format!("{ROOT_BUNDLE_PREFIX}/{}", stem.to_lowercase())),
    };
    Some(outcome)
}

/// Compute the raw (not yet normalised) bundle name for `pattern`.
pub fn apply_pattern(
    segments: &PathSegments,
    pattern: PatternKind,
    custom_pattern: &str,
    config: &NamingConfig,
) -> Result<String, NamingFault> {
    if let Some(outcome) = root_outcome(segments) {
        return outcome;
    }

    match pattern {
        PatternKind::ParentFolder => parent_folder(segments),
        PatternKind::TwoLevelFolders => two_level_folders(segments, config),
        PatternKind::FullPath => full_path(segments, config),
        PatternKind::Custom if custom_pattern.trim().is_empty() => apply_default(segments, config),
        PatternKind::Custom => expand_template(segments, custom_pattern, config.max_folder_depth),
    }
}

/// Apply the configuration's default rule.
///
/// A default rule asking for a custom pattern without a template degrades to
/// [`PatternKind::ParentFolder`] so the fallback can never recurse.
pub fn apply_default(segments: &PathSegments, config: &NamingConfig) -> Result<String, NamingFault> {
    let rule = &config.default_rule;
    match rule.pattern {
        PatternKind::Custom if rule.custom_pattern.trim().is_empty() => {
            apply_pattern(segments, PatternKind::ParentFolder, "", config)
        }
        pattern => apply_pattern(segments, pattern, &rule.custom_pattern, config),
    }
}

fn parent_folder(segments: &PathSegments) -> Result<String, NamingFault> {
    segments
        .parent()
        .filter(|parent| !parent.trim().is_empty())
        .map(str::to_lowercase)
        .ok_or(NamingFault::UnknownSegment)
}

fn two_level_folders(segments: &PathSegments, config: &NamingConfig) -> Result<String, NamingFault> {
    if segments.len() < 2 {
        return Err(NamingFault::InvalidPath);
    }

    let parent = parent_folder(segments)?;
    let current = segments
        .file_stem()
        .map(str::to_lowercase)
        .ok_or(NamingFault::UnknownSegment)?;
    let joiner = if config.use_flat_structure {
        '_'
    } else {
        config.separator_char()
    };

    Ok(format!("{parent}{joiner}{current}"))
}

fn full_path(segments: &PathSegments, config: &NamingConfig) -> Result<String, NamingFault> {
    let Some((file_name, folders)) = segments.as_slice().split_last() else {
        return Err(NamingFault::InvalidPath);
    };

    let separator = config.separator_char().to_string();
    let mut parts: Vec<&str> = folders.iter().map(String::as_str).collect();
    parts.push(file_stem(file_name));

    Ok(parts.join(&separator).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &str) -> PathSegments {
        PathSegments::parse(path, "Assets")
    }

    fn apply(path: &str, pattern: PatternKind, config: &NamingConfig) -> Result<String, NamingFault> {
        apply_pattern(&segments(path), pattern, "", config)
    }

    #[test]
    fn parent_folder_uses_containing_directory() {
        let config = NamingConfig::default();
        assert_eq!(
            apply("Assets/UI/Icons/play.png", PatternKind::ParentFolder, &config).unwrap(),
            "icons"
        );
    }

    #[test]
    fn two_level_folders_joins_parent_and_stem() {
        let mut config = NamingConfig::default();
        assert_eq!(
            apply("Assets/UI/Icons/play.png", PatternKind::TwoLevelFolders, &config).unwrap(),
            "icons/play"
        );

        config.use_flat_structure = true;
        assert_eq!(
            apply("Assets/UI/Icons/play.png", PatternKind::TwoLevelFolders, &config).unwrap(),
            "icons_play"
        );
    }

    #[test]
    fn two_level_folders_honours_separator() {
        let config = NamingConfig {
            separator: "-".into(),
            ..NamingConfig::default()
        };
        assert_eq!(
            apply("Assets/Icons/play.png", PatternKind::TwoLevelFolders, &config).unwrap(),
            "icons-play"
        );
    }

    #[test]
    fn full_path_strips_root_and_extension() {
        let config = NamingConfig {
            separator: ".".into(),
            ..NamingConfig::default()
        };
        assert_eq!(
            apply("Assets/Materials/hero.mat", PatternKind::FullPath, &config).unwrap(),
            "materials.hero"
        );
    }

    #[test]
    fn full_path_keeps_paths_outside_root() {
        let config = NamingConfig::default();
        assert_eq!(
            apply("Packages/Tools/Gizmo.prefab", PatternKind::FullPath, &config).unwrap(),
            "packages/tools/gizmo"
        );
    }

    #[test]
    fn root_files_ignore_requested_pattern() {
        let config = NamingConfig::default();
        for pattern in [
            PatternKind::ParentFolder,
            PatternKind::TwoLevelFolders,
            PatternKind::FullPath,
            PatternKind::Custom,
        ] {
            assert_eq!(
                apply("Assets/ReadMe.txt", pattern, &config).unwrap(),
                "root/readme"
            );
        }
    }

    #[test]
    fn root_and_blank_paths_map_to_faults() {
        let config = NamingConfig::default();
        assert_eq!(
            apply("Assets/", PatternKind::FullPath, &config),
            Err(NamingFault::InvalidRootPath)
        );
        assert_eq!(
            apply("", PatternKind::FullPath, &config),
            Err(NamingFault::InvalidPath)
        );
    }

    #[test]
    fn parent_references_are_invalid_for_every_pattern() {
        let config = NamingConfig::default();
        for pattern in [PatternKind::ParentFolder, PatternKind::FullPath, PatternKind::Custom] {
            assert_eq!(
                apply("Assets/../../etc/passwd.txt", pattern, &config),
                Err(NamingFault::InvalidPath)
            );
        }
    }

    #[test]
    fn blank_parent_folder_is_unknown() {
        let config = NamingConfig::default();
        assert_eq!(
            apply("Assets/ /play.png", PatternKind::ParentFolder, &config),
            Err(NamingFault::UnknownSegment)
        );
    }

    #[test]
    fn empty_custom_pattern_uses_default_rule() {
        let mut config = NamingConfig::default();
        config.default_rule.pattern = PatternKind::FullPath;
        assert_eq!(
            apply("Assets/UI/Icons/play.png", PatternKind::Custom, &config).unwrap(),
            "ui/icons/play"
        );
    }

    #[test]
    fn empty_custom_default_rule_degrades_to_parent_folder() {
        let mut config = NamingConfig::default();
        config.default_rule.pattern = PatternKind::Custom;
        assert_eq!(
            apply_default(&segments("Assets/UI/Icons/play.png"), &config).unwrap(),
            "icons"
        );
    }

    #[test]
    fn custom_default_rule_expands_template() {
        let mut config = NamingConfig::default();
        config.default_rule.pattern = PatternKind::Custom;
        config.default_rule.custom_pattern = "misc/{0}".into();
        assert_eq!(
            apply_default(&segments("Assets/Props/Crate.prefab"), &config).unwrap(),
            "misc/crate"
        );
    }
}
