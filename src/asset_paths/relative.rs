use std::path::Path;

/// Canonical form of an asset path as handed to the naming engine.
///
/// The result always uses single forward slashes and carries no leading or trailing slash,
/// regardless of the native separator used when the file was discovered on disk.
pub fn normalise_asset_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Express `path` relative to `project_root` in canonical form.
///
/// Returns `None` when `path` lies outside the project root.
pub fn project_relative_path(project_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(project_root).ok()?;
    Some(normalise_asset_path(&relative.to_string_lossy()))
}
