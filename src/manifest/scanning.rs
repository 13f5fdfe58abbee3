//! Directory scanning utilities for enumerating candidate assets.

use std::fs;
use std::path::Path;

use crate::asset_paths::{normalise_asset_path, project_relative_path};

/// Walk `source_folder` below `project_root` and return every file as a sorted,
/// project-relative, forward-slash path. Hidden entries are skipped.
///
/// A missing source folder yields no paths and a warning rather than an error, so one
/// stale folder entry does not abort a whole build.
pub fn collect_asset_paths(project_root: &Path, source_folder: &str) -> Vec<String> {
    let folder = normalise_asset_path(source_folder);
    let dir = if folder.is_empty() {
        project_root.to_path_buf()
    } else {
        project_root.join(&folder)
    };

    if !dir.is_dir() {
        tracing::warn!("source folder does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut paths = Vec::new();
    collect_files_recursively(project_root, &dir, &mut paths);
    paths.sort();
    paths
}

fn collect_files_recursively(project_root: &Path, dir: &Path, paths: &mut Vec<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            collect_files_recursively(project_root, &path, paths);
        } else if file_type.is_file() {
            if let Some(relative) = project_relative_path(project_root, &path) {
                paths.push(relative);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn collects_files_recursively_in_sorted_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Assets/Art/UI/Icons")).unwrap();
        fs::create_dir_all(root.join("Assets/Art/.cache")).unwrap();
        fs::write(root.join("Assets/Art/UI/Icons/play.png"), "png").unwrap();
        fs::write(root.join("Assets/Art/UI/Icons/play.png.meta"), "meta").unwrap();
        fs::write(root.join("Assets/Art/hero.mat"), "mat").unwrap();
        fs::write(root.join("Assets/Art/.DS_Store"), "junk").unwrap();
        fs::write(root.join("Assets/Art/.cache/blob.png"), "png").unwrap();

        let paths = collect_asset_paths(root, "Assets/Art");
        assert_eq!(paths, vec![
            "Assets/Art/UI/Icons/play.png".to_string(),
            "Assets/Art/UI/Icons/play.png.meta".to_string(),
            "Assets/Art/hero.mat".to_string(),
        ]);
    }

    #[test]
    fn missing_folders_yield_nothing() {
        let dir = tempdir().unwrap();
        assert!(collect_asset_paths(dir.path(), "Assets/Missing").is_empty());
    }

    #[test]
    fn accepts_windows_style_folder_names() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Assets/Audio")).unwrap();
        fs::write(root.join("Assets/Audio/theme.ogg"), "ogg").unwrap();

        assert_eq!(collect_asset_paths(root, "Assets\\Audio\\"), vec![
            "Assets/Audio/theme.ogg".to_string()
        ]);
    }
}
