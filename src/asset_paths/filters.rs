use std::sync::OnceLock;

use regex::Regex;

use crate::naming::PathSegments;
use crate::selection::AssetInclusion;

/// Extensions that are never packaged: code, editor data, plugins, documents, temp files.
const SKIPPED_EXTENSIONS: &[&str] = &[
    "cs", "js", "asmdef", "md", "editor", "dll", "so", "bundle", "a", "zip", "rar", "7z", "pdf",
    "doc", "docx", "xls", "xlsx", "lighting", "gradle", "props", "template", "rsp", "db", "tmp",
    "bak",
];

/// Extensions of assets that belong in bundles.
const BUNDLED_EXTENSIONS: &[&str] = &[
    // textures
    "png", "jpg", "jpeg", "tga", "tif", "tiff", "bmp", "psd", "exr", "hdr",
    // models
    "fbx", "obj", "blend", "max", "ma", "mb", "3ds", "dae", "dxf",
    // materials and shaders
    "mat", "shader", "shadergraph", "compute",
    // audio
    "wav", "mp3", "ogg", "aiff", "aif", "mod", "it", "s3m", "xm",
    // animation
    "anim", "controller", "overridecontroller", "mask", "playable",
    // prefabs and scenes
    "prefab", "unity",
    // ui and fonts
    "spriteatlas", "guiskin", "font", "ttf", "otf",
    // data
    "asset", "json", "xml", "txt",
    // video
    "mp4", "mov", "avi", "webm", "ogv",
    // physics
    "physicmaterial", "physicsmaterial2d",
    // rendering
    "rendertexture", "cubemap", "flare", "terrainlayer",
];

fn asset_path_ignores() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)\.meta$").expect("invalid meta regex"),
                Regex::new(r"(?i)(^|/)editor/").expect("invalid editor folder regex"),
                Regex::new(r"(^|/)[~.][^/]*$").expect("invalid temp file regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset path should be handed to the naming engine at all.
///
/// Sidecar `.meta` files, temp and hidden files, anything inside an `Editor` folder and
/// files without a known asset extension are skipped.
pub fn should_bundle_asset(asset_path: &str) -> bool {
    let asset_path = asset_path.replace('\\', "/");
    if asset_path_ignores()
        .iter()
        .any(|pattern| pattern.is_match(&asset_path))
    {
        return false;
    }

    let Some(extension) = asset_extension(&asset_path) else {
        return false;
    };

    !SKIPPED_EXTENSIONS.contains(&extension.as_str())
        && BUNDLED_EXTENSIONS.contains(&extension.as_str())
}

fn asset_extension(asset_path: &str) -> Option<String> {
    let segments = PathSegments::parse(asset_path, "");
    let file_name = segments.file_name()?;
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// [`AssetInclusion`] backed by [`should_bundle_asset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundleableAssets;

impl AssetInclusion for BundleableAssets {
    fn should_include(&self, asset_path: &str) -> bool {
        should_bundle_asset(asset_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_known_asset_types() {
        assert!(should_bundle_asset("Assets/UI/Icons/play.png"));
        assert!(should_bundle_asset("Assets/Characters/Hero/Hero.FBX"));
        assert!(should_bundle_asset("Assets\\Audio\\theme.ogg"));
    }

    #[test]
    fn skips_meta_and_code() {
        assert!(!should_bundle_asset("Assets/UI/Icons/play.png.meta"));
        assert!(!should_bundle_asset("Assets/Scripts/Player.cs"));
        assert!(!should_bundle_asset("Assets/Plugins/native.dll"));
    }

    #[test]
    fn skips_unknown_and_missing_extensions() {
        assert!(!should_bundle_asset("Assets/Data/blob.bin"));
        assert!(!should_bundle_asset("Assets/Data/LICENSE"));
        assert!(!should_bundle_asset("Assets/Data/trailing."));
    }

    #[test]
    fn skips_temp_and_hidden_files() {
        assert!(!should_bundle_asset("Assets/UI/~play.png"));
        assert!(!should_bundle_asset("Assets/UI/.play.png"));
    }

    #[test]
    fn skips_editor_folders() {
        assert!(!should_bundle_asset("Assets/Editor/gizmo.png"));
        assert!(!should_bundle_asset("Assets/Tools/editor/icon.png"));
        assert!(should_bundle_asset("Assets/Tools/LevelEditor/icon.png"));
    }

    #[test]
    fn bundleable_assets_implements_inclusion() {
        assert!(BundleableAssets.should_include("Assets/Materials/hero.mat"));
        assert!(!BundleableAssets.should_include("Assets/Materials/notes.md"));
    }
}
