/// Name used when every other strategy produced an empty string.
pub const FALLBACK_NAME: &str = "default";

/// Final pass over a generated name: rewrite `/` and `\` to `separator`, lower-case it and
/// strip surrounding whitespace and separators. Empty results become [`FALLBACK_NAME`].
/// Applying it twice with the same separator changes nothing.
pub fn normalize_name(name: &str, separator: char) -> String {
    let rewritten: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { separator } else { c })
        .collect();
    let lowered = rewritten.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| c == separator || c.is_whitespace());
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_and_trims() {
        assert_eq!(normalize_name(" /UI/Icons/ ", '/'), "ui/icons");
    }

    #[test]
    fn rewrites_slashes_to_separator() {
        assert_eq!(normalize_name("ui/Sword\\weapons", '.'), "ui.sword.weapons");
        assert_eq!(normalize_name("/root/readme.", '.'), "root.readme");
        assert_eq!(normalize_name("a\\b", '/'), "a/b");
    }

    #[test]
    fn empty_names_fall_back() {
        assert_eq!(normalize_name("", '/'), FALLBACK_NAME);
        assert_eq!(normalize_name(" / ", '/'), FALLBACK_NAME);
        assert_eq!(normalize_name("/-\\", '-'), FALLBACK_NAME);
    }

    #[test]
    fn leaves_sentinels_alone() {
        for sentinel in ["invalid_path", "invalid_root_path", "unknown", "custom_error"] {
            assert_eq!(normalize_name(sentinel, '/'), sentinel);
        }
    }

    #[test]
    fn is_idempotent() {
        for separator in ['/', '.', '-', 'A'] {
            for name in ["/ A", "Root/ReadMe", "x.y.z", "  ", "\u{130}stanbul", "a\\B/c"] {
                let once = normalize_name(name, separator);
                assert_eq!(normalize_name(&once, separator), once, "{name:?} {separator:?}");
            }
        }
    }
}
