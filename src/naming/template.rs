use std::sync::OnceLock;

use regex::Regex;

use crate::models::NamingFault;
use crate::naming::segments::PathSegments;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("invalid placeholder regex"))
}

/// Placeholder tokens understood by custom templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `{n}`: `{0}` is the file stem, `{n}` the folder `n + 1` levels above the file.
    Index(usize),
    /// `{filename}`: file name without extension.
    FileName,
    /// `{parent}`: folder directly containing the file.
    Parent,
}

impl Token {
    fn parse(inner: &str) -> Option<Self> {
        match inner {
            "filename" => Some(Self::FileName),
            "parent" => Some(Self::Parent),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse().ok().map(Self::Index)
            }
            _ => None,
        }
    }
}

/// Expand `{n}`, `{filename}` and `{parent}` placeholders in a custom template.
///
/// Placeholders are resolved in one left-to-right pass; substituted values are never
/// scanned again. Index tokens are only honoured below `max_folder_depth` clamped to
/// `[1, segments.len()]` and when the referenced folder exists. Anything else,
/// unrecognised tokens included, is copied through as literal text.
pub fn expand_template(
    segments: &PathSegments,
    template: &str,
    max_folder_depth: usize,
) -> Result<String, NamingFault> {
    let depth_limit = max_folder_depth.clamp(1, segments.len().max(1));
    let mut expanded = String::with_capacity(template.len());
    let mut cursor = 0;

    for captures in placeholder_pattern().captures_iter(template) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        expanded.push_str(&template[cursor..whole.start()]);
        cursor = whole.end();

        let value = match Token::parse(inner.as_str()) {
            Some(Token::Index(index)) if index < depth_limit => resolve_index(segments, index),
            Some(Token::Index(_)) | None => None,
            Some(Token::FileName) => Some(
                segments
                    .file_stem()
                    .ok_or(NamingFault::TemplateExpansionFailure)?,
            ),
            Some(Token::Parent) => Some(
                segments
                    .parent()
                    .ok_or(NamingFault::TemplateExpansionFailure)?,
            ),
        };

        match value {
            Some(value) => expanded.push_str(&value.to_lowercase()),
            None => expanded.push_str(whole.as_str()),
        }
    }

    expanded.push_str(&template[cursor..]);
    Ok(expanded)
}

fn resolve_index(segments: &PathSegments, index: usize) -> Option<&str> {
    if index == 0 {
        segments.file_stem()
    } else {
        segments.from_end(index.checked_add(1)?)
    }
}
