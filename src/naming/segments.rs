/// Ordered, non-empty components of an asset path below the content root.
///
/// The root token is only stripped from the front of the path, so paths that live outside
/// the content tree keep every segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    segments: Vec<String>,
    blank: bool,
    parent_reference: bool,
}

impl PathSegments {
    /// Split `path` on `/` (or `\`), dropping empty and `.` components and any leading
    /// run of `root_token` components.
    pub fn parse(path: &str, root_token: &str) -> Self {
        let trimmed = path.trim();
        let mut segments: Vec<String> = trimmed
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_string)
            .collect();

        let leading_roots = segments
            .iter()
            .take_while(|segment| !root_token.is_empty() && segment.as_str() == root_token)
            .count();
        segments.drain(..leading_roots);
        let parent_reference = segments.iter().any(|segment| segment == "..");

        Self {
            segments,
            blank: trimmed.is_empty(),
            parent_reference,
        }
    }

    /// `true` when the input was empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// `true` when any component is `..`. Such paths can climb out of the content tree
    /// and never produce a name.
    pub fn has_parent_reference(&self) -> bool {
        self.parent_reference
    }

    /// `true` for root-level paths: nothing, or a single file, below the root.
    pub fn is_degenerate(&self) -> bool {
        self.segments.len() <= 1
    }

    /// Number of segments below the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` when no segment survived parsing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment counted from the end: `0` is the file, `1` its folder, and so on.
    pub fn from_end(&self, offset: usize) -> Option<&str> {
        let index = self.segments.len().checked_sub(offset)?.checked_sub(1)?;
        self.segments.get(index).map(String::as_str)
    }

    /// Final segment, the asset's file name.
    pub fn file_name(&self) -> Option<&str> {
        self.from_end(0)
    }

    /// File name without its extension.
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name().map(file_stem)
    }

    /// Folder directly containing the asset.
    pub fn parent(&self) -> Option<&str> {
        self.from_end(1)
    }

    /// All segments, root excluded.
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }
}

/// Strip the last extension from a file name. Dot-files keep their full name.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(position) => &name[..position],
    }
}
