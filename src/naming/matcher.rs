use crate::models::NamingRule;

/// Select the highest-priority rule whose keyword occurs in `raw_path`.
///
/// Rules are ordered by descending priority on a working copy; the sort is stable, so
/// among equal priorities the rule listed first wins. Matching is a case-insensitive
/// substring test and empty keywords never match. The returned index refers to the
/// caller's original list.
pub fn match_rule<'r>(raw_path: &str, rules: &'r [NamingRule]) -> Option<(usize, &'r NamingRule)> {
    if rules.is_empty() {
        return None;
    }

    let mut ordered: Vec<(usize, &NamingRule)> = rules.iter().enumerate().collect();
    ordered.sort_by(|(_, left), (_, right)| right.priority.cmp(&left.priority));

    let haystack = raw_path.to_lowercase();
    ordered.into_iter().find(|(_, rule)| {
        !rule.path_keyword.is_empty() && haystack.contains(&rule.path_keyword.to_lowercase())
    })
}
