use crate::Problem;

/// Lowercases and drops everything outside `[a-z0-9]`, so "two pointers",
/// "two-pointers" and "Two_Pointers" all compare equal.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// `normalized` must already be normalized. An empty filter matches anything.
pub fn has_normalized_tag(problem: &Problem, normalized: &str) -> bool {
    normalized.is_empty() || problem.tags.iter().any(|t| normalize_tag(t) == normalized)
}

pub fn has_tag(problem: &Problem, tag: &str) -> bool {
    has_normalized_tag(problem, &normalize_tag(tag))
}

/// Splits a comma separated tag list, dropping blanks.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
