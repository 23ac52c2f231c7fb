use crate::{normalize_tag, tags::has_normalized_tag, CoreError, Problem};
use tracing::info;

fn set_skip(problem: &mut Problem, skip: bool) -> bool {
    if problem.skip_recall == skip {
        return false;
    }
    problem.skip_recall = skip;
    true
}

/// Returns how many problems changed. Out-of-range indices are ignored.
pub fn set_skip_by_indices<I>(problems: &mut [Problem], indices: I, skip: bool) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut changed = 0;
    for i in indices {
        if let Some(p) = problems.get_mut(i) {
            if set_skip(p, skip) {
                changed += 1;
            }
        }
    }
    info!(changed, skip, "skip flag updated by index");
    changed
}

pub fn set_skip_by_tag(problems: &mut [Problem], tag: &str, skip: bool) -> Result<usize, CoreError> {
    let norm = normalize_tag(tag);
    if norm.is_empty() {
        return Err(CoreError::Invalid(format!("tag {tag:?} has no letters or digits")));
    }
    let changed = problems
        .iter_mut()
        .filter(|p| has_normalized_tag(p, &norm))
        .map(|p| set_skip(p, skip))
        .filter(|changed| *changed)
        .count();
    info!(changed, skip, tag, "skip flag updated by tag");
    Ok(changed)
}

pub fn set_skip_all(problems: &mut [Problem], skip: bool) -> usize {
    let changed = problems
        .iter_mut()
        .map(|p| set_skip(p, skip))
        .filter(|changed| *changed)
        .count();
    info!(changed, skip, "skip flag updated for all");
    changed
}

pub fn toggle_skip(problem: &mut Problem) -> bool {
    problem.skip_recall = !problem.skip_recall;
    problem.skip_recall
}
