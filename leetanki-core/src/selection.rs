use crate::{
    filters::is_eligible, normalize_tag, tags::has_normalized_tag, Problem, SessionFilter,
    StatusFilter,
};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Daily mode: eligible problems scheduled for exactly `today`.
pub fn due_today(problems: &mut [Problem], today: NaiveDate) -> Vec<&mut Problem> {
    problems
        .iter_mut()
        .filter(|p| is_eligible(p) && p.next_review == Some(today))
        .collect()
}

/// Problems passing `filter`, in a uniformly shuffled order. Skip-recall
/// problems only take part when the status filter is `all`.
pub fn review_session<'a, R: Rng + ?Sized>(
    problems: &'a mut [Problem],
    filter: &SessionFilter,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<&'a mut Problem> {
    let include_skipped = filter.status == StatusFilter::All;
    let mut picked: Vec<&mut Problem> = problems
        .iter_mut()
        .filter(|p| (include_skipped || is_eligible(p)) && filter.matches(p, today))
        .collect();
    picked.shuffle(rng);
    debug!(count = picked.len(), status = %filter.status, "review session selected");
    picked
}

#[derive(Debug)]
pub struct BoredPick<'a> {
    pub problem: &'a mut Problem,
    /// The tag matched nothing and the pick came from all eligible problems.
    pub tag_fallback: bool,
}

/// Bored mode: one eligible problem at random, preferring those carrying
/// `tag`. Returns `None` only when no eligible problem exists at all.
pub fn pick_bored<'a, R: Rng + ?Sized>(
    problems: &'a mut [Problem],
    tag: &str,
    rng: &mut R,
) -> Option<BoredPick<'a>> {
    let norm = normalize_tag(tag);
    let eligible: Vec<usize> = (0..problems.len())
        .filter(|&i| is_eligible(&problems[i]))
        .collect();
    let tagged: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|&i| has_normalized_tag(&problems[i], &norm))
        .collect();

    let (pool, tag_fallback) = if tagged.is_empty() && !norm.is_empty() {
        warn!(tag, "no eligible problem carries the bored tag; using any tag");
        (eligible, true)
    } else {
        (tagged, false)
    };

    let idx = *pool.choose(rng)?;
    Some(BoredPick {
        problem: &mut problems[idx],
        tag_fallback,
    })
}

/// First present value wins: explicit override, then environment, then the
/// built-in default. An empty result means "any tag".
pub fn resolve_bored_tag(overridden: Option<&str>, env: Option<&str>, default: &str) -> String {
    overridden
        .or(env)
        .unwrap_or(default)
        .trim()
        .to_string()
}
