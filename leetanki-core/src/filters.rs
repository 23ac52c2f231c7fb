use crate::{normalize_tag, tags::has_normalized_tag, CoreError, Problem};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Review-state filter for a review session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Never reviewed.
    Unseen,
    /// Reviewed and missed at least once.
    Failed,
    #[default]
    Due,
    All,
}

impl StatusFilter {
    pub fn matches(self, problem: &Problem, today: NaiveDate) -> bool {
        match self {
            StatusFilter::Unseen => problem.is_unseen(),
            StatusFilter::Failed => problem.has_failures(),
            StatusFilter::Due => problem.is_due(today),
            StatusFilter::All => true,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    /// Blank input selects the default (`due`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "due" => Ok(StatusFilter::Due),
            "unseen" => Ok(StatusFilter::Unseen),
            "failed" => Ok(StatusFilter::Failed),
            "all" => Ok(StatusFilter::All),
            other => Err(CoreError::Invalid(format!("unknown status filter: {other}"))),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusFilter::Unseen => "unseen",
            StatusFilter::Failed => "failed",
            StatusFilter::Due => "due",
            StatusFilter::All => "all",
        };
        f.write_str(s)
    }
}

/// Parameters of a tag/difficulty/status review session.
#[derive(Clone, Debug, Default)]
pub struct SessionFilter {
    pub tag: String,
    pub difficulty: String,
    pub status: StatusFilter,
}

impl SessionFilter {
    pub fn matches(&self, problem: &Problem, today: NaiveDate) -> bool {
        let tag = normalize_tag(&self.tag);
        let difficulty = crate::capitalize(self.difficulty.trim());
        has_normalized_tag(problem, &tag)
            && (difficulty.is_empty() || problem.difficulty == difficulty)
            && self.status.matches(problem, today)
    }
}

/// Problems taking part in spaced-repetition sessions.
pub fn is_eligible(problem: &Problem) -> bool {
    !problem.skip_recall
}

pub fn filter_by_tag<'a>(problems: &'a [Problem], tag: &str) -> Vec<&'a Problem> {
    let norm = normalize_tag(tag);
    problems
        .iter()
        .filter(|p| has_normalized_tag(p, &norm))
        .collect()
}

pub fn filter_not_skipped(problems: &[Problem]) -> Vec<&Problem> {
    problems.iter().filter(|p| is_eligible(p)).collect()
}

/// Case-insensitive substring search over title, statement, notes and tags.
/// A blank query matches everything.
pub fn matches_text(problem: &Problem, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty()
        || problem.title.to_lowercase().contains(&q)
        || problem.statement.to_lowercase().contains(&q)
        || problem.notes.to_lowercase().contains(&q)
        || problem.tags.iter().any(|t| t.to_lowercase().contains(&q))
}
