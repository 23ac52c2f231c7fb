use crate::{Problem, EF_MIN};
use chrono::{Days, NaiveDate};
use tracing::debug;

pub const QUALITY_PASS: u8 = 5;
pub const QUALITY_FAIL: u8 = 2;

/// What a single review did to the schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewOutcome {
    pub ef_after: f64,
    pub interval: u32,
    pub next_review: NaiveDate,
}

pub fn quality(success: bool) -> u8 {
    if success {
        QUALITY_PASS
    } else {
        QUALITY_FAIL
    }
}

pub fn next_easiness(ef: f64, quality: u8) -> f64 {
    let q = f64::from(QUALITY_PASS.saturating_sub(quality));
    (ef + 0.1 - q * (0.08 + q * 0.02)).max(EF_MIN)
}

/// `review_count` is the count including the review being applied.
pub fn next_interval(review_count: u32, interval: u32, ef: f64) -> u32 {
    match review_count {
        0 | 1 => 1,
        2 => 6,
        // truncates toward zero; `as` saturates at u32::MAX
        _ => ((f64::from(interval.max(1)) * ef) as u32).max(1),
    }
}

/// Applies one review to `problem`. The reported difficulty replaces the
/// stored label outright.
pub fn apply_review(
    problem: &mut Problem,
    today: NaiveDate,
    success: bool,
    difficulty: &str,
) -> ReviewOutcome {
    problem.last_reviewed = Some(today);
    problem.review_count += 1;
    if success {
        problem.success_count += 1;
    }
    problem.difficulty = difficulty.to_string();

    problem.ef = next_easiness(problem.ef, quality(success));
    problem.interval = next_interval(problem.review_count, problem.interval, problem.ef);

    let next = today
        .checked_add_days(Days::new(u64::from(problem.interval)))
        .unwrap_or(NaiveDate::MAX);
    problem.next_review = Some(next);

    debug!(
        title = %problem.title,
        success,
        ef = problem.ef,
        interval = problem.interval,
        next_review = %next,
        "review applied"
    );

    ReviewOutcome {
        ef_after: problem.ef,
        interval: problem.interval,
        next_review: next,
    }
}

pub fn is_due(problem: &Problem, today: NaiveDate) -> bool {
    match problem.next_review {
        None => true,
        Some(next) => next <= today,
    }
}
