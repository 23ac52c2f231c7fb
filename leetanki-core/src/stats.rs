use crate::Problem;
use chrono::NaiveDate;

#[derive(Clone, Debug, Default)]
pub struct Totals {
    pub reviews: u32,
    pub successes: u32,
}

impl Totals {
    pub fn record(&mut self, p: &Problem) {
        self.reviews += p.review_count;
        self.successes += p.success_count;
    }
    pub fn success_rate(&self) -> f32 {
        if self.reviews == 0 {
            0.0
        } else {
            self.successes as f32 / self.reviews as f32
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub total: usize,
    /// In first-seen order.
    pub by_difficulty: Vec<(String, usize)>,
    /// Raw tag spelling, most used first.
    pub by_tag: Vec<(String, usize)>,
    pub skipped: usize,
    /// Eligible and due on the summary date.
    pub due: usize,
    pub reviewed_today: usize,
    pub totals: Totals,
}

fn bump(counts: &mut Vec<(String, usize)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key.to_string(), 1)),
    }
}

pub fn summarize(problems: &[Problem], today: NaiveDate) -> Summary {
    let mut summary = Summary {
        total: problems.len(),
        ..Summary::default()
    };
    for p in problems {
        bump(&mut summary.by_difficulty, &p.difficulty);
        for t in &p.tags {
            bump(&mut summary.by_tag, t);
        }
        if p.skip_recall {
            summary.skipped += 1;
        } else if p.is_due(today) {
            summary.due += 1;
        }
        if p.last_reviewed == Some(today) {
            summary.reviewed_today += 1;
        }
        summary.totals.record(p);
    }
    // stable: ties keep first appearance
    summary.by_tag.sort_by(|a, b| b.1.cmp(&a.1));
    summary
}
