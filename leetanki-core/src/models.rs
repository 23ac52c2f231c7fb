use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

pub const EF_MIN: f64 = 1.3;
pub const EF_DEFAULT: f64 = 2.5;
pub const INTERVAL_DEFAULT: u32 = 1;

pub const EASY: &str = "Easy";
pub const MEDIUM: &str = "Medium";
pub const HARD: &str = "Hard";
pub const UNRATED: &str = "Unrated";

/// One flashcard: a coding problem plus its review state.
///
/// Every field has a default on deserialization, so records written by older
/// versions (or by hand) load without runtime presence checks.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub statement: String,
    #[serde(default, deserialize_with = "nullable")]
    pub solution: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,
    #[serde(default = "default_difficulty", deserialize_with = "nullable_difficulty")]
    pub difficulty: String,

    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(default)]
    pub next_review: Option<NaiveDate>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default = "default_ef")]
    pub ef: f64,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub skip_recall: bool,
}

impl Problem {
    pub fn new(
        title: impl Into<String>,
        statement: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            statement: statement.into(),
            solution: solution.into(),
            tags: Vec::new(),
            notes: String::new(),
            difficulty: UNRATED.to_string(),
            last_reviewed: None,
            next_review: None,
            review_count: 0,
            success_count: 0,
            ef: EF_DEFAULT,
            interval: INTERVAL_DEFAULT,
            skip_recall: false,
        }
    }

    /// Checks the scheduler fields of a loaded record.
    pub fn check_state(&self) -> Result<(), crate::CoreError> {
        let broken = if self.success_count > self.review_count {
            "success_count exceeds review_count"
        } else if self.ef.is_nan() || self.ef < EF_MIN {
            "ef below 1.3"
        } else if self.interval == 0 {
            "interval is 0"
        } else {
            return Ok(());
        };
        Err(crate::CoreError::Invalid(format!("{:?}: {broken}", self.title)))
    }

    pub fn is_unseen(&self) -> bool {
        self.review_count == 0
    }

    /// Reviewed at least once and missed at least once.
    pub fn has_failures(&self) -> bool {
        self.review_count > 0 && self.success_count < self.review_count
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        crate::scheduler::is_due(self, today)
    }

    /// Records a review dated today (local calendar).
    pub fn mark_reviewed(&mut self, success: bool, difficulty: &str) {
        self.mark_reviewed_on(Local::now().date_naive(), success, difficulty);
    }

    pub fn mark_reviewed_on(
        &mut self,
        today: NaiveDate,
        success: bool,
        difficulty: &str,
    ) -> crate::ReviewOutcome {
        crate::scheduler::apply_review(self, today, success, difficulty)
    }
}

/// Uppercases the first character and lowercases the rest ("hARD" -> "Hard").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Cleans a user-entered difficulty label; blank input yields `fallback`.
pub fn normalize_difficulty(input: &str, fallback: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        capitalize(trimmed)
    }
}

fn default_difficulty() -> String {
    UNRATED.to_string()
}

fn default_ef() -> f64 {
    EF_DEFAULT
}

fn default_interval() -> u32 {
    INTERVAL_DEFAULT
}

fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

fn nullable_difficulty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default_difficulty))
}
