use chrono::NaiveDate;
use clap::ValueEnum;
use leetanki_core::{normalize_difficulty, toggle_skip, BlankedSolution, Problem};
use std::io::{self, BufRead, Write};

use crate::cli::prompt::Prompter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReviewMode {
    /// Recall the entire solution
    #[default]
    Recall,
    /// Fill in blanked-out control-flow lines
    Blanks,
}

/// When the user is offered to flip `skip_recall` during a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipToggle {
    BeforeReveal,
    AfterReview,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'io, R, W> {
    pub io: &'io mut Prompter<R, W>,
    pub today: NaiveDate,
    pub mode: ReviewMode,
    pub toggle: SkipToggle,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Walks through `problems` in order. Returns how many were reviewed.
    pub fn run(&mut self, problems: Vec<&mut Problem>) -> io::Result<usize> {
        let mut reviewed = 0;
        for (i, problem) in problems.into_iter().enumerate() {
            let heading = format!("Problem {}: {}", i + 1, problem.title);
            match self.review(problem, &heading)? {
                Flow::Continue => reviewed += 1,
                Flow::Quit => break,
            }
        }
        Ok(reviewed)
    }

    pub fn review(&mut self, problem: &mut Problem, heading: &str) -> io::Result<Flow> {
        self.io.say(format!("\n{heading}"))?;
        self.io.say(format!(
            "Tags: {} | Difficulty: {}",
            problem.tags.join(", "),
            problem.difficulty
        ))?;
        self.io.say(&problem.statement)?;

        if self.toggle == SkipToggle::BeforeReveal {
            self.offer_toggle(problem)?;
        }

        let correct = match self.mode {
            ReviewMode::Recall => {
                let reply = self.io.ask("Try to recall the solution. Press Enter to reveal (q to stop)...")?;
                if reply.trim().eq_ignore_ascii_case("q") {
                    return Ok(Flow::Quit);
                }
                self.io.say("Solution:")?;
                self.io.say(&problem.solution)?;
                self.io.confirm("Did you recall it correctly? (y/n): ")?
            }
            ReviewMode::Blanks => {
                let blanked = BlankedSolution::new(&problem.solution);
                self.io.say(blanked.render())?;
                let reply = self.io.ask("Try to fill in the blanks. Press Enter to reveal full solution (q to stop)...")?;
                if reply.trim().eq_ignore_ascii_case("q") {
                    return Ok(Flow::Quit);
                }
                self.io.say(&problem.solution)?;
                self.io.confirm("Did you recall the blanks correctly? (y/n): ")?
            }
        };

        let rating = self.io.ask("Rate the difficulty (Easy/Medium/Hard): ")?;
        let difficulty = normalize_difficulty(&rating, &problem.difficulty);
        let out = problem.mark_reviewed_on(self.today, correct, &difficulty);
        self.io.say(format!("→ next review {} ({} day(s))", out.next_review, out.interval))?;

        if !problem.notes.is_empty() {
            self.io.say(format!("Notes: {}", problem.notes))?;
        }

        if self.toggle == SkipToggle::AfterReview {
            self.io.say(format!("Currently skipped for recall: {}", problem.skip_recall))?;
            self.offer_toggle(problem)?;
        }
        Ok(Flow::Continue)
    }

    fn offer_toggle(&mut self, problem: &mut Problem) -> io::Result<()> {
        if self.io.confirm("Toggle skip recall for this problem? (y/N): ")? {
            let now = toggle_skip(problem);
            self.io.say(format!("skip_recall set to {now}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::scripted;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn sample() -> Problem {
        let mut p = Problem::new(
            "Sum",
            "Add up a list of numbers.",
            "total = 0\nfor x in xs:\n    total += x\nreturn total",
        );
        p.difficulty = "Medium".into();
        p.notes = "watch overflow".into();
        p
    }

    #[test]
    fn recall_review_updates_schedule() {
        let mut io = scripted("\ny\nhard\n");
        let mut p = sample();
        let mut s = Session { io: &mut io, today: day(), mode: ReviewMode::Recall, toggle: SkipToggle::Never };
        assert_eq!(s.review(&mut p, "Problem 1: Sum").unwrap(), Flow::Continue);

        assert_eq!(p.review_count, 1);
        assert_eq!(p.success_count, 1);
        assert_eq!(p.difficulty, "Hard");
        assert_eq!(p.last_reviewed, Some(day()));
        let out = String::from_utf8(io.into_output()).unwrap();
        assert!(out.contains("Notes: watch overflow"));
    }

    #[test]
    fn blanks_mode_hides_control_flow() {
        let mut io = scripted("\nn\n\ny\n");
        let mut p = sample();
        let mut s = Session { io: &mut io, today: day(), mode: ReviewMode::Blanks, toggle: SkipToggle::AfterReview };
        s.review(&mut p, "Random Problem: Sum").unwrap();

        // blank rating keeps the stored label
        assert_eq!(p.difficulty, "Medium");
        assert_eq!(p.success_count, 0);
        assert!(p.skip_recall);
        let out = String::from_utf8(io.into_output()).unwrap();
        assert!(out.contains("total = 0\n...\n    total += x\n...\n"));
        assert!(out.contains(&format!("{}\n", p.solution)));
    }

    #[test]
    fn reveal_prints_solution_verbatim() {
        let mut io = scripted("\ny\n\n");
        let mut p = sample();
        p.solution = "if a:\r\n    return b\r\n\r\n".into();
        let mut s = Session { io: &mut io, today: day(), mode: ReviewMode::Blanks, toggle: SkipToggle::Never };
        s.review(&mut p, "Problem 1: Sum").unwrap();

        let out = String::from_utf8(io.into_output()).unwrap();
        assert!(out.contains("...\n...\n"));
        assert!(out.contains("if a:\r\n    return b\r\n\r\n\n"));
    }

    #[test]
    fn quit_stops_without_marking() {
        let mut io = scripted("n\n\ny\neasy\nn\nq\n");
        let mut a = sample();
        let mut b = sample();
        let mut c = sample();
        let mut s = Session { io: &mut io, today: day(), mode: ReviewMode::Recall, toggle: SkipToggle::BeforeReveal };
        let reviewed = s.run(vec![&mut a, &mut b, &mut c]).unwrap();

        assert_eq!(reviewed, 1);
        assert_eq!(a.review_count, 1);
        assert_eq!(a.difficulty, "Easy");
        assert_eq!(b.review_count, 0);
        assert_eq!(c.review_count, 0);
    }
}
