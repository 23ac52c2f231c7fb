use crate::{CoreError, Problem, ProblemStore};
use parking_lot::RwLock;

/// Store kept entirely in memory; handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    problems: RwLock<Vec<Problem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems: RwLock::new(problems),
        }
    }
}

impl ProblemStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Problem>, CoreError> {
        Ok(self.problems.read().clone())
    }

    fn save_all(&self, problems: &[Problem]) -> Result<(), CoreError> {
        *self.problems.write() = problems.to_vec();
        Ok(())
    }
}
