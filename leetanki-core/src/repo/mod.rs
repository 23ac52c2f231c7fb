use crate::{problem_index, CoreError, Problem};

pub mod memory;

/// Whole-collection persistence. Callers load, mutate in memory, then save
/// the full collection back.
pub trait ProblemStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<Problem>, CoreError>;
    fn save_all(&self, problems: &[Problem]) -> Result<(), CoreError>;

    /// Appends and returns the new problem's 1-based number.
    fn add_problem(&self, problem: Problem) -> Result<usize, CoreError> {
        let mut all = self.load_all()?;
        all.push(problem);
        self.save_all(&all)?;
        Ok(all.len())
    }

    fn get_problem(&self, number: usize) -> Result<Problem, CoreError> {
        let mut all = self.load_all()?;
        let idx = problem_index(all.len(), number)?;
        Ok(all.swap_remove(idx))
    }

    fn delete_problem(&self, number: usize) -> Result<Problem, CoreError> {
        let mut all = self.load_all()?;
        let idx = problem_index(all.len(), number)?;
        let removed = all.remove(idx);
        self.save_all(&all)?;
        Ok(removed)
    }

    /// Applies `edit` to one problem; nothing is saved if it fails.
    fn update_problem(
        &self,
        number: usize,
        edit: &mut dyn FnMut(&mut Problem) -> Result<(), CoreError>,
    ) -> Result<Problem, CoreError> {
        let mut all = self.load_all()?;
        let idx = problem_index(all.len(), number)?;
        edit(&mut all[idx])?;
        self.save_all(&all)?;
        Ok(all[idx].clone())
    }
}
