use crate::CoreError;

pub const MIN_STATEMENT_CHARS: usize = 10;

pub fn validate_statement(statement: &str) -> Result<(), CoreError> {
    if statement.chars().count() < MIN_STATEMENT_CHARS {
        return Err(CoreError::Invalid(format!(
            "problem statement must be at least {MIN_STATEMENT_CHARS} characters long"
        )));
    }
    Ok(())
}

pub fn format_solution(solution: &str) -> String {
    solution.trim().to_string()
}
