//! Fill-in-the-blank rendering of solutions.
//!
//! Lines are picked by plain substring search, not by parsing the code.

pub const BLANK_KEYWORDS: [&str; 6] = ["for ", "while ", "if ", "else", "elif", "return"];
pub const BLANK_PLACEHOLDER: &str = "...";

pub fn is_blank_line(line: &str) -> bool {
    BLANK_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// Zero-based indices of the lines that get blanked.
pub fn blank_line_indices(solution: &str) -> Vec<usize> {
    solution
        .lines()
        .enumerate()
        .filter(|(_, line)| is_blank_line(line))
        .map(|(i, _)| i)
        .collect()
}

/// A solution split into lines with the blanked ones marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlankedSolution {
    pub lines: Vec<String>,
    pub blanked: Vec<bool>,
}

impl BlankedSolution {
    pub fn new(solution: &str) -> Self {
        let lines: Vec<String> = solution.lines().map(str::to_string).collect();
        let blanked = lines.iter().map(|l| is_blank_line(l)).collect();
        Self { lines, blanked }
    }

    pub fn blank_count(&self) -> usize {
        self.blanked.iter().filter(|b| **b).count()
    }

    /// The partial view shown before the reveal.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .zip(&self.blanked)
            .map(|(line, blank)| if *blank { BLANK_PLACEHOLDER } else { line.as_str() })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
