use std::fmt::Display;

use thiserror::Error;

/// An error resulting from some validation process.
///
/// Collects every problem found instead of stopping at the first.
#[derive(Debug, Default, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Adds a problem.
    pub fn add_problem<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into());
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Converts the problem list into a result.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}
