//! Core data model types for courseval.
//!
//! A [`Course`] owns its identity and its append-only evaluation history.
//! Courses are only ever created by the registry.

use std::fmt;

use crate::error::{Category, RegistryError, Result};
use crate::statistics::{self, Averages};

/// Lowest accepted score.
pub const MIN_SCORE: u8 = 1;
/// Highest accepted score.
pub const MAX_SCORE: u8 = 5;

/// A single validated score in `MIN_SCORE..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Validate a raw value for the given category.
    pub fn new(category: Category, value: i64) -> Result<Self> {
        if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(RegistryError::InvalidScore { category, value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One respondent's scores for a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub teacher: Score,
    pub contents: Score,
    pub exam: Score,
}

impl Evaluation {
    /// Validate all three scores; the first out-of-range one is reported.
    pub fn new(teacher: i64, contents: i64, exam: i64) -> Result<Self> {
        Ok(Self {
            teacher: Score::new(Category::Teacher, teacher)?,
            contents: Score::new(Category::Contents, contents)?,
            exam: Score::new(Category::Exam, exam)?,
        })
    }

    /// Score for one category.
    pub fn score(&self, category: Category) -> Score {
        match category {
            Category::Teacher => self.teacher,
            Category::Contents => self.contents,
            Category::Exam => self.exam,
        }
    }
}

/// A registered course and its evaluation history.
#[derive(Debug, Clone)]
pub struct Course {
    code: String,
    name: String,
    evaluations: Vec<Evaluation>,
    /// Per-course bound inherited from the registry limits.
    max_evaluations: Option<usize>,
}

impl Course {
    pub(crate) fn new(code: String, name: String, max_evaluations: Option<usize>) -> Self {
        Self {
            code,
            name,
            evaluations: Vec::new(),
            max_evaluations,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluations in the order they were added.
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }

    /// Append one evaluation.
    ///
    /// Scores are re-validated here even though the console already checks
    /// them; on error nothing is stored.
    pub fn add_evaluation(&mut self, teacher: i64, contents: i64, exam: i64) -> Result<()> {
        if let Some(limit) = self.max_evaluations {
            if self.evaluations.len() >= limit {
                tracing::warn!(code = %self.code, limit, "evaluation limit reached");
                return Err(RegistryError::CapacityExceeded {
                    what: "evaluations per course",
                    limit,
                });
            }
        }

        let evaluation = Evaluation::new(teacher, contents, exam)?;
        self.evaluations.push(evaluation);
        tracing::debug!(
            code = %self.code,
            count = self.evaluations.len(),
            "evaluation added"
        );
        Ok(())
    }

    /// Rounded category and total averages over all evaluations.
    ///
    /// A course without evaluations averages to zero everywhere.
    pub fn averages(&self) -> Averages {
        statistics::averages(&self.evaluations)
    }
}
