//! Score averaging with two-decimal rounding.
//!
//! Category averages are plain arithmetic means. The total is the mean of the
//! three *unrounded* category averages, rounded only at the end.

use crate::error::Category;
use crate::model::Evaluation;

/// Rounded averages for one course.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Averages {
    pub teacher: f64,
    pub contents: f64,
    pub exam: f64,
    pub total: f64,
}

/// Round to two decimals: `(x * 100).round() / 100`.
///
/// `f64::round` rounds halfway cases away from zero, so this is half-up on
/// the binary product `x * 100`. Decimal halves are not exact in binary, so
/// values such as 1.005 may round down (100.4999... -> 1.00).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Mean of one category column, unrounded. Zero for an empty slice.
pub fn column_mean(evaluations: &[Evaluation], category: Category) -> f64 {
    if evaluations.is_empty() {
        return 0.0;
    }
    let sum: u64 = evaluations
        .iter()
        .map(|e| u64::from(e.score(category).get()))
        .sum();
    sum as f64 / evaluations.len() as f64
}

/// Compute the rounded category and total averages.
pub fn averages(evaluations: &[Evaluation]) -> Averages {
    let teacher = column_mean(evaluations, Category::Teacher);
    let contents = column_mean(evaluations, Category::Contents);
    let exam = column_mean(evaluations, Category::Exam);
    let total = (teacher + contents + exam) / 3.0;

    Averages {
        teacher: round2(teacher),
        contents: round2(contents),
        exam: round2(exam),
        total: round2(total),
    }
}
