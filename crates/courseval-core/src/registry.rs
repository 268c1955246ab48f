//! The course registry: code validation, uniqueness, lookup and listing.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{RegistryError, Result};
use crate::model::Course;
use crate::statistics::Averages;

static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][0-9]{4}[A-Z]$").expect("course code pattern compiles"));

/// Returns `true` iff `code` is one uppercase ASCII letter, four ASCII
/// digits and one uppercase ASCII letter, e.g. `A0000A`.
pub fn is_valid_course_code(code: &str) -> bool {
    COURSE_CODE.is_match(code)
}

fn index_key(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Optional capacity bounds. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryLimits {
    /// Maximum number of registered courses.
    pub max_courses: Option<usize>,
    /// Maximum number of evaluations stored per course.
    pub max_evaluations_per_course: Option<usize>,
}

/// Listing order for [`CourseRegistry::list_courses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by stored code.
    ByCode,
    /// Descending by total average.
    ByScore,
}

/// One row of a course listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub evaluation_count: usize,
    pub averages: Averages,
}

/// Owns every registered course.
///
/// Courses are kept in insertion order; a case-insensitive index maps codes
/// to positions.
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
    limits: RegistryLimits,
}

impl CourseRegistry {
    /// An unbounded, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry with capacity bounds.
    pub fn with_limits(limits: RegistryLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> RegistryLimits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Register a new course with no evaluations.
    ///
    /// The code is stored exactly as given. It must already be in canonical
    /// uppercase form to pass validation.
    pub fn add_course(&mut self, code: &str, name: &str) -> Result<&Course> {
        if !is_valid_course_code(code) {
            tracing::debug!(code, "rejected course code");
            return Err(RegistryError::InvalidCodeFormat(code.to_string()));
        }

        let key = index_key(code);
        if self.index.contains_key(&key) {
            tracing::debug!(code, "duplicate course code");
            return Err(RegistryError::DuplicateCode(code.to_string()));
        }

        if let Some(limit) = self.limits.max_courses {
            if self.courses.len() >= limit {
                tracing::warn!(code, limit, "course limit reached");
                return Err(RegistryError::CapacityExceeded {
                    what: "courses",
                    limit,
                });
            }
        }

        let position = self.courses.len();
        self.courses.push(Course::new(
            code.to_string(),
            name.to_string(),
            self.limits.max_evaluations_per_course,
        ));
        self.index.insert(key, position);
        tracing::debug!(code, name, total = self.courses.len(), "course registered");

        Ok(&self.courses[position])
    }

    /// Case-insensitive lookup.
    pub fn find_course(&self, code: &str) -> Option<&Course> {
        self.index
            .get(&index_key(code))
            .map(|&position| &self.courses[position])
    }

    /// Case-insensitive lookup for adding evaluations.
    pub fn find_course_mut(&mut self, code: &str) -> Option<&mut Course> {
        let position = *self.index.get(&index_key(code))?;
        self.courses.get_mut(position)
    }

    /// Like [`find_course`](Self::find_course) but yields `NotFound`.
    pub fn course(&self, code: &str) -> Result<&Course> {
        self.find_course(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// Like [`find_course_mut`](Self::find_course_mut) but yields `NotFound`.
    pub fn course_mut(&mut self, code: &str) -> Result<&mut Course> {
        self.find_course_mut(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// All courses in the requested order.
    ///
    /// Both orders use a stable sort, so ties keep insertion order.
    pub fn list_courses(&self, order: SortOrder) -> Vec<&Course> {
        self.ordered(order)
            .into_iter()
            .map(|(course, _)| course)
            .collect()
    }

    /// The listing paired with each course's averages.
    pub fn summaries(&self, order: SortOrder) -> Vec<CourseSummary<'_>> {
        self.ordered(order)
            .into_iter()
            .map(|(course, averages)| CourseSummary {
                code: course.code(),
                name: course.name(),
                evaluation_count: course.evaluation_count(),
                averages,
            })
            .collect()
    }

    fn ordered(&self, order: SortOrder) -> Vec<(&Course, Averages)> {
        // Averages are computed once per course, not once per comparison.
        let mut rows: Vec<(&Course, Averages)> =
            self.courses.iter().map(|c| (c, c.averages())).collect();

        match order {
            SortOrder::ByCode => rows.sort_by(|a, b| a.0.code().cmp(b.0.code())),
            SortOrder::ByScore => rows.sort_by(|a, b| b.1.total.total_cmp(&a.1.total)),
        }

        rows
    }
}
