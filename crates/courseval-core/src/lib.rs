//! courseval-core — Course registry and evaluation scoring.
//!
//! This crate holds the in-memory course registry, per-course evaluation
//! storage and the averaging rules that the console front end renders.

pub mod error;
pub mod model;
pub mod registry;
pub mod statistics;

pub use error::{Category, RegistryError, Result};
pub use model::{Course, Evaluation, Score};
pub use registry::{
    is_valid_course_code, CourseRegistry, CourseSummary, RegistryLimits, SortOrder,
};
pub use statistics::Averages;
