//! The `courseval run` command.

use std::path::PathBuf;

use anyhow::Result;

use courseval_core::CourseRegistry;

use crate::config::load_config_from;
use crate::session::Session;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let limits = config.limits;
    tracing::info!(
        max_courses = ?limits.max_courses,
        max_evaluations = ?limits.max_evaluations_per_course,
        "starting session"
    );

    let registry = CourseRegistry::with_limits(limits);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(registry, stdin.lock(), stdout.lock());
    session.run()
}
