//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use courseval_core::RegistryLimits;

/// Environment variable overriding `limits.max_courses`.
pub const MAX_COURSES_ENV: &str = "COURSEVAL_MAX_COURSES";
/// Environment variable overriding `limits.max_evaluations_per_course`.
pub const MAX_EVALUATIONS_ENV: &str = "COURSEVAL_MAX_EVALUATIONS";

/// Top-level courseval configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursevalConfig {
    /// Capacity bounds for the registry. Unbounded when absent.
    #[serde(default)]
    pub limits: RegistryLimits,
}

/// Load config from an explicit path or the default locations, then apply
/// `COURSEVAL_*` environment overrides.
pub fn load_config_from(path: Option<&Path>) -> Result<CoursevalConfig> {
    let mut config = read_config(path)?;
    apply_overrides(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}

/// Read config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `courseval.toml` in the current directory
/// 2. `~/.config/courseval/config.toml`
fn read_config(path: Option<&Path>) -> Result<CoursevalConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("courseval.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let Some(path) = config_path else {
        return Ok(CoursevalConfig::default());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<CoursevalConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Apply `COURSEVAL_*` overrides read through `lookup`.
fn apply_overrides<F>(config: &mut CoursevalConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(MAX_COURSES_ENV) {
        config.limits.max_courses = Some(parse_limit(MAX_COURSES_ENV, &value)?);
    }
    if let Some(value) = lookup(MAX_EVALUATIONS_ENV) {
        config.limits.max_evaluations_per_course = Some(parse_limit(MAX_EVALUATIONS_ENV, &value)?);
    }
    Ok(())
}

fn parse_limit(name: &str, value: &str) -> Result<usize> {
    let limit = value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{name} must be a positive integer, got '{value}'"))?;
    anyhow::ensure!(limit >= 1, "{name} must be at least 1");
    Ok(limit)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("courseval"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config_is_unbounded() {
        let config = CoursevalConfig::default();
        assert_eq!(config.limits.max_courses, None);
        assert_eq!(config.limits.max_evaluations_per_course, None);
    }

    #[test]
    fn parse_limits_table() {
        let toml_str = r#"
[limits]
max_courses = 10
max_evaluations_per_course = 100
"#;
        let config: CoursevalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.limits.max_courses, Some(10));
        assert_eq!(config.limits.max_evaluations_per_course, Some(100));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: CoursevalConfig = toml::from_str("").unwrap();
        assert_eq!(config.limits, RegistryLimits::default());
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[limits]\nmax_courses = 3\n").unwrap();

        let config = read_config(Some(&path)).unwrap();
        assert_eq!(config.limits.max_courses, Some(3));
        assert_eq!(config.limits.max_evaluations_per_course, None);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = read_config(Some(Path::new("no/such/courseval.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[limits\nmax_courses = ").unwrap();

        let err = read_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = CoursevalConfig::default();
        config.limits.max_courses = Some(10);

        apply_overrides(
            &mut config,
            env(&[(MAX_COURSES_ENV, "25"), (MAX_EVALUATIONS_ENV, " 7 ")]),
        )
        .unwrap();

        assert_eq!(config.limits.max_courses, Some(25));
        assert_eq!(config.limits.max_evaluations_per_course, Some(7));
    }

    #[test]
    fn env_override_rejects_bad_values() {
        let mut config = CoursevalConfig::default();
        assert!(apply_overrides(&mut config, env(&[(MAX_COURSES_ENV, "0")])).is_err());
        assert!(apply_overrides(&mut config, env(&[(MAX_COURSES_ENV, "ten")])).is_err());
        assert!(apply_overrides(&mut config, env(&[(MAX_EVALUATIONS_ENV, "-1")])).is_err());
    }
}
