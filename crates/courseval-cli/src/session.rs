//! The interactive menu session.
//!
//! A [`Session`] owns the registry for the life of the process and talks to
//! the user through any `BufRead`/`Write` pair, so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use courseval_core::model::{MAX_SCORE, MIN_SCORE};
use courseval_core::{CourseRegistry, RegistryError, SortOrder};

use crate::render;

const RULE: &str = "----------------------------------";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Score prompts, in the order they are asked.
const SCORE_PROMPTS: [&str; 3] = ["Teacher", "Course contents", "Examination"];

pub struct Session<R, W> {
    registry: CourseRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(registry: CourseRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Run the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.register_course()?,
                "2" => self.register_evaluation()?,
                "3" => self.print_evaluation_summary()?,
                "4" => self.print_course_list(SortOrder::ByCode)?,
                "5" => self.print_course_list(SortOrder::ByScore)?,
                q if q.eq_ignore_ascii_case("q") => {
                    writeln!(self.output, "Exiting program...")?;
                    Flow::Quit
                }
                other => {
                    tracing::debug!(choice = other, "unknown menu option");
                    writeln!(self.output, "Invalid option!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "# Course Evaluator")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Register new course")?;
        writeln!(self.output, "2. Register evaluation score")?;
        writeln!(self.output, "3. Print evaluation summary for a course")?;
        writeln!(self.output, "4. Print course list (sorted by course code)")?;
        writeln!(self.output, "5. Print course list (sorted by evaluation score)")?;
        writeln!(self.output, "q. End program")?;
        write!(self.output, "> Enter your option: ")?;
        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "> {label}: ")?;
        self.output.flush().context("failed to flush output")?;
        self.read_line()
    }

    fn register_course(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Enter course code")? else {
            return Ok(Flow::Quit);
        };
        let Some(name) = self.prompt("Enter course name")? else {
            return Ok(Flow::Quit);
        };
        let code = code.trim().to_uppercase();
        let name = name.trim();

        match self.registry.add_course(&code, name) {
            Ok(course) => {
                writeln!(
                    self.output,
                    "Course {}: {} was added!",
                    course.code(),
                    course.name()
                )?;
            }
            Err(RegistryError::InvalidCodeFormat(_)) => {
                writeln!(
                    self.output,
                    "Invalid course code! Expected one letter, four digits, one letter (e.g. A0000A)."
                )?;
            }
            Err(RegistryError::DuplicateCode(code)) => {
                writeln!(self.output, "Course {code} is already registered!")?;
            }
            Err(e) => {
                writeln!(self.output, "Course was not added: {e}")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn register_evaluation(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Enter course code")? else {
            return Ok(Flow::Quit);
        };
        let code = code.trim();

        let Some(course) = self.registry.find_course(code) else {
            writeln!(self.output, "Course not found!")?;
            return Ok(Flow::Continue);
        };
        let code = course.code().to_string();
        writeln!(
            self.output,
            "\nEnter your evaluation score for course {}.",
            course.name()
        )?;

        let mut scores = [0i64; 3];
        for (slot, label) in scores.iter_mut().zip(SCORE_PROMPTS) {
            match self.read_score(label)? {
                Some(score) => *slot = score,
                None => return Ok(Flow::Quit),
            }
        }
        let [teacher, contents, exam] = scores;

        let added = self
            .registry
            .course_mut(&code)
            .and_then(|course| course.add_evaluation(teacher, contents, exam));
        match added {
            Ok(()) => writeln!(self.output, "Your evaluation was registered, thank you!")?,
            Err(e) => writeln!(self.output, "Evaluation was not registered: {e}")?,
        }

        Ok(Flow::Continue)
    }

    /// Prompt until the user enters an integer in `MIN_SCORE..=MAX_SCORE`.
    fn read_score(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            let Some(raw) = self.prompt(label)? else {
                return Ok(None);
            };
            match raw.trim().parse::<i64>() {
                Ok(score) if (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&score) => {
                    return Ok(Some(score));
                }
                Ok(_) => writeln!(self.output, "Score must be between 1-5!")?,
                Err(_) => writeln!(self.output, "Invalid number format!")?,
            }
        }
    }

    fn print_evaluation_summary(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Enter course code")? else {
            return Ok(Flow::Quit);
        };

        let Some(course) = self.registry.find_course(code.trim()) else {
            writeln!(self.output, "Course not found!")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "\nEvaluation history:")?;
        writeln!(self.output, "{}", render::history_table(course.evaluations()))?;
        writeln!(
            self.output,
            "\nNumber of evaluations: {}",
            course.evaluation_count()
        )?;
        writeln!(self.output, "\nAverage score")?;
        for line in render::average_lines(&course.averages()) {
            writeln!(self.output, "{line}")?;
        }

        Ok(Flow::Continue)
    }

    fn print_course_list(&mut self, order: SortOrder) -> Result<Flow> {
        let rows = self.registry.summaries(order);
        if rows.is_empty() {
            writeln!(self.output, "\nNo courses registered yet.")?;
        } else {
            writeln!(self.output, "\n{}", render::course_table(&rows))?;
        }
        Ok(Flow::Continue)
    }
}
