//! Output formatting for CLI commands.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{HunstemArgs, OutputFormat};
use crate::error::Result;

/// Stemming result for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemReport {
    pub word: String,
    pub candidates: Vec<String>,
    pub stem: String,
}

/// Recognition result for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub word: String,
    pub recognized: bool,
}

/// Tokens produced by a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub text: String,
    pub pipeline: Vec<String>,
    pub tokens: Vec<String>,
}

/// Pipelines installed by a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub locale: String,
    pub pipeline: Vec<String>,
    pub search_pipeline: Option<Vec<String>>,
}

impl fmt::Display for StemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidates.is_empty() {
            write!(f, "{} -> {} (not stemmed)", self.word, self.stem)
        } else {
            write!(
                f,
                "{} -> {} [{}]",
                self.word,
                self.stem,
                self.candidates.join(", ")
            )
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.recognized { "ok" } else { "unknown" };
        write!(f, "{}: {mark}", self.word)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline: {}", self.pipeline.join(" -> "))?;
        write!(f, "Tokens: {}", self.tokens.join(" "))
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Locale: {}", self.locale)?;
        write!(f, "Pipeline: {}", self.pipeline.join(" -> "))?;
        match &self.search_pipeline {
            Some(search) => write!(f, "\nSearch pipeline: {}", search.join(" -> ")),
            None => write!(f, "\nSearch pipeline: (none)"),
        }
    }
}

/// A list of reports printed one per line in human format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reports<T>(pub Vec<T>);

impl<T: fmt::Display> fmt::Display for Reports<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{report}")?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &HunstemArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    write_result(&mut io::stdout().lock(), message, result, args)
}

/// Render a result and write it as one line to `writer`.
pub fn write_result<W, T>(
    writer: &mut W,
    message: &str,
    result: &T,
    args: &HunstemArgs,
) -> Result<()>
where
    W: Write,
    T: Serialize + fmt::Display,
{
    writeln!(writer, "{}", render(message, result, args)?)?;
    Ok(())
}

/// Render a result in the specified format.
pub fn render<T>(message: &str, result: &T, args: &HunstemArgs) -> Result<String>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => Ok(render_human(message, result, args)),
        OutputFormat::Json => render_json(result, args),
    }
}

fn render_human<T: fmt::Display>(message: &str, result: &T, args: &HunstemArgs) -> String {
    if args.verbosity() > 1 {
        format!("{message}\n\n{result}")
    } else {
        result.to_string()
    }
}

fn render_json<T: Serialize>(result: &T, args: &HunstemArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
