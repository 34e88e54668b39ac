//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON, plus the console painting
//! used by the in-process rendering agent.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{AgentCommand, Classification, Scope, Verdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Color a classification for human-mode output
#[must_use]
pub fn paint_classification(classification: Classification) -> ColoredString {
    match classification {
        Classification::Safe => classification.as_str().green().bold(),
        Classification::Suspicious => classification.as_str().yellow().bold(),
        Classification::Danger => classification.as_str().red().bold(),
        Classification::Unknown => classification.as_str().dimmed().bold(),
    }
}

/// Paint an agent command to the console (the local agent's "rendering")
pub fn paint_agent_command(scope: &Scope, command: &AgentCommand) {
    match command {
        AgentCommand::Start => {
            println!("[{scope}] {}", "checking link safety...".dimmed());
        },
        AgentCommand::Result { payload } => {
            println!(
                "[{scope}] {} {}",
                paint_classification(payload.classification),
                payload.reason
            );
        },
    }
}

/// Result of a direct `verify` invocation
#[derive(Debug, Serialize)]
pub struct VerdictReport {
    /// The verdict the client produced
    #[serde(flatten)]
    pub verdict: Verdict,
    /// How many endpoints were configured for the attempt
    pub endpoints_tried: usize,
}

impl VerdictReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.verdict.url);
        println!(
            "  {} {}",
            paint_classification(self.verdict.classification),
            self.verdict.reason
        );
        println!("  checked at {}", self.verdict.observed_at.to_rfc3339());
    }
}

/// Result of a full orchestrated `run` invocation
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether the start notice reached the agent
    pub start_rendered: bool,
    /// Whether the final verdict reached the agent
    pub result_rendered: bool,
    /// Scope the result was actually rendered in, if any
    pub rendered_in: Option<String>,
    /// The rendered verdict, if any
    pub verdict: Option<Verdict>,
}

impl RunReport {
    /// Build a report from the agent's rendered-command history
    #[must_use]
    pub fn from_rendered(rendered: &[(Scope, AgentCommand)]) -> Self {
        let start_rendered = rendered
            .iter()
            .any(|(_, command)| matches!(command, AgentCommand::Start));
        let result = rendered.iter().find_map(|(scope, command)| match command {
            AgentCommand::Result { payload } => Some((*scope, payload.clone())),
            AgentCommand::Start => None,
        });

        Self {
            start_rendered,
            result_rendered: result.is_some(),
            rendered_in: result.as_ref().map(|(scope, _)| scope.to_string()),
            verdict: result.map(|(_, verdict)| verdict),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.result_rendered {
            if let Some(rendered_in) = &self.rendered_in {
                println!("\nResult rendered in {rendered_in}.");
            }
        } else {
            println!("\n{}", "Result was never rendered.".yellow());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
