//! Outline sources
//!
//! The scanner asks an [`OutlineSource`] for a file's outline rather than
//! spawning processes itself, so tests can substitute synthetic documents.

use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::outline::{Outline, OutlineError};

/// Produces a parsed outline document for a source file.
pub trait OutlineSource {
    fn outline(&self, file: &str) -> Result<Outline, OutlineError>;
}

/// Subprocess-backed source that shells out to go-outline (or any tool with
/// the same `-f <file>` interface and JSON output).
pub struct GoOutlineTool {
    program: String,
}

impl GoOutlineTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl OutlineSource for GoOutlineTool {
    fn outline(&self, file: &str) -> Result<Outline, OutlineError> {
        debug!("running {} -f {}", self.program, file);

        // Blocking call: the whole stdout stream is read before parsing.
        // The tool's own stderr passes straight through to ours.
        let output = Command::new(&self.program)
            .arg("-f")
            .arg(file)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| OutlineError::Spawn {
                tool: self.program.clone(),
                file: file.to_string(),
                source,
            })?;

        // Only stdout matters; a complaining exit status alongside
        // parseable output is worth a warning but not an abort.
        if !output.status.success() {
            warn!("{} exited with {} for {}", self.program, output.status, file);
        }

        Outline::parse(file, &output.stdout)
    }
}
