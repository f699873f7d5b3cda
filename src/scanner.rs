//! The scan loop: walk each file's package-level declarations and collect
//! every mutable one as a violation.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::outline::{EntryKind, OutlineError};
use crate::provider::OutlineSource;

/// A package-level mutable declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub file: String,
    pub name: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} is a global variable", self.file, self.name)
    }
}

/// Aggregate result of one scan, in encounter order.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

impl ScanReport {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Scans files through an [`OutlineSource`], skipping excluded paths.
pub struct Scanner<'a> {
    source: &'a dyn OutlineSource,
    exclude: HashSet<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a dyn OutlineSource, exclude: HashSet<String>) -> Self {
        Self { source, exclude }
    }

    /// Scan `files` in order. Each violation is handed to `on_violation` as
    /// soon as it is found, so callers can stream output; the returned report
    /// holds the full list plus counters. Any structural problem in a file's
    /// outline aborts the scan with an error, leaving output already emitted
    /// for earlier files in place.
    pub fn scan(
        &self,
        files: &[String],
        mut on_violation: impl FnMut(&Violation),
    ) -> Result<ScanReport, OutlineError> {
        let mut report = ScanReport::default();

        for file in files {
            if self.exclude.contains(file.as_str()) {
                debug!("skipping excluded file: {}", file);
                report.files_skipped += 1;
                continue;
            }

            let outline = self.source.outline(file)?;
            let package = outline.package(file)?;

            // Top-level declarations only; nested variables are a function's
            // business, not ours.
            for child in &package.children {
                if child.kind == EntryKind::Variable {
                    let violation = Violation {
                        file: file.clone(),
                        name: child.label.clone(),
                    };
                    on_violation(&violation);
                    report.violations.push(violation);
                }
            }

            report.files_scanned += 1;
        }

        Ok(report)
    }
}
