use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::scanner::ScanReport;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Format {
    /// One line per violation, printed as found.
    #[default]
    Text,
    /// A single JSON report after the scan completes.
    Json,
}

/// Write the report as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, report: &ScanReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
