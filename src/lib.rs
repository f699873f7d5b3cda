//! Flags package-level mutable variables in source files, using an external
//! outline tool (go-outline by default) to describe each file's top-level
//! declarations.

pub mod config;
pub mod outline;
pub mod output;
pub mod provider;
pub mod scanner;

pub use config::Config;
pub use outline::{Outline, OutlineError};
pub use provider::{GoOutlineTool, OutlineSource};
pub use scanner::{ScanReport, Scanner, Violation};
