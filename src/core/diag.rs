//! Timestamped diagnostics gated by `--verbose`.
//!
//! Shard-level failures are deliberately low-severity: they go to stderr
//! when verbose output is requested and are silent otherwise.

use chrono::Local;
use console::style;

#[derive(Debug, Clone, Copy)]
pub struct Diag {
    verbose: bool,
}

impl Diag {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Progress line on stderr, timestamped and dimmed.
    pub fn log(&self, msg: impl AsRef<str>) {
        if self.verbose {
            eprintln!(
                "{} {}",
                style(Local::now().format("%Y-%m-%d %H:%M:%S%.3f")).dim(),
                style(msg.as_ref()).dim()
            );
        }
    }
}
