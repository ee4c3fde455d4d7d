//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod output;
mod scaffold;

#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
pub use scaffold::{ScaffoldReport, ScaffoldResult};
