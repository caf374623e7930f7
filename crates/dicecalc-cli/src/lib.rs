//! # dicecalc-cli
//!
//! Console output, per-run progress lines, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, CLIRunReporter};
