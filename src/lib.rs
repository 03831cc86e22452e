//
// lib.rs
// eolcmp
//
// Library entry that re-exports modules so the binary and any external users can access CLI parsing, line sources, comparison, and reporting.
//
// Thales Matheus Mendonça Santos - October 2026
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod app;
pub mod cli;
pub mod compare;
pub mod error;
pub mod line_ending;
pub mod logging;
pub mod report;
pub mod source;
pub mod utils;

pub use app::run_eolcmp;
pub use cli::{build_options, Args, Options};
pub use compare::{compare, CompareOptions, ComparisonResult, LineDiff, Outcome};
pub use error::OpenError;
pub use line_ending::{sniff, LineEnding};
pub use source::{LineSource, Unread};
