//! Run results and their display models

pub mod display;
pub mod report;

pub use display::OutcomeDisplay;
pub use report::{Outcome, ProjectOutcome, RunReport, Step};
