//! Display model implementations for table and JSON output
//!
//! Display models transform run results into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod outcome;

pub use outcome::OutcomeDisplay;
