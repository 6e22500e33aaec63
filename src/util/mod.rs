//! Contains the report sinks and the results structures

mod report;
mod results;
pub use crate::util::report::*;
pub use crate::util::results::*;
