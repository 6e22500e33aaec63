//! Makes available common structures needed to run a Lame task
//!
//! You may write `use lamesim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, ParamHyperelastic, SampleParams, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::material::{FingerInvariants, Hyperelastic};
pub use crate::solver::{Lame, NewtonReport, NewtonStatus, StretchSweep, SweepSummary};
pub use crate::util::{ReportSink, SweepRecord, SweepResults, TextReport};
pub use crate::StrError;
