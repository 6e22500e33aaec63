//! Implements the Newton solver, the Lame task, and the stretch sweep

mod lame;
mod newton;
mod sweep;
pub use crate::solver::lame::*;
pub use crate::solver::newton::*;
pub use crate::solver::sweep::*;
