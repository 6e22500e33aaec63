//! Lame task for thick-walled hyperelastic tubes
//!
//! Computes the stress response of a tube with reference radii r1 < r2 subjected to
//! inner/outer pressures and an axial stretch, for two families of compressible
//! hyperelastic models. The boundary constants (p0, C) are found by a 2×2 Newton method.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod solver;
pub mod util;
