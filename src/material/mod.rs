//! Implements the hyperelastic models

mod hyperelastic;
mod invariants;
mod model_a;
mod model_b;
mod principal_stress;
pub use crate::material::hyperelastic::*;
pub use crate::material::invariants::*;
pub use crate::material::model_a::*;
pub use crate::material::model_b::*;
pub use crate::material::principal_stress::*;
