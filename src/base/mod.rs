//! Implements the base structures: configuration, parameters, kinematics, and quadrature

mod config;
mod constants;
mod conversions;
mod mapping;
mod parameters;
mod quadrature;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::conversions::*;
pub use crate::base::mapping::*;
pub use crate::base::parameters::*;
pub use crate::base::quadrature::*;
pub use crate::base::sample_params::*;
