use crate::base::principal_stretches;
use serde::{Deserialize, Serialize};

/// Holds the principal invariants of the Finger-type strain measure B^((n-3)/2)
///
/// With aᵢ = λᵢ^(n-3) and λ = (r/(f k), f/r, k):
///
/// ```text
/// I1 = a₁ + a₂ + a₃
/// I2 = a₁ a₂ + a₂ a₃ + a₃ a₁
/// I3 = a₁ a₂ a₃
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct FingerInvariants {
    /// First invariant
    pub i1: f64,

    /// Second invariant
    pub i2: f64,

    /// Third invariant
    pub i3: f64,
}

impl FingerInvariants {
    /// Computes the invariants at the reference radius r
    pub fn new(n: i32, r: f64, k: f64, c: f64) -> Self {
        let e = n - 3;
        let l = principal_stretches(r, k, c);
        let (a1, a2, a3) = (l[0].powi(e), l[1].powi(e), l[2].powi(e));
        FingerInvariants {
            i1: a1 + a2 + a3,
            i2: a1 * a2 + a2 * a3 + a3 * a1,
            i3: a1 * a2 * a3,
        }
    }

    /// Indicates that all invariants are finite
    pub fn is_finite(&self) -> bool {
        self.i1.is_finite() && self.i2.is_finite() && self.i3.is_finite()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
