use crate::StrError;

/// Specifies the principal (first Piola-type) stress responses of a hyperelastic model
///
/// The arguments are the reference radius `r`, the axial stretch ratio `k`, and the
/// integration constant `c` of the radius mapping f(r,k,C) = √(r²/k + C).
pub trait PrincipalStressTrait: Send {
    /// Returns the radial component {P_σ}_r
    fn ps_r(&self, r: f64, k: f64, c: f64) -> f64;

    /// Returns the hoop component {P_σ}_φ
    fn ps_phi(&self, r: f64, k: f64, c: f64) -> f64;

    /// Returns the axial component {P_σ}_z
    fn ps_z(&self, r: f64, k: f64, c: f64) -> f64;

    /// Sets the two material parameters (in the model's own order)
    fn set_params(&mut self, param1: f64, param2: f64);

    /// Sets the exponent n
    fn set_exponent(&mut self, n: i32) -> Result<(), StrError>;

    /// Returns the name of the model
    fn model_name(&self) -> &'static str;

    /// Returns the name of the first parameter
    fn param_1_name(&self) -> &'static str;

    /// Returns the name of the second parameter
    fn param_2_name(&self) -> &'static str;
}
