use super::{ModelA, ModelB, PrincipalStressTrait};
use crate::base::{check_exponent, check_radius, current_radius};
use crate::base::{Integrable, Integrand, Limits, ParamHyperelastic, Simpson};
use crate::StrError;

/// Holds a hyperelastic model and computes the stress and pressure fields in the tube
///
/// The principal stresses come from the actual model (A or B); everything else
/// (radial equilibrium integrand, pressure field, Piola and Cauchy stresses) is
/// computed here by finite differences and Simpson quadrature over [r1, r2].
pub struct Hyperelastic {
    /// Holds the actual model implementation
    actual: Box<dyn PrincipalStressTrait>,

    /// Exponent n
    n: i32,

    /// Inner reference radius
    r1: f64,

    /// Outer reference radius
    r2: f64,

    /// Integration interval [r1, r2]
    limits: Limits,

    /// Quadrature rule
    simpson: Simpson,
}

impl Hyperelastic {
    /// Allocates a new instance
    ///
    /// * `param` -- model and material parameters
    /// * `n` -- exponent (1, 2, 4, or 5)
    /// * `r1` -- inner reference radius
    /// * `r2` -- outer reference radius
    /// * `n_integ_points` -- number of points of the Simpson rule (odd and ≥ 3)
    pub fn new(param: &ParamHyperelastic, n: i32, r1: f64, r2: f64, n_integ_points: usize) -> Result<Self, StrError> {
        check_exponent(n)?;
        check_radius(r1, r2)?;
        let simpson = Simpson::new(n_integ_points)?;
        let actual: Box<dyn PrincipalStressTrait> = match *param {
            ParamHyperelastic::ModelA { lambda, mu } => Box::new(ModelA::new(lambda, mu, n)?),
            ParamHyperelastic::ModelB { mu, beta } => Box::new(ModelB::new(mu, beta, n)?),
        };
        Ok(Hyperelastic {
            actual,
            n,
            r1,
            r2,
            limits: Limits::new(r1, r2),
            simpson,
        })
    }

    // setters ---------------------------------------------------------------------------------------------------------

    /// Sets the inner and outer reference radii
    pub fn set_radius(&mut self, r1: f64, r2: f64) -> Result<(), StrError> {
        check_radius(r1, r2)?;
        self.r1 = r1;
        self.r2 = r2;
        self.limits = Limits::new(r1, r2);
        Ok(())
    }

    /// Sets the two material parameters (in the model's own order)
    pub fn set_params(&mut self, param1: f64, param2: f64) {
        self.actual.set_params(param1, param2);
    }

    /// Sets the exponent n
    pub fn set_exponent(&mut self, n: i32) -> Result<(), StrError> {
        self.actual.set_exponent(n)?;
        self.n = n;
        Ok(())
    }

    // getters ---------------------------------------------------------------------------------------------------------

    /// Returns the exponent n
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Returns the inner reference radius
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Returns the outer reference radius
    pub fn r2(&self) -> f64 {
        self.r2
    }

    /// Returns the quadrature rule
    pub fn simpson(&self) -> &Simpson {
        &self.simpson
    }

    /// Returns the name of the model
    pub fn model_name(&self) -> &'static str {
        self.actual.model_name()
    }

    /// Returns the name of the first parameter
    pub fn param_1_name(&self) -> &'static str {
        self.actual.param_1_name()
    }

    /// Returns the name of the second parameter
    pub fn param_2_name(&self) -> &'static str {
        self.actual.param_2_name()
    }

    // principal stresses ----------------------------------------------------------------------------------------------

    /// Returns {P_σ}_r
    pub fn ps_r(&self, r: f64, k: f64, c: f64) -> f64 {
        self.actual.ps_r(r, k, c)
    }

    /// Returns {P_σ}_φ
    pub fn ps_phi(&self, r: f64, k: f64, c: f64) -> f64 {
        self.actual.ps_phi(r, k, c)
    }

    /// Returns {P_σ}_z
    pub fn ps_z(&self, r: f64, k: f64, c: f64) -> f64 {
        self.actual.ps_z(r, k, c)
    }

    // derived quantities ----------------------------------------------------------------------------------------------

    /// Computes ∂{P_σ}_r/∂r with a second-order one-sided finite difference
    ///
    /// The mesh spacing is `h = (r2 - r1) / (2 npoint)`. Within two spacings of r2 the
    /// backward stencil is used, otherwise the forward stencil, so that {P_σ}_r is never
    /// evaluated beyond r2 (for r ≥ r1):
    ///
    /// ```text
    /// backward: (3 f₀ - 4 f₋₁ + f₋₂) / (2h)
    /// forward:  (-f₂ + 4 f₁ - 3 f₀) / (2h)
    /// ```
    pub fn dps_r(&self, r: f64, k: f64, c: f64) -> f64 {
        let h = (self.r2 - self.r1) / (2.0 * self.simpson.npoint() as f64);
        let f0 = self.ps_r(r, k, c);
        if r >= self.r2 - 2.0 * h {
            let f1 = self.ps_r(r - h, k, c);
            let f2 = self.ps_r(r - 2.0 * h, k, c);
            (3.0 * f0 - 4.0 * f1 + f2) / (2.0 * h)
        } else {
            let f1 = self.ps_r(r + h, k, c);
            let f2 = self.ps_r(r + 2.0 * h, k, c);
            (-f2 + 4.0 * f1 - 3.0 * f0) / (2.0 * h)
        }
    }

    /// Computes the radial equilibrium integrand
    ///
    /// ```text
    /// h(r) = r ∂{P_σ}_r/∂r + {P_σ}_r - {P_σ}_φ
    /// ```
    pub fn h(&self, r: f64, k: f64, c: f64) -> f64 {
        r * self.dps_r(r, k, c) + self.ps_r(r, k, c) - self.ps_phi(r, k, c)
    }

    /// Integrates h(x)/x over the whole wall [r1, r2]
    pub fn integrate_equilibrium(&self, k: f64, c: f64) -> f64 {
        self.simpson.integrate(self, k, c)
    }

    /// Computes the pressure field
    ///
    /// ```text
    ///             1  r  h(x)
    /// p(r) = p0 + ─  ∫  ──── dx
    ///             k  r1  x
    /// ```
    ///
    /// The integration runs over the narrowed interval [r1, r]; the interval of the model
    /// itself is left untouched.
    pub fn pressure(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        let narrow = Integrable::new(self.limits.narrowed_to(r), |x, k, c| self.h(x, k, c) / x);
        p0 + self.simpson.integrate(&narrow, k, c) / k
    }

    /// Computes the radial component of the first Piola stress
    pub fn piola_r(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        let f = current_radius(r, k, c);
        -f * k * self.pressure(r, k, p0, c) / r + self.ps_r(r, k, c)
    }

    /// Computes the hoop component of the first Piola stress
    pub fn piola_phi(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        let f = current_radius(r, k, c);
        -r * self.pressure(r, k, p0, c) / f + self.ps_phi(r, k, c)
    }

    /// Computes the axial component of the first Piola stress
    pub fn piola_z(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        -self.pressure(r, k, p0, c) / k + self.ps_z(r, k, c)
    }

    /// Computes the radial component of the Cauchy stress
    pub fn cauchy_r(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        let f = current_radius(r, k, c);
        self.piola_r(r, k, p0, c) * r / (f * k)
    }

    /// Computes the hoop component of the Cauchy stress
    pub fn cauchy_phi(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        let f = current_radius(r, k, c);
        self.piola_phi(r, k, p0, c) * f / r
    }

    /// Computes the axial component of the Cauchy stress
    pub fn cauchy_z(&self, r: f64, k: f64, p0: f64, c: f64) -> f64 {
        self.piola_z(r, k, p0, c) * k
    }
}

/// The model integrates h(x)/x over [r1, r2] with (k, C) as fixed arguments
impl Integrand for Hyperelastic {
    fn limits(&self) -> Limits {
        self.limits
    }

    fn eval(&self, x: f64, k: f64, c: f64) -> f64 {
        self.h(x, k, c) / x
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Hyperelastic;
    use crate::base::{Integrand, Limits, ParamHyperelastic, SampleParams};
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        let param = SampleParams::param_model_b();
        assert_eq!(
            Hyperelastic::new(&param, 3, 2.0, 2.5, 101).err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
        let param = SampleParams::param_model_a();
        assert_eq!(
            Hyperelastic::new(&param, 3, 2.0, 2.5, 101).err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
        assert_eq!(
            Hyperelastic::new(&param, 2, 2.0, 2.5, 100).err(),
            Some("the number of integration points must be odd")
        );
        assert_eq!(Hyperelastic::new(&param, 2, 0.0, 2.5, 101).err(), Some("r1 must be > 0.0"));
        assert_eq!(Hyperelastic::new(&param, 2, 2.0, 1.5, 101).err(), Some("r2 must be > r1"));
    }

    #[test]
    fn setters_and_getters_work() {
        let param = ParamHyperelastic::ModelA { lambda: 2.0, mu: 200.0 };
        let mut model = Hyperelastic::new(&param, 2, 2.0, 2.5, 101).unwrap();
        assert_eq!(model.model_name(), "A");
        assert_eq!(model.param_1_name(), "lambda");
        assert_eq!(model.param_2_name(), "mu");
        assert_eq!(model.simpson().npoint(), 101);
        assert_eq!(model.limits(), Limits::new(2.0, 2.5));

        model.set_radius(1.0, 3.0).unwrap();
        assert_eq!((model.r1(), model.r2()), (1.0, 3.0));
        assert_eq!(model.limits(), Limits::new(1.0, 3.0));
        assert_eq!(model.set_radius(3.0, 1.0).err(), Some("r2 must be > r1"));
        assert_eq!(model.limits(), Limits::new(1.0, 3.0));

        model.set_exponent(4).unwrap();
        assert_eq!(model.n(), 4);
        assert!(model.set_exponent(3).is_err());
        assert_eq!(model.n(), 4);

        // n = 4, λ = (0.5, 0.5, 4) ⇒ Pσr = 2λ - μ
        model.set_params(10.0, 100.0);
        approx_eq(model.ps_r(2.0, 4.0, 0.0), 20.0 - 100.0, 1e-13);
    }

    #[test]
    fn dps_r_works() {
        // with C ≠ 0 the principal stresses vary along r; compare against a central difference
        let param = SampleParams::param_model_b();
        let model = Hyperelastic::new(&param, 2, 2.0, 2.5, 101).unwrap();
        let (k, c) = (1.5, 0.4);
        let delta = 1e-5;
        for r in [2.0, 2.1, 2.3, 2.49, 2.5] {
            let num = (model.ps_r(r + delta, k, c) - model.ps_r(r - delta, k, c)) / (2.0 * delta);
            approx_eq(model.dps_r(r, k, c), num, 5e-3);
        }

        // homogeneous deformation (C = 0) ⇒ Pσr does not depend on r
        for r in [2.0, 2.25, 2.5] {
            approx_eq(model.dps_r(r, k, 0.0), 0.0, 1e-9);
        }
    }

    #[test]
    fn pressure_equals_p0_at_inner_radius() {
        let param = SampleParams::param_model_a();
        let model = Hyperelastic::new(&param, 4, 2.0, 2.5, 101).unwrap();
        approx_eq(model.pressure(2.0, 1.3, -50.0, 0.2), -50.0, 1e-15);

        // pressure over the whole wall matches the equilibrium integral
        let (k, c) = (1.3, 0.2);
        approx_eq(
            model.pressure(2.5, k, 0.0, c),
            model.integrate_equilibrium(k, c) / k,
            1e-12,
        );

        // the interval of the model was not modified
        assert_eq!(model.limits(), Limits::new(2.0, 2.5));
    }

    #[test]
    fn stresses_are_consistent_for_homogeneous_deformation() {
        // C = 0 ⇒ h = Pσr - Pσφ; for model B with λr = λφ we get h = 0 and p = p0
        let param = SampleParams::param_model_b();
        let model = Hyperelastic::new(&param, 2, 2.0, 2.5, 101).unwrap();
        let (k, p0, c) = (2.0, -300.0, 0.0);
        for r in [2.0, 2.2, 2.5] {
            approx_eq(model.h(r, k, c), 0.0, 1e-9);
            approx_eq(model.pressure(r, k, p0, c), p0, 1e-9);
            let f = r / f64::sqrt(k);
            approx_eq(model.piola_r(r, k, p0, c), -f * k * p0 / r + model.ps_r(r, k, c), 1e-9);
            approx_eq(model.piola_phi(r, k, p0, c), -r * p0 / f + model.ps_phi(r, k, c), 1e-9);
            approx_eq(model.piola_z(r, k, p0, c), -p0 / k + model.ps_z(r, k, c), 1e-9);
            approx_eq(model.cauchy_r(r, k, p0, c), model.piola_r(r, k, p0, c) * r / (f * k), 1e-9);
            approx_eq(model.cauchy_phi(r, k, p0, c), model.piola_phi(r, k, p0, c) * f / r, 1e-9);
            approx_eq(model.cauchy_z(r, k, p0, c), model.piola_z(r, k, p0, c) * k, 1e-9);
        }
    }

    #[test]
    fn stresses_are_nan_outside_the_domain() {
        let param = SampleParams::param_model_b();
        let model = Hyperelastic::new(&param, 2, 2.0, 2.5, 101).unwrap();
        let (k, p0, c) = (1.0, 1.0, -5.0);
        assert!(model.h(2.0, k, c).is_nan());
        assert!(model.pressure(2.2, k, p0, c).is_nan());
        assert!(model.cauchy_z(2.2, k, p0, c).is_nan());
        assert!(model.eval(2.2, k, c).is_nan());
    }
}
