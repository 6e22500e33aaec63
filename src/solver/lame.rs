use super::{BoundaryResiduals, NewtonReport, NewtonSolver2};
use crate::base::{current_radius, Config, Integrable, Limits};
use crate::material::{FingerInvariants, Hyperelastic};
use crate::StrError;
use russell_lab::math::PI;
use std::fmt;

/// Solves the Lame task of a thick-walled hyperelastic tube
///
/// The tube has reference radii r1 < r2, inner pressure q1, outer pressure q2, and
/// axial stretch k. The unknowns are the reference pressure p0 and the integration
/// constant C of the radius mapping; they satisfy the two boundary conditions
///
/// ```text
/// F1 = q1 - p0 f(r1) k / r1 + Pσr(r1)
///
///                              1  r2  h(x)
/// F2 = q2 - p0 f(r2) k / r2 +  ─  ∫   ──── dx  + Pσr(r2)
///                              k  r1   x
/// ```
pub struct Lame {
    /// Holds the hyperelastic model (exclusively owned)
    model: Hyperelastic,

    /// Inner pressure
    q1: f64,

    /// Outer pressure
    q2: f64,

    /// Axial stretch ratio
    k: f64,

    /// Newton's method
    newton: NewtonSolver2,
}

impl Lame {
    /// Allocates a new instance with the stretch set to `config.k_begin`
    pub fn new(config: &Config) -> Result<Self, StrError> {
        config.validate()?;
        let model = Hyperelastic::new(&config.model, config.n, config.r1, config.r2, config.n_integ_points)?;
        let newton = NewtonSolver2::new(config.eps, config.n_max_iterations, config.verbose_iterations)?;
        let lame = Lame {
            model,
            q1: config.q1,
            q2: config.q2,
            k: config.k_begin,
            newton,
        };
        log::info!(
            "Lame task: model {}{}, r1 = {}, r2 = {}, q1 = {}, q2 = {}, k = {}",
            lame.model.model_name(),
            lame.model.n(),
            lame.model.r1(),
            lame.model.r2(),
            lame.q1,
            lame.q2,
            lame.k
        );
        Ok(lame)
    }

    // setters ---------------------------------------------------------------------------------------------------------

    /// Sets the axial stretch ratio
    pub fn set_stretch(&mut self, k: f64) -> Result<(), StrError> {
        if !(k > 0.0) {
            return Err("the stretch ratio k must be > 0.0");
        }
        self.k = k;
        Ok(())
    }

    /// Sets the inner and outer pressures
    pub fn set_pressures(&mut self, q1: f64, q2: f64) -> Result<(), StrError> {
        if !q1.is_finite() || !q2.is_finite() {
            return Err("pressures must be finite");
        }
        self.q1 = q1;
        self.q2 = q2;
        Ok(())
    }

    /// Sets the inner and outer reference radii
    pub fn set_radius(&mut self, r1: f64, r2: f64) -> Result<(), StrError> {
        self.model.set_radius(r1, r2)
    }

    /// Sets the exponent n of the model
    pub fn set_exponent(&mut self, n: i32) -> Result<(), StrError> {
        self.model.set_exponent(n)
    }

    /// Sets the two material parameters (in the model's own order)
    pub fn set_material_constants(&mut self, param1: f64, param2: f64) {
        self.model.set_params(param1, param2);
    }

    // getters ---------------------------------------------------------------------------------------------------------

    /// Returns access to the model
    pub fn model(&self) -> &Hyperelastic {
        &self.model
    }

    /// Returns the current stretch ratio
    pub fn stretch(&self) -> f64 {
        self.k
    }

    // solution --------------------------------------------------------------------------------------------------------

    /// Calculates p0 and C by Newton's method, starting from the given values
    pub fn calculate_p0_and_c(&self, p0: &mut f64, c: &mut f64) -> Result<NewtonReport, StrError> {
        self.newton.solve(self, p0, c)
    }

    /// Returns the diagonal components (Pr, Pφ, Pz) of the first Piola stress
    pub fn piola_stresses(&self, r: f64, p0: f64, c: f64) -> (f64, f64, f64) {
        (
            self.model.piola_r(r, self.k, p0, c),
            self.model.piola_phi(r, self.k, p0, c),
            self.model.piola_z(r, self.k, p0, c),
        )
    }

    /// Returns the diagonal components (Tr, Tφ, Tz) of the Cauchy stress
    pub fn cauchy_stresses(&self, r: f64, p0: f64, c: f64) -> (f64, f64, f64) {
        (
            self.model.cauchy_r(r, self.k, p0, c),
            self.model.cauchy_phi(r, self.k, p0, c),
            self.model.cauchy_z(r, self.k, p0, c),
        )
    }

    /// Computes the axial resultant force Tzz
    ///
    /// Integrates 2π r Tz over the mapped interval [f(r1), f(r2)] with r = f(x) and the
    /// change-of-variable factor df/dx = x / (k r).
    pub fn axial_force(&self, p0: f64, c: f64) -> f64 {
        let (k, r1, r2) = (self.k, self.model.r1(), self.model.r2());
        let limits = Limits::new(current_radius(r1, k, c), current_radius(r2, k, c));
        let stress_z = Integrable::new(limits, |x, _, _| {
            let r = current_radius(x, k, c);
            let df = x / (k * r);
            r * self.model.cauchy_z(r, k, p0, c) * df
        });
        2.0 * PI * self.model.simpson().integrate(&stress_z, 0.0, 0.0)
    }

    /// Computes the invariants of the strain measure at the reference radius r
    pub fn invariants(&self, r: f64, c: f64) -> FingerInvariants {
        FingerInvariants::new(self.model.n(), r, self.k, c)
    }
}

impl BoundaryResiduals for Lame {
    fn f1(&self, p0: f64, c: f64) -> f64 {
        let (k, r1) = (self.k, self.model.r1());
        self.q1 - p0 * current_radius(r1, k, c) * k / r1 + self.model.ps_r(r1, k, c)
    }

    fn f2(&self, p0: f64, c: f64) -> f64 {
        let (k, r2) = (self.k, self.model.r2());
        self.q2 - p0 * current_radius(r2, k, c) * k / r2
            + self.model.integrate_equilibrium(k, c) / k
            + self.model.ps_r(r2, k, c)
    }

    fn df1_dp0(&self, _p0: f64, c: f64) -> f64 {
        let r1 = self.model.r1();
        -current_radius(r1, self.k, c) * self.k / r1
    }

    fn df2_dp0(&self, _p0: f64, c: f64) -> f64 {
        let r2 = self.model.r2();
        -current_radius(r2, self.k, c) * self.k / r2
    }

    /// Accepts C only if r1²/k - C ≥ 0
    fn admissible_c(&self, c: f64) -> bool {
        let r1 = self.model.r1();
        r1 * r1 / self.k - c >= 0.0
    }
}

impl fmt::Display for Lame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lame task\n")?;
        write!(f, "=========\n")?;
        write!(f, "model = {} where n = {}\n", self.model.model_name(), self.model.n())?;
        write!(f, "parameters = ({}, {})\n", self.model.param_1_name(), self.model.param_2_name())?;
        write!(f, "r1 = {:?}, r2 = {:?}\n", self.model.r1(), self.model.r2())?;
        write!(f, "inner pressure q1 = {:?}\n", self.q1)?;
        write!(f, "outer pressure q2 = {:?}\n", self.q2)?;
        write!(f, "stretch k = {:?}\n", self.k)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
