use crate::StrError;

/// Holds the limits of an integration interval [a, b]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Lower limit
    pub a: f64,

    /// Upper limit
    pub b: f64,
}

impl Limits {
    /// Allocates a new instance
    pub fn new(a: f64, b: f64) -> Self {
        Limits { a, b }
    }

    /// Returns the interval [a, b_new] (the original limits are not modified)
    pub fn narrowed_to(&self, b_new: f64) -> Self {
        Limits { a: self.a, b: b_new }
    }
}

/// Specifies a function of x and two fixed parameters, integrable over its own interval
pub trait Integrand {
    /// Returns the integration limits
    fn limits(&self) -> Limits;

    /// Evaluates the function at x while holding the two parameters fixed
    fn eval(&self, x: f64, arg1: f64, arg2: f64) -> f64;
}

/// Binds a closure `g(x, arg1, arg2)` to an integration interval
///
/// Instances are meant to be built right before an integration call; they borrow
/// whatever the closure captures and are dropped when the call returns.
pub struct Integrable<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    limits: Limits,
    g: F,
}

impl<F> Integrable<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    /// Allocates a new instance
    pub fn new(limits: Limits, g: F) -> Self {
        Integrable { limits, g }
    }
}

impl<F> Integrand for Integrable<F>
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn limits(&self) -> Limits {
        self.limits
    }

    fn eval(&self, x: f64, arg1: f64, arg2: f64) -> f64 {
        (self.g)(x, arg1, arg2)
    }
}

/// Implements the composite Simpson rule with a fixed number of points
///
/// With `npoint = 2m + 1` the interval is split into `2m` segments of size `h` and
///
/// ```text
/// ∫ g dx ≈ (h/3) [g₀ + 4g₁ + 2g₂ + 4g₃ + … + 4g₂ₘ₋₁ + g₂ₘ]
/// ```
///
/// **Note:** An even number of points is rejected when allocating the integrator.
#[derive(Clone, Copy, Debug)]
pub struct Simpson {
    npoint: usize,
}

impl Simpson {
    /// Allocates a new instance
    ///
    /// * `npoint` -- number of evaluation points; must be odd and ≥ 3
    pub fn new(npoint: usize) -> Result<Self, StrError> {
        if npoint < 3 {
            return Err("the number of integration points must be ≥ 3");
        }
        if npoint % 2 == 0 {
            return Err("the number of integration points must be odd");
        }
        Ok(Simpson { npoint })
    }

    /// Returns the number of evaluation points
    pub fn npoint(&self) -> usize {
        self.npoint
    }

    /// Integrates `fun` over its limits with `arg1` and `arg2` held fixed
    pub fn integrate<T>(&self, fun: &T, arg1: f64, arg2: f64) -> f64
    where
        T: Integrand + ?Sized,
    {
        let Limits { a, b } = fun.limits();
        let nseg = self.npoint - 1;
        let m = nseg / 2;
        let h_third = (b - a) / (6.0 * m as f64);
        let mut sum = fun.eval(a, arg1, arg2) + fun.eval(b, arg1, arg2);
        for i in 1..nseg {
            let x = a + (b - a) * (i as f64) / (nseg as f64);
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * fun.eval(x, arg1, arg2);
        }
        sum * h_third
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
