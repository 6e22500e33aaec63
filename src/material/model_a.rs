use super::PrincipalStressTrait;
use crate::base::{check_exponent, principal_stretches};
use crate::StrError;

/// Implements the hyperelastic model A
///
/// With the principal stretches λ = (r/(f k), f/r, k) and e = n - 3:
///
/// ```text
/// I1 = λr^e + λφ^e + λz^e - 3
/// Pσᵢ = (1/e) λᵢ^(e-1) (λ I1 + 2 μ (λᵢ^e - 1))
/// ```
pub struct ModelA {
    lambda: f64,
    mu: f64,
    n: i32,
}

impl ModelA {
    /// Allocates a new instance
    pub fn new(lambda: f64, mu: f64, n: i32) -> Result<Self, StrError> {
        check_exponent(n)?;
        Ok(ModelA { lambda, mu, n })
    }

    /// Computes the component associated with the i-th principal stretch
    fn component(&self, i: usize, r: f64, k: f64, c: f64) -> f64 {
        let e = self.n - 3;
        let l = principal_stretches(r, k, c);
        let i1 = l[0].powi(e) + l[1].powi(e) + l[2].powi(e) - 3.0;
        l[i].powi(e - 1) * (self.lambda * i1 + 2.0 * self.mu * (l[i].powi(e) - 1.0)) / (e as f64)
    }
}

impl PrincipalStressTrait for ModelA {
    fn ps_r(&self, r: f64, k: f64, c: f64) -> f64 {
        self.component(0, r, k, c)
    }

    fn ps_phi(&self, r: f64, k: f64, c: f64) -> f64 {
        self.component(1, r, k, c)
    }

    fn ps_z(&self, r: f64, k: f64, c: f64) -> f64 {
        self.component(2, r, k, c)
    }

    fn set_params(&mut self, param1: f64, param2: f64) {
        self.lambda = param1;
        self.mu = param2;
    }

    fn set_exponent(&mut self, n: i32) -> Result<(), StrError> {
        check_exponent(n)?;
        self.n = n;
        Ok(())
    }

    fn model_name(&self) -> &'static str {
        "A"
    }

    fn param_1_name(&self) -> &'static str {
        "lambda"
    }

    fn param_2_name(&self) -> &'static str {
        "mu"
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelA;
    use crate::material::PrincipalStressTrait;
    use russell_lab::approx_eq;

    #[test]
    fn new_rejects_n_equal_to_3() {
        assert_eq!(
            ModelA::new(2.0, 200.0, 3).err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
        let mut model = ModelA::new(2.0, 200.0, 2).unwrap();
        assert!(model.set_exponent(3).is_err());
        assert_eq!(model.n, 2);
    }

    #[test]
    fn stresses_vanish_without_deformation() {
        for n in [1, 2, 4, 5] {
            let model = ModelA::new(2.0, 200.0, n).unwrap();
            approx_eq(model.ps_r(2.0, 1.0, 0.0), 0.0, 1e-13);
            approx_eq(model.ps_phi(2.0, 1.0, 0.0), 0.0, 1e-13);
            approx_eq(model.ps_z(2.0, 1.0, 0.0), 0.0, 1e-13);
        }
    }

    #[test]
    fn stresses_are_correct() {
        // r = 2, k = 4, C = 0 ⇒ λ = (0.5, 0.5, 4)
        // n = 4 ⇒ e = 1 and I1 = 0.5 + 0.5 + 4 - 3 = 2
        let mut model = ModelA::new(2.0, 200.0, 4).unwrap();
        approx_eq(model.ps_r(2.0, 4.0, 0.0), 2.0 * 2.0 - 200.0, 1e-13);
        approx_eq(model.ps_phi(2.0, 4.0, 0.0), 2.0 * 2.0 - 200.0, 1e-13);
        approx_eq(model.ps_z(2.0, 4.0, 0.0), 2.0 * 2.0 + 2.0 * 200.0 * 3.0, 1e-12);

        // n = 2 ⇒ e = -1 and I1 = 2 + 2 + 0.25 - 3 = 1.25
        // Pσr = -(1/0.25) (2 × 1.25 + 400 (2 - 1)) = -4 × 402.5
        model.set_exponent(2).unwrap();
        approx_eq(model.ps_r(2.0, 4.0, 0.0), -4.0 * 402.5, 1e-11);

        model.set_params(0.0, 1.0);
        approx_eq(model.ps_r(2.0, 4.0, 0.0), -4.0 * 2.0, 1e-13);
    }

    #[test]
    fn names_work() {
        let model = ModelA::new(2.0, 200.0, 2).unwrap();
        assert_eq!(model.model_name(), "A");
        assert_eq!(model.param_1_name(), "lambda");
        assert_eq!(model.param_2_name(), "mu");
    }
}
