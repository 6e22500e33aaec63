use super::PrincipalStressTrait;
use crate::base::{check_exponent, principal_stretches};
use crate::StrError;

/// Implements the hyperelastic model B
///
/// With the principal stretches λ = (r/(f k), f/r, k) and e = n - 3:
///
/// ```text
/// Pσᵢ = μ e λᵢ^(e-1) (1 + β + (1 - β) (λⱼ^e + λₖ^e))
/// ```
///
/// where j and k are the two other directions.
pub struct ModelB {
    mu: f64,
    beta: f64,
    n: i32,
}

impl ModelB {
    /// Allocates a new instance
    pub fn new(mu: f64, beta: f64, n: i32) -> Result<Self, StrError> {
        check_exponent(n)?;
        Ok(ModelB { mu, beta, n })
    }

    /// Computes the component associated with the i-th principal stretch
    fn component(&self, i: usize, r: f64, k: f64, c: f64) -> f64 {
        let e = self.n - 3;
        let l = principal_stretches(r, k, c);
        let others: f64 = (0..3).filter(|j| *j != i).map(|j| l[j].powi(e)).sum();
        self.mu * (e as f64) * l[i].powi(e - 1) * (1.0 + self.beta + (1.0 - self.beta) * others)
    }
}

impl PrincipalStressTrait for ModelB {
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
        self.mu = param1;
        self.beta = param2;
    }

    fn set_exponent(&mut self, n: i32) -> Result<(), StrError> {
        check_exponent(n)?;
        self.n = n;
        Ok(())
    }

    fn model_name(&self) -> &'static str {
        "B"
    }

    fn param_1_name(&self) -> &'static str {
        "mu"
    }

    fn param_2_name(&self) -> &'static str {
        "betta"
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelB;
    use crate::material::PrincipalStressTrait;
    use russell_lab::approx_eq;

    #[test]
    fn new_rejects_n_equal_to_3() {
        assert_eq!(
            ModelB::new(200.0, 2.0, 3).err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
        let mut model = ModelB::new(200.0, 2.0, 5).unwrap();
        assert!(model.set_exponent(3).is_err());
        assert_eq!(model.n, 5);
    }

    #[test]
    fn stresses_without_deformation_are_isotropic() {
        // λ = (1, 1, 1) ⇒ Pσ = μ e (1 + β + 2 (1 - β)) = μ e (3 - β)
        for n in [1, 2, 4, 5] {
            let model = ModelB::new(200.0, 2.0, n).unwrap();
            let correct = 200.0 * ((n - 3) as f64) * (3.0 - 2.0);
            approx_eq(model.ps_r(2.0, 1.0, 0.0), correct, 1e-12);
            approx_eq(model.ps_phi(2.0, 1.0, 0.0), correct, 1e-12);
            approx_eq(model.ps_z(2.0, 1.0, 0.0), correct, 1e-12);
        }
    }

    #[test]
    fn stresses_are_correct() {
        // r = 2, k = 4, C = 0 ⇒ λ = (0.5, 0.5, 4)
        // n = 5 ⇒ e = 2
        let mut model = ModelB::new(200.0, 2.0, 5).unwrap();
        approx_eq(model.ps_r(2.0, 4.0, 0.0), 200.0 * 2.0 * 0.5 * (3.0 - (0.25 + 16.0)), 1e-11);
        approx_eq(model.ps_phi(2.0, 4.0, 0.0), 200.0 * 2.0 * 0.5 * (3.0 - (0.25 + 16.0)), 1e-11);
        approx_eq(model.ps_z(2.0, 4.0, 0.0), 200.0 * 2.0 * 4.0 * (3.0 - (0.25 + 0.25)), 1e-11);

        // β = 1 removes the coupling: Pσz = μ e λz^(e-1) 2
        model.set_params(100.0, 1.0);
        approx_eq(model.ps_z(2.0, 4.0, 0.0), 100.0 * 2.0 * 4.0 * 2.0, 1e-12);
    }

    #[test]
    fn stresses_are_nan_outside_the_domain() {
        let model = ModelB::new(200.0, 2.0, 2).unwrap();
        assert!(model.ps_r(2.0, 1.0, -5.0).is_nan());
        assert!(model.ps_phi(2.0, 1.0, -5.0).is_nan());
        assert!(model.ps_z(2.0, 1.0, -5.0).is_nan());
    }

    #[test]
    fn names_work() {
        let model = ModelB::new(200.0, 2.0, 2).unwrap();
        assert_eq!(model.model_name(), "B");
        assert_eq!(model.param_1_name(), "mu");
        assert_eq!(model.param_2_name(), "betta");
    }
}
