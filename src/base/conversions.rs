use russell_lab::math::PI;

/// Returns the engineering strain `(L - L0) / L0 = k - 1`
pub fn strain_eng(k: f64) -> f64 {
    k - 1.0
}

/// Returns the true (logarithmic) strain `ln(L / L0) = ln(k)`
pub fn strain_true(k: f64) -> f64 {
    f64::ln(k)
}

/// Returns the stretch ratio k corresponding to an engineering strain
pub fn k_from_strain_eng(strain: f64) -> f64 {
    strain + 1.0
}

/// Returns the stretch ratio k corresponding to a true strain
pub fn k_from_strain_true(strain: f64) -> f64 {
    f64::exp(strain)
}

/// Returns the engineering stress `F / A0` with `A0 = 2π (r2 - r1)`
pub fn stress_eng(force: f64, r1: f64, r2: f64) -> f64 {
    force / reference_area(r1, r2)
}

/// Returns the true stress `k F / A0` (assuming incompressibility)
pub fn stress_true(force: f64, k: f64, r1: f64, r2: f64) -> f64 {
    k * stress_eng(force, r1, r2)
}

/// Returns the axial force corresponding to an engineering stress
pub fn force_from_stress_eng(stress: f64, r1: f64, r2: f64) -> f64 {
    stress * reference_area(r1, r2)
}

/// Returns the axial force corresponding to a true stress
pub fn force_from_stress_true(stress: f64, k: f64, r1: f64, r2: f64) -> f64 {
    force_from_stress_eng(stress, r1, r2) / k
}

#[inline]
fn reference_area(r1: f64, r2: f64) -> f64 {
    2.0 * PI * (r2 - r1)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::approx_eq;

    #[test]
    fn strain_conversions_work() {
        for k in [0.25, 1.0, 1.5, 5.0] {
            assert_eq!(strain_eng(k), k - 1.0);
            assert_eq!(k_from_strain_eng(strain_eng(k)), k);
            approx_eq(k_from_strain_true(strain_true(k)), k, 1e-15);
        }
        assert_eq!(strain_true(1.0), 0.0);
    }

    #[test]
    fn stress_conversions_work() {
        let (r1, r2, k) = (2.0, 2.5, 1.5);
        let force = 100.0;
        let area = 2.0 * std::f64::consts::PI * 0.5;
        approx_eq(stress_eng(force, r1, r2), force / area, 1e-13);
        approx_eq(stress_true(force, k, r1, r2), k * force / area, 1e-13);
        approx_eq(force_from_stress_eng(stress_eng(force, r1, r2), r1, r2), force, 1e-12);
        approx_eq(force_from_stress_true(stress_true(force, k, r1, r2), k, r1, r2), force, 1e-12);
    }
}
