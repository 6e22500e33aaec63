/// Returns the radicand of the radius mapping
///
/// ```text
/// r²/k + C
/// ```
#[inline]
pub fn mapping_radicand(r: f64, k: f64, c: f64) -> f64 {
    r * r / k + c
}

/// Computes the current radius associated with the reference radius `r`
///
/// ```text
/// f(r, k, C) = √(r²/k + C)
/// ```
///
/// A negative radicand is not an error: a warning is emitted and NaN is returned
/// so that the dependent stresses, pressures, and forces become NaN as well.
///
/// * `r` -- reference radius
/// * `k` -- axial stretch ratio (> 0)
/// * `c` -- integration constant C
pub fn current_radius(r: f64, k: f64, c: f64) -> f64 {
    let radicand = mapping_radicand(r, k, c);
    if radicand < 0.0 {
        log::warn!("negative radicand in f(r,k,C): r = {}, r²/k = {}, C = {}", r, r * r / k, c);
        return f64::NAN;
    }
    f64::sqrt(radicand)
}

/// Returns the principal stretches (radial, hoop, axial)
///
/// ```text
/// λr = r / (f k)    λφ = f / r    λz = k
/// ```
pub fn principal_stretches(r: f64, k: f64, c: f64) -> [f64; 3] {
    let f = current_radius(r, k, c);
    [r / (f * k), f / r, k]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
