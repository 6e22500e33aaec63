use crate::StrError;
use russell_lab::{mat_vec_mul, Matrix, Vector};

/// Specifies the two residual equations in the unknowns (p0, C)
///
/// The derivatives with respect to p0 are analytical; the derivatives with respect
/// to C are computed numerically by [NewtonSolver2::jacobian].
pub trait BoundaryResiduals {
    /// Returns the first residual F1(p0, C)
    fn f1(&self, p0: f64, c: f64) -> f64;

    /// Returns the second residual F2(p0, C)
    fn f2(&self, p0: f64, c: f64) -> f64;

    /// Returns ∂F1/∂p0
    fn df1_dp0(&self, p0: f64, c: f64) -> f64;

    /// Returns ∂F2/∂p0
    fn df2_dp0(&self, p0: f64, c: f64) -> f64;

    /// Indicates whether an updated C may be accepted
    ///
    /// If not, the previous C is kept (the p0 update is still applied).
    fn admissible_c(&self, _c: f64) -> bool {
        true
    }
}

/// Defines the outcome of the Newton iterations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewtonStatus {
    /// Both corrections are smaller than the tolerance
    Converged,

    /// The determinant of the Jacobian matrix is smaller than the tolerance (or NaN)
    Singular,

    /// The maximum number of iterations has been reached
    NotConverged,
}

/// Holds the result of a Newton solve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonReport {
    /// Outcome
    pub status: NewtonStatus,

    /// Number of iterations performed (index of the failing iteration if singular)
    pub iterations: usize,

    /// Number of rejected C-updates
    pub n_rejected_c: usize,
}

/// Implements Newton's method for two equations in (p0, C)
///
/// The Jacobian matrix is
///
/// ```text
///     ┌                   ┐
///     │ ∂F1/∂p0   ∂F1/∂C  │
/// J = │                   │
///     │ ∂F2/∂p0   ∂F2/∂C  │
///     └                   ┘
/// ```
///
/// and the corrections are `(Δp0, ΔC) = -J⁻¹ (F1, F2)`.
pub struct NewtonSolver2 {
    eps: f64,
    n_max_iterations: usize,
    verbose: bool,
}

impl NewtonSolver2 {
    /// Allocates a new instance
    ///
    /// * `eps` -- tolerance on the corrections and on the determinant of J
    /// * `n_max_iterations` -- maximum number of iterations
    /// * `verbose` -- prints the iterations
    pub fn new(eps: f64, n_max_iterations: usize, verbose: bool) -> Result<Self, StrError> {
        if !(eps > 0.0) {
            return Err("eps must be > 0.0");
        }
        if n_max_iterations < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        Ok(NewtonSolver2 {
            eps,
            n_max_iterations,
            verbose,
        })
    }

    /// Returns the tolerance
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Computes the Jacobian matrix
    ///
    /// The derivatives with respect to C use the four-point formula with `h = eps/100`:
    ///
    /// ```text
    /// ∂F/∂C ≈ (-F(C+2h) + 27 F(C+h) - 27 F(C) + F(C-h)) / (24 h)
    /// ```
    pub fn jacobian<R>(&self, jj: &mut Matrix, residuals: &R, p0: f64, c: f64)
    where
        R: BoundaryResiduals + ?Sized,
    {
        let h = self.eps / 100.0;
        jj.set(0, 0, residuals.df1_dp0(p0, c));
        jj.set(0, 1, derivative_wrt_c(h, c, |cc| residuals.f1(p0, cc)));
        jj.set(1, 0, residuals.df2_dp0(p0, c));
        jj.set(1, 1, derivative_wrt_c(h, c, |cc| residuals.f2(p0, cc)));
    }

    /// Runs the iterations, updating p0 and C in place
    ///
    /// On a singular Jacobian the iterations stop immediately and p0 and C keep the
    /// values they had when the singularity was detected.
    pub fn solve<R>(&self, residuals: &R, p0: &mut f64, c: &mut f64) -> Result<NewtonReport, StrError>
    where
        R: BoundaryResiduals + ?Sized,
    {
        let mut jj = Matrix::new(2, 2);
        let mut jj_inv = Matrix::new(2, 2);
        let mut rr = Vector::new(2);
        let mut mdx = Vector::new(2);
        let mut n_rejected_c = 0;
        self.print_header(*p0, *c);
        for iteration in 0..self.n_max_iterations {
            // Jacobian and its inverse
            self.jacobian(&mut jj, residuals, *p0, *c);
            if inverse_2x2(&mut jj_inv, &jj, self.eps).is_none() {
                log::warn!("singular Jacobian matrix obtained at iteration {}; calculation stopped", iteration);
                self.print_footer();
                return Ok(NewtonReport {
                    status: NewtonStatus::Singular,
                    iterations: iteration,
                    n_rejected_c,
                });
            }

            // corrections
            rr[0] = residuals.f1(*p0, *c);
            rr[1] = residuals.f2(*p0, *c);
            mat_vec_mul(&mut mdx, -1.0, &jj_inv, &rr)?;
            let (dp0, dc) = (mdx[0], mdx[1]);

            // updates
            *p0 += dp0;
            let accepted = residuals.admissible_c(*c + dc);
            if accepted {
                *c += dc;
            } else {
                n_rejected_c += 1;
                log::warn!("iteration {}: rejected ΔC = {:e}; keeping the previous C = {:e}", iteration, dc, *c);
            }
            log::debug!("iteration {}: Δp0 = {:e}, p0 = {:e}, ΔC = {:e}, C = {:e}", iteration, dp0, *p0, dc, *c);
            self.print_iteration(iteration, dp0, dc, *p0, *c, accepted);

            // check convergence
            if f64::abs(dp0) <= self.eps && f64::abs(dc) <= self.eps {
                self.print_footer();
                return Ok(NewtonReport {
                    status: NewtonStatus::Converged,
                    iterations: iteration + 1,
                    n_rejected_c,
                });
            }
        }
        log::warn!("Newton's method did not converge after {} iterations", self.n_max_iterations);
        self.print_footer();
        Ok(NewtonReport {
            status: NewtonStatus::NotConverged,
            iterations: self.n_max_iterations,
            n_rejected_c,
        })
    }

    /// Prints the header of the iterations table
    fn print_header(&self, p0: f64, c: f64) {
        if self.verbose {
            println!("Calculating p0 and C (Newton's method); initial: p0 = {:e}, C = {:e}", p0, c);
            println!("{}", "─".repeat(79));
            println!("{:>5} {:>13} {:>13} {:>13} {:>13} {:>4}", "iter", "Δp0", "p0", "ΔC", "C", "C ok");
            println!("{}", "─".repeat(79));
        }
    }

    /// Prints one line of the iterations table
    fn print_iteration(&self, iteration: usize, dp0: f64, dc: f64, p0: f64, c: f64, accepted: bool) {
        if self.verbose {
            let icon = if accepted { "✅" } else { "🔙" };
            println!(
                "{:>5} {:>13.6e} {:>13.6e} {:>13.6e} {:>13.6e} {:>4}",
                iteration, dp0, p0, dc, c, icon
            );
        }
    }

    /// Prints the footer of the iterations table
    fn print_footer(&self) {
        if self.verbose {
            println!("{}", "─".repeat(79));
        }
    }
}

/// Computes the inverse of a 2×2 matrix by the cofactor formula
///
/// Returns the determinant, or None if |det| < tol or if the result contains NaN.
pub fn inverse_2x2(jj_inv: &mut Matrix, jj: &Matrix, tol: f64) -> Option<f64> {
    let (a, b) = (jj.get(0, 0), jj.get(0, 1));
    let (c, d) = (jj.get(1, 0), jj.get(1, 1));
    let det = a * d - b * c;
    if !(f64::abs(det) >= tol) {
        return None;
    }
    let inv = [d / det, -b / det, -c / det, a / det];
    if inv.iter().any(|v| v.is_nan()) {
        return None;
    }
    jj_inv.set(0, 0, inv[0]);
    jj_inv.set(0, 1, inv[1]);
    jj_inv.set(1, 0, inv[2]);
    jj_inv.set(1, 1, inv[3]);
    Some(det)
}

/// Computes the derivative of g with respect to C with the four-point formula
fn derivative_wrt_c<G>(h: f64, c: f64, g: G) -> f64
where
    G: Fn(f64) -> f64,
{
    (-g(c + 2.0 * h) + 27.0 * g(c + h) - 27.0 * g(c) + g(c - h)) / (24.0 * h)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
