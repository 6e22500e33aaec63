use super::{Lame, NewtonStatus};
use crate::base::Config;
use crate::util::{ReportSink, SweepRecord};
use crate::StrError;

/// Holds the counters of a stretch sweep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Number of load steps
    pub n_steps: usize,

    /// Number of steps handed to the report sink
    pub n_reported: usize,

    /// Number of converged steps that were filtered out (NaN force, first step, or force jump)
    pub n_dropped: usize,

    /// Number of steps with a singular Jacobian
    pub n_singular: usize,

    /// Number of steps that reached the iteration cap
    pub n_not_converged: usize,
}

/// Runs the Lame task over a sequence of axial stretches
///
/// Each step solves for (p0, C) starting from the last converged values. The axial force
/// of a converged step is reported according to [accept_force]. The invariants are
/// evaluated at the mid radius of the current geometry.
pub struct StretchSweep {
    lame: Lame,
    k_begin: f64,
    dk: f64,
    n_steps: usize,
    max_force_jump: f64,
    verbose: bool,
    p0: f64,
    c: f64,
}

impl StretchSweep {
    /// Allocates a new instance
    pub fn new(config: &Config) -> Result<Self, StrError> {
        let lame = Lame::new(config)?;
        Ok(StretchSweep {
            lame,
            k_begin: config.k_begin,
            dk: config.stretch_increment(),
            n_steps: config.n_steps,
            max_force_jump: config.max_force_jump,
            verbose: config.verbose_steps,
            p0: config.p0_ini,
            c: config.c_ini,
        })
    }

    /// Returns access to the Lame task
    pub fn lame(&self) -> &Lame {
        &self.lame
    }

    /// Returns mutable access to the Lame task (e.g., to change the material between sweeps)
    pub fn lame_mut(&mut self) -> &mut Lame {
        &mut self.lame
    }

    /// Returns the last converged p0 (or the initial guess)
    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Returns the last converged C (or the initial guess)
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the stretch at step i (i = 0 is the first solved step)
    pub fn stretch_at(&self, i: usize) -> f64 {
        self.k_begin + ((i + 1) as f64) * self.dk
    }

    /// Runs all load steps and hands the accepted records to the sink
    pub fn run(&mut self, sink: &mut dyn ReportSink) -> Result<SweepSummary, StrError> {
        let mut summary = SweepSummary {
            n_steps: self.n_steps,
            ..Default::default()
        };
        let mut force_prev = 0.0;
        self.print_header();
        for i in 0..self.n_steps {
            let k = self.stretch_at(i);
            self.lame.set_stretch(k)?;

            // solve starting from the last converged state
            let (mut p0, mut c) = (self.p0, self.c);
            let report = self.lame.calculate_p0_and_c(&mut p0, &mut c)?;
            match report.status {
                NewtonStatus::Converged => (),
                NewtonStatus::Singular => {
                    summary.n_singular += 1;
                    log::warn!("step {} (k = {}): singular Jacobian; step skipped", i, k);
                    self.print_failure(i, k, "singular");
                    continue;
                }
                NewtonStatus::NotConverged => {
                    summary.n_not_converged += 1;
                    log::warn!("step {} (k = {}): Newton's method did not converge; step skipped", i, k);
                    self.print_failure(i, k, "not converged");
                    continue;
                }
            }
            self.p0 = p0;
            self.c = c;

            // derived quantities
            let tzz = self.lame.axial_force(p0, c);
            let r_mid = (self.lame.model().r1() + self.lame.model().r2()) / 2.0;
            let inv = self.lame.invariants(r_mid, c);

            // filter
            let accepted = accept_force(&mut force_prev, tzz, self.max_force_jump, i);
            if accepted {
                sink.report(&SweepRecord {
                    k,
                    tzz,
                    i1: inv.i1,
                    i2: inv.i2,
                    i3: inv.i3,
                })?;
                summary.n_reported += 1;
            } else {
                summary.n_dropped += 1;
            }
            self.print_step(i, k, p0, c, tzz, report.iterations, accepted);
        }
        self.print_footer(&summary);
        log::info!(
            "sweep finished: {} steps, {} reported, {} dropped, {} singular, {} not converged",
            summary.n_steps,
            summary.n_reported,
            summary.n_dropped,
            summary.n_singular,
            summary.n_not_converged
        );
        Ok(summary)
    }

    fn print_header(&self) {
        if self.verbose {
            println!("{}", "─".repeat(86));
            println!(
                "{:>5} {:>11} {:>13} {:>13} {:>13} {:>5} {:>8}",
                "step", "k", "p0", "C", "Tzz", "iter", "reported"
            );
            println!("{}", "─".repeat(86));
        }
    }

    fn print_step(&self, i: usize, k: f64, p0: f64, c: f64, tzz: f64, iterations: usize, accepted: bool) {
        if self.verbose {
            let icon = if accepted { "✅" } else { "⛔" };
            println!(
                "{:>5} {:>11.6} {:>13.6e} {:>13.6e} {:>13.6e} {:>5} {:>8}",
                i, k, p0, c, tzz, iterations, icon
            );
        }
    }

    fn print_failure(&self, i: usize, k: f64, reason: &str) {
        if self.verbose {
            println!("{:>5} {:>11.6} {:>41} {:>5} {:>8}", i, k, reason, "-", "⛔");
        }
    }

    fn print_footer(&self, summary: &SweepSummary) {
        if self.verbose {
            println!("{}", "─".repeat(86));
            println!(
                "reported = {}, dropped = {}, singular = {}, not converged = {}",
                summary.n_reported, summary.n_dropped, summary.n_singular, summary.n_not_converged
            );
        }
    }
}

/// Decides whether the axial force of step `i` is reported
///
/// A NaN force is dropped and does not update `force_prev`. A finite force is reported
/// if `i > 0` and it differs from `force_prev` by less than `max_jump`; in any case it
/// becomes the new `force_prev`. The comparison starts from `force_prev = 0`.
pub fn accept_force(force_prev: &mut f64, tzz: f64, max_jump: f64, i: usize) -> bool {
    if !tzz.is_finite() {
        return false;
    }
    let ok = i > 0 && f64::abs(tzz - *force_prev) < max_jump;
    *force_prev = tzz;
    ok
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
