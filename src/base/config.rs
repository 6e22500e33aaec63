use super::{check_exponent, check_radius, parse_model_name, ParamHyperelastic};
use super::{DEFAULT_EPS, DEFAULT_MAX_FORCE_JUMP, DEFAULT_N_INTEG_POINTS, DEFAULT_N_MAX_ITERATIONS};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the input data of a Lame task and its stretch sweep
///
/// The default values correspond to the reference problem: model B2 with μ = 200, β = 2,
/// r1 = 2, r2 = 2.5, no pressures, and k going from 1 to 5 in 400 steps.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Hyperelastic model and its two parameters
    pub model: ParamHyperelastic,

    /// Exponent of the model (1, 2, 4, or 5)
    pub n: i32,

    /// Inner reference radius
    pub r1: f64,

    /// Outer reference radius
    pub r2: f64,

    /// Inner pressure
    pub q1: f64,

    /// Outer pressure
    pub q2: f64,

    /// Initial stretch ratio of the sweep (the first solved step is k_begin + Δk)
    pub k_begin: f64,

    /// Final stretch ratio of the sweep
    pub k_end: f64,

    /// Number of load steps
    pub n_steps: usize,

    /// Initial guess of the reference pressure p0
    pub p0_ini: f64,

    /// Initial guess of the integration constant C
    pub c_ini: f64,

    /// Tolerance of the Newton iterations
    pub eps: f64,

    /// Number of points of the Simpson rule (odd)
    pub n_integ_points: usize,

    /// Maximum number of Newton iterations per load step
    pub n_max_iterations: usize,

    /// Maximum jump of the axial force between reported steps
    pub max_force_jump: f64,

    /// Prints the Newton iterations
    pub verbose_iterations: bool,

    /// Prints the load steps
    pub verbose_steps: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            model: ParamHyperelastic::ModelB { mu: 200.0, beta: 2.0 },
            n: 2,
            r1: 2.0,
            r2: 2.5,
            q1: 0.0,
            q2: 0.0,
            k_begin: 1.0,
            k_end: 5.0,
            n_steps: 400,
            p0_ini: 1.0,
            c_ini: 0.0,
            eps: DEFAULT_EPS,
            n_integ_points: DEFAULT_N_INTEG_POINTS,
            n_max_iterations: DEFAULT_N_MAX_ITERATIONS,
            max_force_jump: DEFAULT_MAX_FORCE_JUMP,
            verbose_iterations: false,
            verbose_steps: false,
        }
    }

    /// Sets the model and its parameters
    pub fn set_model(&mut self, model: ParamHyperelastic) -> Result<&mut Self, StrError> {
        let (p1, p2) = model.values();
        if !p1.is_finite() || !p2.is_finite() {
            return Err("material parameters must be finite");
        }
        self.model = model;
        Ok(self)
    }

    /// Sets the model using the "An" or "Bn" notation and the two parameters
    ///
    /// Model A: (λ, μ); Model B: (μ, β)
    pub fn set_model_name(&mut self, name: &str, param1: f64, param2: f64) -> Result<&mut Self, StrError> {
        let (letter, n) = parse_model_name(name)?;
        self.set_model(ParamHyperelastic::from_letter(letter, param1, param2)?)?;
        self.n = n;
        Ok(self)
    }

    /// Sets the exponent n
    pub fn set_exponent(&mut self, n: i32) -> Result<&mut Self, StrError> {
        check_exponent(n)?;
        self.n = n;
        Ok(self)
    }

    /// Sets the inner and outer reference radii
    pub fn set_radius(&mut self, r1: f64, r2: f64) -> Result<&mut Self, StrError> {
        check_radius(r1, r2)?;
        self.r1 = r1;
        self.r2 = r2;
        Ok(self)
    }

    /// Sets the inner and outer pressures
    pub fn set_pressures(&mut self, q1: f64, q2: f64) -> Result<&mut Self, StrError> {
        if !q1.is_finite() || !q2.is_finite() {
            return Err("pressures must be finite");
        }
        self.q1 = q1;
        self.q2 = q2;
        Ok(self)
    }

    /// Sets the stretch sweep
    pub fn set_stretch_sweep(&mut self, k_begin: f64, k_end: f64, n_steps: usize) -> Result<&mut Self, StrError> {
        check_sweep(k_begin, k_end, n_steps)?;
        self.k_begin = k_begin;
        self.k_end = k_end;
        self.n_steps = n_steps;
        Ok(self)
    }

    /// Sets the initial guess of (p0, C) for the first load step
    pub fn set_initial_guess(&mut self, p0: f64, c: f64) -> Result<&mut Self, StrError> {
        if !p0.is_finite() || !c.is_finite() {
            return Err("the initial guess must be finite");
        }
        self.p0_ini = p0;
        self.c_ini = c;
        Ok(self)
    }

    /// Sets the tolerance of the Newton iterations
    pub fn set_tolerance(&mut self, eps: f64) -> Result<&mut Self, StrError> {
        if !(eps > 0.0) {
            return Err("eps must be > 0.0");
        }
        self.eps = eps;
        Ok(self)
    }

    /// Sets the number of points of the Simpson rule
    pub fn set_n_integ_points(&mut self, n_integ_points: usize) -> Result<&mut Self, StrError> {
        check_n_integ_points(n_integ_points)?;
        self.n_integ_points = n_integ_points;
        Ok(self)
    }

    /// Sets the maximum number of Newton iterations
    pub fn set_n_max_iterations(&mut self, n_max_iterations: usize) -> Result<&mut Self, StrError> {
        if n_max_iterations < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = n_max_iterations;
        Ok(self)
    }

    /// Sets the maximum jump of the axial force between reported steps
    pub fn set_max_force_jump(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("max_force_jump must be > 0.0");
        }
        self.max_force_jump = value;
        Ok(self)
    }

    /// Sets the verbose flags
    pub fn set_verbose(&mut self, iterations: bool, steps: bool) -> Result<&mut Self, StrError> {
        self.verbose_iterations = iterations;
        self.verbose_steps = steps;
        Ok(self)
    }

    /// Validates all data (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        let (p1, p2) = self.model.values();
        if !p1.is_finite() || !p2.is_finite() {
            return Err("material parameters must be finite");
        }
        check_exponent(self.n)?;
        check_radius(self.r1, self.r2)?;
        if !self.q1.is_finite() || !self.q2.is_finite() {
            return Err("pressures must be finite");
        }
        check_sweep(self.k_begin, self.k_end, self.n_steps)?;
        if !self.p0_ini.is_finite() || !self.c_ini.is_finite() {
            return Err("the initial guess must be finite");
        }
        if !(self.eps > 0.0) {
            return Err("eps must be > 0.0");
        }
        check_n_integ_points(self.n_integ_points)?;
        if self.n_max_iterations < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        if !(self.max_force_jump > 0.0) {
            return Err("max_force_jump must be > 0.0");
        }
        Ok(())
    }

    /// Returns the increment of the stretch ratio in the sweep
    pub fn stretch_increment(&self) -> f64 {
        (self.k_end - self.k_begin) / (self.n_steps as f64)
    }

    /// Returns the representative radius (midpoint of [r1, r2]) for the invariants
    pub fn mid_radius(&self) -> f64 {
        (self.r1 + self.r2) / 2.0
    }

    /// Reads a JSON file containing the configuration (and validates it)
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn from_json_file<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        config.validate()?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json_file<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

fn check_sweep(k_begin: f64, k_end: f64, n_steps: usize) -> Result<(), StrError> {
    if !(k_begin > 0.0) || !(k_end > 0.0) {
        return Err("the stretch ratios must be > 0.0");
    }
    if n_steps < 1 {
        return Err("n_steps must be ≥ 1");
    }
    Ok(())
}

fn check_n_integ_points(n_integ_points: usize) -> Result<(), StrError> {
    if n_integ_points < 3 || n_integ_points % 2 == 0 {
        return Err("n_integ_points must be odd and ≥ 3");
    }
    Ok(())
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p1, p2) = self.model.values();
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "model = {}{}\n", self.model.letter(), self.n)?;
        write!(f, "parameters = ({:?}, {:?})\n", p1, p2)?;
        write!(f, "r1 = {:?}, r2 = {:?}\n", self.r1, self.r2)?;
        write!(f, "q1 = {:?}, q2 = {:?}\n", self.q1, self.q2)?;
        write!(f, "k: {:?} → {:?} in {} steps\n", self.k_begin, self.k_end, self.n_steps)?;
        write!(f, "p0_ini = {:?}, c_ini = {:?}\n", self.p0_ini, self.c_ini)?;
        write!(f, "eps = {:?}\n", self.eps)?;
        write!(f, "n_integ_points = {}\n", self.n_integ_points)?;
        write!(f, "n_max_iterations = {}\n", self.n_max_iterations)?;
        write!(f, "max_force_jump = {:?}\n", self.max_force_jump)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::{ParamHyperelastic, DEFAULT_TEST_DIR};

    #[test]
    fn new_works() {
        let config = Config::new();
        assert_eq!(config.model, ParamHyperelastic::ModelB { mu: 200.0, beta: 2.0 });
        assert_eq!(config.n, 2);
        assert_eq!(config.n_integ_points, 101);
        assert_eq!(config.eps, 1e-5);
        assert_eq!(config.stretch_increment(), 0.01);
        assert_eq!(config.mid_radius(), 2.25);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn setters_work() {
        let mut config = Config::new();
        config
            .set_model_name("a4", 2.0, 300.0)
            .unwrap()
            .set_radius(1.0, 3.0)
            .unwrap()
            .set_pressures(10.0, 1.0)
            .unwrap()
            .set_stretch_sweep(1.0, 2.0, 10)
            .unwrap()
            .set_initial_guess(-100.0, 0.1)
            .unwrap()
            .set_tolerance(1e-6)
            .unwrap()
            .set_n_integ_points(51)
            .unwrap()
            .set_n_max_iterations(30)
            .unwrap()
            .set_max_force_jump(1e4)
            .unwrap();
        assert_eq!(config.model, ParamHyperelastic::ModelA { lambda: 2.0, mu: 300.0 });
        assert_eq!(config.n, 4);
        assert_eq!((config.r1, config.r2), (1.0, 3.0));
        assert_eq!((config.q1, config.q2), (10.0, 1.0));
        assert_eq!((config.k_begin, config.k_end, config.n_steps), (1.0, 2.0, 10));
        assert_eq!((config.p0_ini, config.c_ini), (-100.0, 0.1));
        assert_eq!(config.eps, 1e-6);
        assert_eq!(config.n_integ_points, 51);
        assert_eq!(config.n_max_iterations, 30);
        assert_eq!(config.max_force_jump, 1e4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn setters_capture_errors() {
        let mut config = Config::new();
        assert_eq!(
            config.set_exponent(3).err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
        assert_eq!(config.set_radius(0.0, 1.0).err(), Some("r1 must be > 0.0"));
        assert_eq!(config.set_radius(2.0, 2.0).err(), Some("r2 must be > r1"));
        assert_eq!(config.set_pressures(f64::NAN, 0.0).err(), Some("pressures must be finite"));
        assert_eq!(
            config.set_stretch_sweep(0.0, 2.0, 10).err(),
            Some("the stretch ratios must be > 0.0")
        );
        assert_eq!(config.set_stretch_sweep(1.0, 2.0, 0).err(), Some("n_steps must be ≥ 1"));
        assert_eq!(config.set_tolerance(0.0).err(), Some("eps must be > 0.0"));
        assert_eq!(
            config.set_n_integ_points(100).err(),
            Some("n_integ_points must be odd and ≥ 3")
        );
        assert_eq!(config.set_n_integ_points(1).err(), Some("n_integ_points must be odd and ≥ 3"));
        assert_eq!(config.set_n_max_iterations(0).err(), Some("n_max_iterations must be ≥ 1"));
        assert_eq!(config.set_max_force_jump(-1.0).err(), Some("max_force_jump must be > 0.0"));
        assert!(config.set_model_name("B3", 1.0, 1.0).is_err());

        // the failed setters did not change anything
        assert_eq!(config.n, 2);
        assert_eq!(config.n_integ_points, 101);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_captures_errors() {
        let mut config = Config::new();
        config.n = 3;
        assert!(config.validate().is_err());
        config.n = 2;
        config.n_integ_points = 100;
        assert_eq!(config.validate().err(), Some("n_integ_points must be odd and ≥ 3"));
    }

    #[test]
    fn read_and_write_json_work() {
        let config = Config::from_json_file("data/tests/config_model_a.json").unwrap();
        assert_eq!(config.model, ParamHyperelastic::ModelA { lambda: 2.0, mu: 200.0 });
        assert_eq!(config.n, 4);
        assert_eq!(config.n_steps, 20);
        assert_eq!(config.n_integ_points, 101); // default

        let path = format!("{}/config_written.json", DEFAULT_TEST_DIR);
        config.write_json_file(&path).unwrap();
        let again = Config::from_json_file(&path).unwrap();
        assert_eq!(again.model, config.model);
        assert_eq!(again.k_end, config.k_end);

        assert_eq!(Config::from_json_file("__not_found__.json").err(), Some("file not found"));
        assert_eq!(
            Config::from_json_file("data/tests/config_invalid_n.json").err(),
            Some("n = 3 is not allowed because the stresses contain a 1/(n-3) factor")
        );
    }

    #[test]
    fn display_works() {
        let config = Config::new();
        let text = format!("{}", config);
        assert!(text.contains("model = B2"));
        assert!(text.contains("k: 1.0 → 5.0 in 400 steps"));
    }
}
