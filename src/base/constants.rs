/// Defines the directory where the report files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/lamesim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/lamesim/test";

/// Default tolerance for the Newton iterations (also used to detect singular Jacobians)
pub const DEFAULT_EPS: f64 = 1e-5;

/// Default number of points for the composite Simpson rule
pub const DEFAULT_N_INTEG_POINTS: usize = 101;

/// Default maximum number of Newton iterations per load step
pub const DEFAULT_N_MAX_ITERATIONS: usize = 100;

/// Default maximum allowed jump of the axial force between two reported steps
pub const DEFAULT_MAX_FORCE_JUMP: f64 = 1e5;
