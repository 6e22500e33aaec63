use super::{Config, ParamHyperelastic};

/// Holds samples of material parameters and configurations
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for model A (λ = 2, μ = 200)
    pub fn param_model_a() -> ParamHyperelastic {
        ParamHyperelastic::ModelA { lambda: 2.0, mu: 200.0 }
    }

    /// Returns sample parameters for model B (μ = 200, β = 2)
    pub fn param_model_b() -> ParamHyperelastic {
        ParamHyperelastic::ModelB { mu: 200.0, beta: 2.0 }
    }

    /// Returns the configuration of the reference problem with a given model and exponent
    ///
    /// The tube has r1 = 2 and r2 = 2.5, no pressures, and k goes from 1 to 5 in 400 steps.
    pub fn config_reference(model: ParamHyperelastic, n: i32) -> Config {
        let mut config = Config::new();
        config.model = model;
        config.n = n;
        config
    }
}
