use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the hyperelastic models
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamHyperelastic {
    /// Model A (Lamé-like constants)
    ModelA {
        /// λ parameter (first)
        lambda: f64,

        /// μ parameter (second)
        mu: f64,
    },

    /// Model B
    ModelB {
        /// μ parameter (first)
        mu: f64,

        /// β parameter (second)
        beta: f64,
    },
}

impl ParamHyperelastic {
    /// Returns the letter identifying the model ('A' or 'B')
    pub fn letter(&self) -> char {
        match self {
            ParamHyperelastic::ModelA { .. } => 'A',
            ParamHyperelastic::ModelB { .. } => 'B',
        }
    }

    /// Returns the two parameters in the model's own order
    ///
    /// Model A: (λ, μ); Model B: (μ, β)
    pub fn values(&self) -> (f64, f64) {
        match *self {
            ParamHyperelastic::ModelA { lambda, mu } => (lambda, mu),
            ParamHyperelastic::ModelB { mu, beta } => (mu, beta),
        }
    }

    /// Returns the names of the two parameters (same order as `values`)
    pub fn names(&self) -> (&'static str, &'static str) {
        match self {
            ParamHyperelastic::ModelA { .. } => ("lambda", "mu"),
            ParamHyperelastic::ModelB { .. } => ("mu", "betta"),
        }
    }

    /// Allocates parameters from the model letter ('A' or 'B', case-insensitive)
    pub fn from_letter(letter: char, param1: f64, param2: f64) -> Result<Self, StrError> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(ParamHyperelastic::ModelA {
                lambda: param1,
                mu: param2,
            }),
            'B' => Ok(ParamHyperelastic::ModelB {
                mu: param1,
                beta: param2,
            }),
            _ => Err("the model letter must be A or B"),
        }
    }
}

/// Checks the exponent n of the hyperelastic models
///
/// Only n ∈ {1, 2, 4, 5} is allowed; n = 3 yields a singular 1/(n-3) factor.
pub fn check_exponent(n: i32) -> Result<(), StrError> {
    if n == 3 {
        return Err("n = 3 is not allowed because the stresses contain a 1/(n-3) factor");
    }
    if !(n == 1 || n == 2 || n == 4 || n == 5) {
        return Err("n must be 1, 2, 4, or 5");
    }
    Ok(())
}

/// Checks the inner and outer reference radii (0 < r1 < r2)
pub(crate) fn check_radius(r1: f64, r2: f64) -> Result<(), StrError> {
    if !(r1 > 0.0) {
        return Err("r1 must be > 0.0");
    }
    if !(r2 > r1) {
        return Err("r2 must be > r1");
    }
    Ok(())
}

/// Parses a model name such as "A2" or "b5" into (letter, n)
///
/// The letter is returned in uppercase.
pub fn parse_model_name(name: &str) -> Result<(char, i32), StrError> {
    let mut chars = name.trim().chars();
    let letter = match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&'A') || c.eq_ignore_ascii_case(&'B') => c.to_ascii_uppercase(),
        _ => return Err("the model name must be in the form 'An' or 'Bn' with n ∈ {1, 2, 4, 5}"),
    };
    let rest: String = chars.collect();
    if rest.len() != 1 {
        return Err("the model name must be in the form 'An' or 'Bn' with n ∈ {1, 2, 4, 5}");
    }
    let n: i32 = rest
        .parse()
        .map_err(|_| "the model name must be in the form 'An' or 'Bn' with n ∈ {1, 2, 4, 5}")?;
    check_exponent(n)?;
    Ok((letter, n))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
