use rand::{Rng, distr::Distribution as _};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::variates::Variates;

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        })
    }
}

/// A parametric sampling distribution for one scenario input.
///
/// Parameters are validated at construction through [`Distribution::student_t`]
/// and [`Distribution::beta`]; a value built that way is drawable. Sampling
/// re-runs the same checks so that hand-built or deserialized values fail
/// identically instead of panicking inside `rand_distr`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Student's t centred on `loc`. With the large `df` the built-in
    /// scenarios use, this is close to normal with slightly heavier
    /// tails, which suits point estimates like truck counts and opex.
    StudentT { df: f64, loc: f64 },
    /// Beta on the interval `[loc, loc + scale]`. Used for inputs that
    /// live on a known bounded range, like utilization shares.
    Beta {
        alpha: f64,
        beta: f64,
        loc: f64,
        scale: f64,
    },
}

impl Distribution {
    /// Build a Student's t distribution, rejecting a non-positive `df`.
    pub fn student_t(df: f64, loc: f64) -> Result<Self> {
        let dist = Distribution::StudentT { df, loc };
        dist.validate()?;
        Ok(dist)
    }

    /// Build a shifted and scaled beta distribution, rejecting
    /// non-positive shape or scale parameters.
    pub fn beta(alpha: f64, beta: f64, loc: f64, scale: f64) -> Result<Self> {
        let dist = Distribution::Beta {
            alpha,
            beta,
            loc,
            scale,
        };
        dist.validate()?;
        Ok(dist)
    }

    /// Check the parameters against the mathematical domain of the
    /// family. `loc` is unchecked: a strange location shifts the
    /// samples, it does not make them undrawable.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Distribution::StudentT { df, .. } => check_positive("df", df),
            Distribution::Beta {
                alpha, beta, scale, ..
            } => {
                check_positive("alpha", alpha)?;
                check_positive("beta", beta)?;
                check_positive("scale", scale)
            }
        }
    }

    /// Draw `n` independent values from `rng`.
    ///
    /// The trial count is always the caller's explicit choice; zero is
    /// rejected rather than silently producing an empty array.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Variates> {
        self.validate()?;
        if n == 0 {
            return Err(ModelError::InvalidParameter {
                name: "n",
                value: 0.0,
                reason: "sample count must be at least 1",
            });
        }

        let mut values = Vec::with_capacity(n);
        match *self {
            Distribution::StudentT { df, loc } => {
                let dist =
                    rand_distr::StudentT::new(df).map_err(|_| ModelError::InvalidParameter {
                        name: "df",
                        value: df,
                        reason: "degrees of freedom must be positive and finite",
                    })?;
                for _ in 0..n {
                    values.push(loc + dist.sample(rng));
                }
            }
            Distribution::Beta {
                alpha,
                beta,
                loc,
                scale,
            } => {
                let dist = rand_distr::Beta::new(alpha, beta).map_err(|_| {
                    ModelError::InvalidParameter {
                        name: "alpha",
                        value: alpha,
                        reason: "shape parameters must be positive and finite",
                    }
                })?;
                for _ in 0..n {
                    values.push(loc + scale * dist.sample(rng));
                }
            }
        }
        Ok(Variates::from_vec(values))
    }
}
