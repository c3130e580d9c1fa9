//! Scenario parameter sets: the editable assumptions behind each
//! dashboard, their slider bounds, and the distributions they
//! induce.
//!
//! Parameters are plain data. Moving a slider mutates a
//! [`BoundedParam`]; nothing is sampled until a pipeline stage asks
//! the parameter set for its distributions.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::sample::Distribution;

/// Degrees of freedom for point-estimate inputs (truck counts, opex
/// lines). A large df keeps the Student's t close to normal while
/// still allowing the occasional outlier year.
pub const POINT_ESTIMATE_DF: f64 = 100.0;

/// Inclusive slider bounds for one scalar input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validate `value` against these bounds. Non-finite values never
    /// pass, so a NaN cannot slide through the comparisons.
    pub fn check(&self, name: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(ModelError::InvalidParameter {
                name,
                value,
                reason: "value is outside its slider bounds",
            })
        }
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// A slider-backed scalar: the current value plus the range the UI
/// lets it move within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedParam {
    pub value: f64,
    pub bounds: Bounds,
}

impl BoundedParam {
    #[must_use]
    pub const fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            bounds: Bounds::new(min, max),
        }
    }

    /// The current value, validated against the bounds.
    pub fn checked(&self, name: &'static str) -> Result<f64> {
        self.bounds.check(name, self.value)
    }

    /// Move the value by `delta`, clamping at the bounds.
    pub fn step(&mut self, delta: f64) {
        self.value = self.bounds.clamp(self.value + delta);
    }
}

/// Assumptions for one ramp year of the fleet build-out.
///
/// The truck count is a Student's t point estimate; utilization is a
/// beta on `[floor, floor + spread]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetYearParams {
    pub year: u16,
    pub truck_mean: BoundedParam,
    pub utilization_alpha: BoundedParam,
    pub utilization_beta: BoundedParam,
    pub utilization_spread: BoundedParam,
    pub utilization_floor: f64,
}

impl FleetYearParams {
    /// Default ramp: a limited 2026 launch, early scale in 2027, and a
    /// full commercial network in 2028 with a higher utilization floor.
    #[must_use]
    pub fn ramp_years() -> [FleetYearParams; 3] {
        [
            FleetYearParams {
                year: 2026,
                truck_mean: BoundedParam::new(100.0, 50.0, 400.0),
                utilization_alpha: BoundedParam::new(3.0, 1.0, 20.0),
                utilization_beta: BoundedParam::new(6.0, 1.0, 20.0),
                utilization_spread: BoundedParam::new(0.1, 0.01, 0.2),
                utilization_floor: 0.2,
            },
            FleetYearParams {
                year: 2027,
                truck_mean: BoundedParam::new(500.0, 50.0, 1000.0),
                utilization_alpha: BoundedParam::new(3.0, 1.0, 20.0),
                utilization_beta: BoundedParam::new(3.0, 1.0, 20.0),
                utilization_spread: BoundedParam::new(0.1, 0.01, 0.2),
                utilization_floor: 0.2,
            },
            FleetYearParams {
                year: 2028,
                truck_mean: BoundedParam::new(1550.0, 50.0, 3000.0),
                utilization_alpha: BoundedParam::new(8.0, 1.0, 20.0),
                utilization_beta: BoundedParam::new(3.0, 1.0, 20.0),
                utilization_spread: BoundedParam::new(0.1, 0.01, 0.2),
                utilization_floor: 0.4,
            },
        ]
    }

    /// Check every slider value against its bounds.
    pub fn validate(&self) -> Result<()> {
        self.truck_mean.checked("truck_mean")?;
        self.utilization_alpha.checked("utilization_alpha")?;
        self.utilization_beta.checked("utilization_beta")?;
        self.utilization_spread.checked("utilization_spread")?;
        Ok(())
    }

    /// Distribution of trucks on the road this year.
    pub fn truck_distribution(&self) -> Result<Distribution> {
        Distribution::student_t(POINT_ESTIMATE_DF, self.truck_mean.value)
    }

    /// Distribution of average fleet utilization this year.
    pub fn utilization_distribution(&self) -> Result<Distribution> {
        Distribution::beta(
            self.utilization_alpha.value,
            self.utilization_beta.value,
            self.utilization_floor,
            self.utilization_spread.value,
        )
    }
}

/// Assumptions for one year of operating spend, in $mn. Both lines
/// are Student's t point estimates around a budgeted mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnYearParams {
    pub year: u16,
    pub research_mean: BoundedParam,
    pub selling_mean: BoundedParam,
}

impl BurnYearParams {
    /// Default five-year burn plan. R&D peaks in 2027 while the driver
    /// stack hardens, then settles into a steady run rate.
    #[must_use]
    pub fn burn_years() -> [BurnYearParams; 5] {
        [
            BurnYearParams {
                year: 2026,
                research_mean: BoundedParam::new(420.0, 300.0, 500.0),
                selling_mean: BoundedParam::new(62.0, 40.0, 80.0),
            },
            BurnYearParams {
                year: 2027,
                research_mean: BoundedParam::new(720.0, 400.0, 1000.0),
                selling_mean: BoundedParam::new(130.0, 120.0, 160.0),
            },
            BurnYearParams {
                year: 2028,
                research_mean: BoundedParam::new(700.0, 300.0, 1000.0),
                selling_mean: BoundedParam::new(160.0, 100.0, 250.0),
            },
            BurnYearParams {
                year: 2029,
                research_mean: BoundedParam::new(700.0, 300.0, 1000.0),
                selling_mean: BoundedParam::new(160.0, 100.0, 250.0),
            },
            BurnYearParams {
                year: 2030,
                research_mean: BoundedParam::new(700.0, 300.0, 1000.0),
                selling_mean: BoundedParam::new(160.0, 100.0, 250.0),
            },
        ]
    }

    pub fn validate(&self) -> Result<()> {
        self.research_mean.checked("research_mean")?;
        self.selling_mean.checked("selling_mean")?;
        Ok(())
    }

    /// Distribution of research and development spend, $mn.
    pub fn research_distribution(&self) -> Result<Distribution> {
        Distribution::student_t(POINT_ESTIMATE_DF, self.research_mean.value)
    }

    /// Distribution of selling, general and administrative spend, $mn.
    pub fn selling_distribution(&self) -> Result<Distribution> {
        Distribution::student_t(POINT_ESTIMATE_DF, self.selling_mean.value)
    }
}

/// Assumptions for the public-market valuation dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationParams {
    /// Current market capitalization, $mn.
    pub market_cap: BoundedParam,
    /// Per-year probability of a catastrophic, program-ending crash.
    pub disaster_probability: BoundedParam,
    /// Years of catastrophe exposure before the target year's revenue
    /// is in hand.
    pub years_exposed: BoundedParam,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self {
            market_cap: BoundedParam::new(2600.0, 500.0, 10_000.0),
            disaster_probability: BoundedParam::new(0.005, 0.001, 0.2),
            years_exposed: BoundedParam::new(4.0, 1.0, 10.0),
        }
    }
}

impl ValuationParams {
    pub fn validate(&self) -> Result<()> {
        self.market_cap.checked("market_cap")?;
        self.disaster_probability.checked("disaster_probability")?;
        self.years_exposed.checked("years_exposed")?;
        Ok(())
    }
}

/// Assumptions for steady-state fleet economics: what a truck on the
/// network earns and costs once the build-out is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsParams {
    pub truck_mean: BoundedParam,
    pub utilization_alpha: BoundedParam,
    pub utilization_beta: BoundedParam,
    pub utilization_spread: BoundedParam,
    pub utilization_floor: f64,
    pub rate_alpha: BoundedParam,
    pub rate_beta: BoundedParam,
    pub rate_spread: BoundedParam,
    pub rate_floor: f64,
    pub speed_alpha: BoundedParam,
    pub speed_beta: BoundedParam,
    pub speed_spread: BoundedParam,
    pub speed_floor: f64,
    /// Fraction of the fleet financed by lease rather than purchase.
    pub lease_share: BoundedParam,
    /// Gross margin share of revenue available to pay off the fleet.
    pub gross_margin: BoundedParam,
}

impl Default for EconomicsParams {
    fn default() -> Self {
        Self {
            truck_mean: BoundedParam::new(1000.0, 50.0, 3000.0),
            utilization_alpha: BoundedParam::new(8.0, 1.0, 20.0),
            utilization_beta: BoundedParam::new(3.0, 1.0, 20.0),
            utilization_spread: BoundedParam::new(0.1, 0.01, 0.2),
            utilization_floor: 0.4,
            rate_alpha: BoundedParam::new(4.0, 1.0, 20.0),
            rate_beta: BoundedParam::new(4.0, 1.0, 20.0),
            rate_spread: BoundedParam::new(0.2, 0.01, 0.5),
            rate_floor: 0.4,
            speed_alpha: BoundedParam::new(5.0, 1.0, 20.0),
            speed_beta: BoundedParam::new(5.0, 1.0, 20.0),
            speed_spread: BoundedParam::new(10.0, 1.0, 15.0),
            speed_floor: 55.0,
            lease_share: BoundedParam::new(0.5, 0.0, 1.0),
            gross_margin: BoundedParam::new(0.3, 0.0, 1.0),
        }
    }
}

impl EconomicsParams {
    pub fn validate(&self) -> Result<()> {
        self.truck_mean.checked("truck_mean")?;
        self.utilization_alpha.checked("utilization_alpha")?;
        self.utilization_beta.checked("utilization_beta")?;
        self.utilization_spread.checked("utilization_spread")?;
        self.rate_alpha.checked("rate_alpha")?;
        self.rate_beta.checked("rate_beta")?;
        self.rate_spread.checked("rate_spread")?;
        self.speed_alpha.checked("speed_alpha")?;
        self.speed_beta.checked("speed_beta")?;
        self.speed_spread.checked("speed_spread")?;
        self.lease_share.checked("lease_share")?;
        self.gross_margin.checked("gross_margin")?;
        Ok(())
    }

    pub fn truck_distribution(&self) -> Result<Distribution> {
        Distribution::student_t(POINT_ESTIMATE_DF, self.truck_mean.value)
    }

    /// Share of each truck-hour spent hauling revenue miles.
    pub fn utilization_distribution(&self) -> Result<Distribution> {
        Distribution::beta(
            self.utilization_alpha.value,
            self.utilization_beta.value,
            self.utilization_floor,
            self.utilization_spread.value,
        )
    }

    /// Realized rate per mile in dollars.
    pub fn rate_distribution(&self) -> Result<Distribution> {
        Distribution::beta(
            self.rate_alpha.value,
            self.rate_beta.value,
            self.rate_floor,
            self.rate_spread.value,
        )
    }

    /// Average loaded speed in miles per hour.
    pub fn speed_distribution(&self) -> Result<Distribution> {
        Distribution::beta(
            self.speed_alpha.value,
            self.speed_beta.value,
            self.speed_floor,
            self.speed_spread.value,
        )
    }
}
