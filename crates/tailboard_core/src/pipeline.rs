//! Named pipeline stages behind each dashboard.
//!
//! Every stage is a pure function from a parameter set, an RNG, and an
//! explicit trial count to a typed bundle of variate arrays. Stages
//! validate their parameters, draw fresh samples, and compose the
//! results element-wise; they never touch a terminal. Display happens
//! through [`DistributionSink`], with titles and summary statistics
//! computed here so sinks stay dumb.

use rand::Rng;

use crate::compose;
use crate::error::{ModelError, Result};
use crate::scenario::{BurnYearParams, EconomicsParams, FleetYearParams, ValuationParams};
use crate::sink::DistributionSink;
use crate::stats;
use crate::variates::Variates;

/// One ramp year's sampled inputs and derived revenue.
#[derive(Debug, Clone)]
pub struct FleetYearOutput {
    pub year: u16,
    pub trucks: Variates,
    pub utilization: Variates,
    /// Annual revenue in raw dollars.
    pub revenue: Variates,
}

/// Sample one ramp year and derive its hours-based revenue.
pub fn fleet_year<R: Rng + ?Sized>(
    params: &FleetYearParams,
    rng: &mut R,
    n: usize,
) -> Result<FleetYearOutput> {
    params.validate()?;
    let trucks = params.truck_distribution()?.sample(rng, n)?;
    let utilization = params.utilization_distribution()?.sample(rng, n)?;
    let revenue = compose::revenue_hours(&utilization, &trucks)?;
    Ok(FleetYearOutput {
        year: params.year,
        trucks,
        utilization,
        revenue,
    })
}

impl FleetYearOutput {
    /// Push this year's charts, revenue converted to $mn for display.
    pub fn present(&self, sink: &mut dyn DistributionSink) {
        let year = self.year;
        sink.visualize(
            &self.trucks,
            &format!(
                "Trucks on the road in {year}, mean {:.0}",
                stats::mean(self.trucks.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.utilization,
            &format!(
                "Fleet utilization in {year}, mean {:.2}",
                stats::mean(self.utilization.as_slice())
            ),
            None,
        );
        let revenue_mn = self.revenue.scaled(compose::DOLLARS_TO_MILLIONS);
        sink.visualize(
            &revenue_mn,
            &format!(
                "ARR in {year} ($mn), mean {:.1}",
                stats::mean(revenue_mn.as_slice())
            ),
            None,
        );
    }
}

/// One burn year's sampled spend lines and their total.
#[derive(Debug, Clone)]
pub struct BurnYearOutput {
    pub year: u16,
    pub research: Variates,
    pub selling: Variates,
    /// Total operating spend for the year, $mn.
    pub opex: Variates,
}

/// Sample one burn year's R&D and SG&A lines and sum them.
pub fn burn_year<R: Rng + ?Sized>(
    params: &BurnYearParams,
    rng: &mut R,
    n: usize,
) -> Result<BurnYearOutput> {
    params.validate()?;
    let research = params.research_distribution()?.sample(rng, n)?;
    let selling = params.selling_distribution()?.sample(rng, n)?;
    let opex = compose::opex(&research, &selling)?;
    Ok(BurnYearOutput {
        year: params.year,
        research,
        selling,
        opex,
    })
}

/// The full multi-year burn picture.
#[derive(Debug, Clone)]
pub struct TotalBurnOutput {
    pub years: Vec<BurnYearOutput>,
    /// Element-wise total burn across the horizon, $mn.
    pub total: Variates,
}

/// Sample every burn year and aggregate the horizon total. The year
/// list must not be empty.
pub fn total_burn<R: Rng + ?Sized>(
    params: &[BurnYearParams],
    rng: &mut R,
    n: usize,
) -> Result<TotalBurnOutput> {
    if params.is_empty() {
        return Err(ModelError::InvalidParameter {
            name: "years",
            value: 0.0,
            reason: "burn horizon needs at least one year",
        });
    }

    let mut years = Vec::with_capacity(params.len());
    for p in params {
        years.push(burn_year(p, rng, n)?);
    }
    let total = compose::aggregate(years.iter().map(|y| &y.opex))?;
    Ok(TotalBurnOutput { years, total })
}

impl TotalBurnOutput {
    /// Push one chart per year, then the horizon total.
    pub fn present(&self, sink: &mut dyn DistributionSink) {
        for year in &self.years {
            sink.visualize(
                &year.opex,
                &format!(
                    "Opex burn in {} ($mn), mean {:.1}",
                    year.year,
                    stats::mean(year.opex.as_slice())
                ),
                None,
            );
        }
        let span = match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => format!("{}-{}", first.year, last.year),
            _ => String::from("horizon"),
        };
        sink.visualize(
            &self.total,
            &format!(
                "Total burn {span} ($mn), mean {:.1}",
                stats::mean(self.total.as_slice())
            ),
            None,
        );
    }
}

/// Valuation multiples for the target year, plus the survival scalar.
#[derive(Debug, Clone)]
pub struct ValuationOutput {
    pub year: u16,
    /// Target-year ARR, $mn.
    pub revenue: Variates,
    /// Target-year opex, $mn.
    pub opex: Variates,
    /// Target-year EBITDA, $mn.
    pub ebitda: Variates,
    pub price_to_arr: Variates,
    pub price_to_ebitda: Variates,
    /// Probability that no catastrophe hits during the exposure window.
    pub survival: f64,
    /// Price/ARR with revenue haircut by the survival probability.
    pub adjusted_price_to_arr: Variates,
}

/// Derive the valuation picture from the target ramp year and its
/// matching burn year.
///
/// EBITDA only means something when revenue and opex describe the same
/// year, so a fleet/burn year mismatch is rejected up front.
pub fn valuation<R: Rng + ?Sized>(
    fleet: &FleetYearParams,
    burn: &BurnYearParams,
    params: &ValuationParams,
    rng: &mut R,
    n: usize,
) -> Result<ValuationOutput> {
    if fleet.year != burn.year {
        return Err(ModelError::InvalidParameter {
            name: "burn_year",
            value: f64::from(burn.year),
            reason: "burn assumptions must come from the valuation target year",
        });
    }
    params.validate()?;

    let fleet_out = fleet_year(fleet, rng, n)?;
    let burn_out = burn_year(burn, rng, n)?;

    let market_cap = params.market_cap.value;
    let revenue = fleet_out.revenue.scaled(compose::DOLLARS_TO_MILLIONS);
    let ebitda = compose::ebitda(&revenue, &burn_out.opex)?;
    let price_to_arr = compose::price_multiple(market_cap, &revenue);
    let price_to_ebitda = compose::price_multiple(market_cap, &ebitda);
    let survival = compose::survival_probability(
        params.disaster_probability.value,
        params.years_exposed.value.round() as u32,
    );
    let adjusted_price_to_arr = compose::disaster_adjusted_multiple(market_cap, survival, &revenue);

    Ok(ValuationOutput {
        year: fleet_out.year,
        revenue,
        opex: burn_out.opex,
        ebitda,
        price_to_arr,
        price_to_ebitda,
        survival,
        adjusted_price_to_arr,
    })
}

impl ValuationOutput {
    /// Push the valuation charts. The adjusted multiple carries the
    /// unadjusted Price/ARR as a secondary overlay for comparison.
    pub fn present(&self, sink: &mut dyn DistributionSink) {
        let year = self.year;
        sink.visualize(
            &self.revenue,
            &format!(
                "ARR in {year} ($mn), mean {:.1}",
                stats::mean(self.revenue.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.opex,
            &format!(
                "Opex in {year} ($mn), mean {:.1}",
                stats::mean(self.opex.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.ebitda,
            &format!(
                "EBITDA in {year} ($mn), mean {:.1}",
                stats::mean(self.ebitda.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.price_to_arr,
            &format!(
                "Price/ARR in {year}, mean {:.1}x",
                stats::mean(self.price_to_arr.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.price_to_ebitda,
            &format!(
                "Price/EBITDA in {year}, mean {:.1}x",
                stats::mean(self.price_to_ebitda.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.adjusted_price_to_arr,
            &format!(
                "Disaster-adjusted Price/ARR in {year}, mean {:.1}x",
                stats::mean(self.adjusted_price_to_arr.as_slice())
            ),
            Some(&self.price_to_arr),
        );
    }
}

/// Steady-state unit economics for the fleet.
#[derive(Debug, Clone)]
pub struct EconomicsOutput {
    pub trucks: Variates,
    pub utilization: Variates,
    pub rate_per_mile: Variates,
    pub average_speed: Variates,
    /// Rate-based ARR, $mn.
    pub revenue: Variates,
    /// Up-front fleet acquisition cost, $mn.
    pub fleet_cost: Variates,
    /// Years until gross profit covers the fleet cost.
    pub payoff_years: Variates,
}

/// Sample the rate-based revenue model and derive fleet cost and
/// payoff time.
pub fn economics<R: Rng + ?Sized>(
    params: &EconomicsParams,
    rng: &mut R,
    n: usize,
) -> Result<EconomicsOutput> {
    params.validate()?;
    let trucks = params.truck_distribution()?.sample(rng, n)?;
    let utilization = params.utilization_distribution()?.sample(rng, n)?;
    let rate_per_mile = params.rate_distribution()?.sample(rng, n)?;
    let average_speed = params.speed_distribution()?.sample(rng, n)?;

    let revenue = compose::revenue_rate(&utilization, &rate_per_mile, &average_speed, &trucks)?;
    let fleet_cost = compose::fleet_cost(params.lease_share.value, &trucks);
    let payoff_years = compose::payoff_years(&fleet_cost, &revenue, params.gross_margin.value)?;

    Ok(EconomicsOutput {
        trucks,
        utilization,
        rate_per_mile,
        average_speed,
        revenue,
        fleet_cost,
        payoff_years,
    })
}

impl EconomicsOutput {
    pub fn present(&self, sink: &mut dyn DistributionSink) {
        sink.visualize(
            &self.rate_per_mile,
            &format!(
                "Rate per mile ($), mean {:.2}",
                stats::mean(self.rate_per_mile.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.average_speed,
            &format!(
                "Average speed (mph), mean {:.1}",
                stats::mean(self.average_speed.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.utilization,
            &format!(
                "Fleet utilization, mean {:.2}",
                stats::mean(self.utilization.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.revenue,
            &format!(
                "Rate-based ARR ($mn), mean {:.1}",
                stats::mean(self.revenue.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.fleet_cost,
            &format!(
                "Fleet acquisition cost ($mn), mean {:.1}",
                stats::mean(self.fleet_cost.as_slice())
            ),
            None,
        );
        sink.visualize(
            &self.payoff_years,
            &format!(
                "Fleet payoff time (years), mean {:.1}",
                stats::mean(self.payoff_years.as_slice())
            ),
            None,
        );
    }
}
