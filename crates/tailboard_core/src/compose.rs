//! Element-wise composition of variate arrays into derived financial
//! quantities.
//!
//! Every function here is pure: arrays in, array out, no sampling.
//! Element index identifies the Monte Carlo trial, so inputs to one
//! call must come from the same run and have equal lengths. Length
//! checks fail with [`ModelError::ShapeMismatch`]. The arithmetic
//! itself is plain IEEE 754, so a zero denominator yields `inf` or
//! `NaN` elements rather than an error.

use crate::error::{ModelError, Result};
use crate::variates::Variates;

/// Hours in a scenario year (365 days, no leap handling).
pub const HOURS_PER_YEAR: f64 = 8760.0;
/// Revenue per truck-hour in the hours-based model: 60 miles per hour
/// at $0.50 per mile.
pub const DOLLARS_PER_TRUCK_HOUR: f64 = 30.0;
/// Raw dollars to millions of dollars.
pub const DOLLARS_TO_MILLIONS: f64 = 1e-6;
/// Up-front cost of putting one leased truck on the road, in dollars.
pub const LEASE_COST_PER_TRUCK: f64 = 20_000.0;
/// Up-front cost of one owned truck, in dollars.
pub const OWNED_COST_PER_TRUCK: f64 = 180_000.0;

fn check_len(left: &Variates, right: &Variates) -> Result<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(ModelError::ShapeMismatch {
            left: left.len(),
            right: right.len(),
        })
    }
}

/// Annual revenue in raw dollars from the hours-based model:
/// `utilization * 8760 * 30 * trucks`.
///
/// Callers wanting $mn apply [`DOLLARS_TO_MILLIONS`] explicitly.
pub fn revenue_hours(utilization: &Variates, trucks: &Variates) -> Result<Variates> {
    check_len(utilization, trucks)?;
    let values = utilization
        .iter()
        .zip(trucks.iter())
        .map(|(u, t)| u * HOURS_PER_YEAR * DOLLARS_PER_TRUCK_HOUR * t)
        .collect();
    Ok(Variates::from_vec(values))
}

/// Annual revenue in $mn from the rate-based model:
/// `utilization * rate_per_mile * average_speed * trucks * 8760 * 1e-6`.
pub fn revenue_rate(
    utilization: &Variates,
    rate_per_mile: &Variates,
    average_speed: &Variates,
    trucks: &Variates,
) -> Result<Variates> {
    check_len(utilization, rate_per_mile)?;
    check_len(utilization, average_speed)?;
    check_len(utilization, trucks)?;

    let (u, r, v, t) = (
        utilization.as_slice(),
        rate_per_mile.as_slice(),
        average_speed.as_slice(),
        trucks.as_slice(),
    );
    let mut values = Vec::with_capacity(u.len());
    for i in 0..u.len() {
        values.push(u[i] * r[i] * v[i] * t[i] * HOURS_PER_YEAR * DOLLARS_TO_MILLIONS);
    }
    Ok(Variates::from_vec(values))
}

/// Up-front acquisition cost in $mn for a mixed leased/owned fleet.
/// `lease_share` is the fraction of the fleet that is leased.
pub fn fleet_cost(lease_share: f64, trucks: &Variates) -> Variates {
    let per_truck = lease_share * LEASE_COST_PER_TRUCK + (1.0 - lease_share) * OWNED_COST_PER_TRUCK;
    trucks.scaled(per_truck * DOLLARS_TO_MILLIONS)
}

/// Operating spend for one year in $mn: research plus selling costs.
pub fn opex(research: &Variates, selling: &Variates) -> Result<Variates> {
    check_len(research, selling)?;
    Ok(Variates::from_vec(
        research
            .iter()
            .zip(selling.iter())
            .map(|(r, s)| r + s)
            .collect(),
    ))
}

/// EBITDA for one year in $mn: revenue minus opex. Routinely negative
/// during the ramp years.
pub fn ebitda(revenue: &Variates, opex: &Variates) -> Result<Variates> {
    check_len(revenue, opex)?;
    Ok(Variates::from_vec(
        revenue
            .iter()
            .zip(opex.iter())
            .map(|(rev, cost)| rev - cost)
            .collect(),
    ))
}

/// Element-wise sum of per-year arrays, e.g. total burn across a
/// multi-year horizon. At least one array is required and all arrays
/// must share a length. Order of the inputs does not affect the
/// result.
pub fn aggregate<'a, I>(years: I) -> Result<Variates>
where
    I: IntoIterator<Item = &'a Variates>,
{
    let mut iter = years.into_iter();
    let Some(first) = iter.next() else {
        return Err(ModelError::InvalidParameter {
            name: "years",
            value: 0.0,
            reason: "aggregation needs at least one array",
        });
    };

    let mut total = first.as_slice().to_vec();
    for year in iter {
        if year.len() != total.len() {
            return Err(ModelError::ShapeMismatch {
                left: total.len(),
                right: year.len(),
            });
        }
        for (acc, v) in total.iter_mut().zip(year.iter()) {
            *acc += v;
        }
    }
    Ok(Variates::from_vec(total))
}

/// Valuation multiple of a fixed market cap against a per-trial
/// denominator (ARR or EBITDA), both in $mn. Trials with a zero
/// denominator come out as `inf`.
pub fn price_multiple(market_cap: f64, denominator: &Variates) -> Variates {
    Variates::from_vec(denominator.iter().map(|d| market_cap / d).collect())
}

/// Probability that no catastrophic failure occurs over `years` years,
/// given the per-year probability of one.
pub fn survival_probability(annual_probability: f64, years: u32) -> f64 {
    (1.0 - annual_probability).powi(years as i32)
}

/// Price/ARR with a catastrophe haircut: the market cap divided by
/// revenue scaled down by the survival probability.
pub fn disaster_adjusted_multiple(market_cap: f64, survival: f64, revenue: &Variates) -> Variates {
    Variates::from_vec(
        revenue
            .iter()
            .map(|r| market_cap / (survival * r))
            .collect(),
    )
}

/// Years until gross profit covers the fleet cost:
/// `fleet_cost / (revenue * margin)`. A zero margin legitimately
/// produces `inf`; the fleet never pays off.
pub fn payoff_years(fleet_cost: &Variates, revenue: &Variates, margin: f64) -> Result<Variates> {
    check_len(fleet_cost, revenue)?;
    Ok(Variates::from_vec(
        fleet_cost
            .iter()
            .zip(revenue.iter())
            .map(|(cost, rev)| cost / (rev * margin))
            .collect(),
    ))
}
