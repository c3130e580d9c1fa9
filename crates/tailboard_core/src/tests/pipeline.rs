//! Tests for the end-to-end dashboard stages and sink presentation

use rand::SeedableRng;

use crate::error::ModelError;
use crate::pipeline;
use crate::scenario::{BurnYearParams, EconomicsParams, FleetYearParams, ValuationParams};
use crate::sink::DistributionSink;
use crate::variates::Variates;

/// Sink that records what it was handed, for asserting on the
/// presentation contract without a terminal.
#[derive(Debug, Default)]
struct RecordingSink {
    charts: Vec<(String, usize, bool)>,
}

impl DistributionSink for RecordingSink {
    fn visualize(&mut self, primary: &Variates, title: &str, secondary: Option<&Variates>) {
        self.charts
            .push((title.to_string(), primary.len(), secondary.is_some()));
    }
}

/// Test that fleet-year revenue is wired from the sampled inputs
#[test]
fn test_fleet_year_wires_revenue_from_inputs() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let params = FleetYearParams::ramp_years()[0];

    let out = pipeline::fleet_year(&params, &mut rng, 256).unwrap();
    assert_eq!(out.year, 2026);
    assert_eq!(out.trucks.len(), 256);
    assert_eq!(out.utilization.len(), 256);
    assert_eq!(out.revenue.len(), 256);

    let trucks = out.trucks.as_slice();
    let utilization = out.utilization.as_slice();
    let revenue = out.revenue.as_slice();
    for i in 0..256 {
        let expected = utilization[i] * 8760.0 * 30.0 * trucks[i];
        assert!(
            (revenue[i] - expected).abs() < 1e-6,
            "Trial {i}: revenue {} should equal {expected}",
            revenue[i]
        );
    }
}

/// Test that an explicit zero trial count is rejected
#[test]
fn test_fleet_year_rejects_zero_trials() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let params = FleetYearParams::ramp_years()[0];

    assert!(matches!(
        pipeline::fleet_year(&params, &mut rng, 0),
        Err(ModelError::InvalidParameter { name: "n", .. })
    ));
}

/// Test that a burn year's opex is the element-wise sum of its lines
#[test]
fn test_burn_year_opex_is_sum() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(123);
    let params = BurnYearParams::burn_years()[1];

    let out = pipeline::burn_year(&params, &mut rng, 128).unwrap();
    assert_eq!(out.year, 2027);

    let research = out.research.as_slice();
    let selling = out.selling.as_slice();
    let opex = out.opex.as_slice();
    for i in 0..128 {
        assert!(
            (opex[i] - (research[i] + selling[i])).abs() < 1e-9,
            "Trial {i}: opex should be research + selling"
        );
    }
}

/// Test that the horizon total is the element-wise sum over years
#[test]
fn test_total_burn_totals_every_year() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    let years = BurnYearParams::burn_years();

    let out = pipeline::total_burn(&years, &mut rng, 64).unwrap();
    assert_eq!(out.years.len(), 5);

    let total = out.total.as_slice();
    for i in 0..64 {
        let expected: f64 = out.years.iter().map(|y| y.opex.as_slice()[i]).sum();
        assert!(
            (total[i] - expected).abs() < 1e-9,
            "Trial {i}: total burn should sum the years"
        );
    }
}

/// Test that an empty burn horizon is rejected
#[test]
fn test_total_burn_rejects_empty_horizon() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
    assert!(matches!(
        pipeline::total_burn(&[], &mut rng, 64),
        Err(ModelError::InvalidParameter { name: "years", .. })
    ));
}

/// Test the internal consistency of the valuation outputs
#[test]
fn test_valuation_consistency() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let fleet = FleetYearParams::ramp_years()[2];
    let burn = BurnYearParams::burn_years()[2];
    let params = ValuationParams::default();

    let out = pipeline::valuation(&fleet, &burn, &params, &mut rng, 512).unwrap();
    assert_eq!(out.year, 2028);
    assert!((out.survival - 0.995_f64.powi(4)).abs() < 1e-12);

    let revenue = out.revenue.as_slice();
    let opex = out.opex.as_slice();
    let ebitda = out.ebitda.as_slice();
    let price_to_arr = out.price_to_arr.as_slice();
    let adjusted = out.adjusted_price_to_arr.as_slice();
    for i in 0..512 {
        assert!(
            (ebitda[i] - (revenue[i] - opex[i])).abs() < 1e-9,
            "Trial {i}: EBITDA should be revenue - opex"
        );
        assert!(
            (price_to_arr[i] * revenue[i] - 2600.0).abs() < 1e-6,
            "Trial {i}: Price/ARR times revenue should recover the market cap"
        );
        assert!(
            (adjusted[i] - price_to_arr[i] / out.survival).abs() < 1e-6,
            "Trial {i}: the haircut should divide the base multiple by survival"
        );
    }
}

/// Test that valuation refuses a fleet/burn year mismatch
#[test]
fn test_valuation_rejects_mismatched_years() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let fleet = FleetYearParams::ramp_years()[2];
    let burn = BurnYearParams::burn_years()[1];

    let result = pipeline::valuation(&fleet, &burn, &ValuationParams::default(), &mut rng, 64);
    assert!(matches!(
        result,
        Err(ModelError::InvalidParameter {
            name: "burn_year",
            ..
        })
    ));
}

/// Test that economics outputs trace their inputs element-wise
#[test]
fn test_economics_traces_inputs() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(99);
    let params = EconomicsParams::default();

    let out = pipeline::economics(&params, &mut rng, 256).unwrap();

    let trucks = out.trucks.as_slice();
    let fleet_cost = out.fleet_cost.as_slice();
    let revenue = out.revenue.as_slice();
    let payoff = out.payoff_years.as_slice();
    for i in 0..256 {
        // lease_share 0.5: (0.5 * 20k + 0.5 * 180k) * 1e-6 = 0.1 $mn per truck
        assert!(
            (fleet_cost[i] - trucks[i] * 0.1).abs() < 1e-9,
            "Trial {i}: fleet cost should be 0.1 $mn per truck"
        );
        assert!(
            (payoff[i] - fleet_cost[i] / (revenue[i] * 0.3)).abs() < 1e-9,
            "Trial {i}: payoff should be cost over margin-scaled revenue"
        );
    }
}

/// Test that a zero gross margin degenerates to inf without an error
#[test]
fn test_zero_margin_payoff_degenerates_without_error() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(99);
    let mut params = EconomicsParams::default();
    // Slide the margin down to its lower bound
    params.gross_margin.step(-1.0);
    assert_eq!(params.gross_margin.value, 0.0);

    let out = pipeline::economics(&params, &mut rng, 64).unwrap();
    for v in out.payoff_years.iter() {
        assert!(v.is_infinite(), "Zero margin should produce inf, got {v}");
    }
}

/// Test that presentation hands sinks fully computed charts
#[test]
fn test_present_feeds_sink_fully_computed_charts() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
    let fleet = FleetYearParams::ramp_years()[2];
    let burn = BurnYearParams::burn_years()[2];

    let mut sink = RecordingSink::default();
    pipeline::valuation(&fleet, &burn, &ValuationParams::default(), &mut rng, 128)
        .unwrap()
        .present(&mut sink);

    assert_eq!(sink.charts.len(), 6, "Valuation should push six charts");
    for (title, len, _) in &sink.charts {
        assert_eq!(*len, 128, "Chart '{title}' should carry every trial");
        assert!(
            title.contains("mean"),
            "Chart '{title}' should carry its own summary statistic"
        );
        assert!(title.contains("2028"), "Chart '{title}' should name the year");
    }
    let overlays = sink.charts.iter().filter(|(_, _, s)| *s).count();
    assert_eq!(overlays, 1, "Only the adjusted multiple carries an overlay");

    let mut sink = RecordingSink::default();
    pipeline::fleet_year(&fleet, &mut rng, 128)
        .unwrap()
        .present(&mut sink);
    assert_eq!(sink.charts.len(), 3, "A ramp year should push three charts");

    let mut sink = RecordingSink::default();
    pipeline::total_burn(&BurnYearParams::burn_years(), &mut rng, 128)
        .unwrap()
        .present(&mut sink);
    assert_eq!(
        sink.charts.len(),
        6,
        "Five burn years plus the total should push six charts"
    );
    assert!(
        sink.charts[5].0.contains("2026-2030"),
        "The total chart should span the horizon: {}",
        sink.charts[5].0
    );
}
