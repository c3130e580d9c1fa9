//! Tests for element-wise formula arithmetic and shape checks

use crate::compose;
use crate::error::ModelError;
use crate::variates::Variates;

/// Test that hours-based revenue reproduces the hand-computed product
/// 0.2 * 8760 * 30 * trucks
#[test]
fn test_hours_revenue_recovers_known_product() {
    let utilization = Variates::splat(0.2, 64);

    let fleet = compose::revenue_hours(&utilization, &Variates::splat(100.0, 64)).unwrap();
    for v in fleet.iter() {
        assert!(
            (v - 5_256_000.0).abs() < 1e-6,
            "Expected 5,256,000 per trial at 100 trucks, got {v}"
        );
    }

    let single = compose::revenue_hours(&utilization, &Variates::splat(1.0, 64)).unwrap();
    for v in single.iter() {
        assert!(
            (v - 52_560.0).abs() < 1e-9,
            "Expected 52,560 per trial at 1 truck, got {v}"
        );
    }
}

/// Test that mismatched array lengths are rejected with both sizes
#[test]
fn test_hours_revenue_shape_mismatch() {
    let result = compose::revenue_hours(&Variates::splat(0.2, 5000), &Variates::splat(100.0, 4000));
    assert_eq!(
        result.unwrap_err(),
        ModelError::ShapeMismatch {
            left: 5000,
            right: 4000
        }
    );
}

/// Test that rate-based revenue reproduces a hand-computed value in $mn
#[test]
fn test_rate_revenue_recovers_known_product() {
    let revenue = compose::revenue_rate(
        &Variates::splat(0.5, 16),
        &Variates::splat(0.5, 16),
        &Variates::splat(60.0, 16),
        &Variates::splat(1000.0, 16),
    )
    .unwrap();

    // 0.5 * 0.5 * 60 * 1000 * 8760 * 1e-6
    for v in revenue.iter() {
        assert!((v - 131.4).abs() < 1e-9, "Expected 131.4 $mn, got {v}");
    }
}

/// Test that rate-based revenue checks every input length
#[test]
fn test_rate_revenue_shape_mismatch() {
    let result = compose::revenue_rate(
        &Variates::splat(0.5, 16),
        &Variates::splat(0.5, 16),
        &Variates::splat(60.0, 8),
        &Variates::splat(1000.0, 16),
    );
    assert!(matches!(
        result,
        Err(ModelError::ShapeMismatch { left: 16, right: 8 })
    ));
}

/// Test fleet cost at the all-leased, all-owned, and mixed points
#[test]
fn test_fleet_cost_mixes_lease_and_owned() {
    let trucks = Variates::splat(100.0, 8);

    let leased = compose::fleet_cost(1.0, &trucks);
    let owned = compose::fleet_cost(0.0, &trucks);
    let mixed = compose::fleet_cost(0.5, &trucks);

    assert!((leased.as_slice()[0] - 2.0).abs() < 1e-9);
    assert!((owned.as_slice()[0] - 18.0).abs() < 1e-9);
    assert!((mixed.as_slice()[0] - 10.0).abs() < 1e-9);
}

/// Test that opex adds and EBITDA subtracts element-wise, keeping
/// negative EBITDA trials as data
#[test]
fn test_opex_and_ebitda_are_elementwise() {
    let research = Variates::from_vec(vec![400.0, 700.0]);
    let selling = Variates::from_vec(vec![60.0, 160.0]);

    let opex = compose::opex(&research, &selling).unwrap();
    assert_eq!(opex, Variates::from_vec(vec![460.0, 860.0]));

    let revenue = Variates::from_vec(vec![500.0, 120.0]);
    let ebitda = compose::ebitda(&revenue, &opex).unwrap();
    assert_eq!(ebitda, Variates::from_vec(vec![40.0, -740.0]));
}

/// Test that aggregation sums element-wise and ignores input order
#[test]
fn test_aggregate_sums_elementwise_and_commutes() {
    let a = Variates::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Variates::from_vec(vec![10.0, 20.0, 30.0]);
    let c = Variates::from_vec(vec![100.0, 200.0, 300.0]);

    let total = compose::aggregate([&a, &b, &c]).unwrap();
    assert_eq!(total, Variates::from_vec(vec![111.0, 222.0, 333.0]));

    let reordered = compose::aggregate([&c, &a, &b]).unwrap();
    assert_eq!(total, reordered, "Aggregation should not depend on order");
}

/// Test that aggregating nothing is an error
#[test]
fn test_aggregate_rejects_empty() {
    let result = compose::aggregate([]);
    assert!(matches!(
        result,
        Err(ModelError::InvalidParameter { name: "years", .. })
    ));
}

/// Test that aggregation rejects arrays of different lengths
#[test]
fn test_aggregate_rejects_mixed_lengths() {
    let a = Variates::splat(1.0, 10);
    let b = Variates::splat(1.0, 9);
    assert!(matches!(
        compose::aggregate([&a, &b]),
        Err(ModelError::ShapeMismatch { left: 10, right: 9 })
    ));
}

/// Test that a zero denominator yields inf, not an error
#[test]
fn test_price_multiple_zero_denominator_is_inf() {
    let revenue = Variates::from_vec(vec![100.0, 0.0]);
    let multiple = compose::price_multiple(2600.0, &revenue);

    assert!((multiple.as_slice()[0] - 26.0).abs() < 1e-9);
    assert!(
        multiple.as_slice()[1].is_infinite() && multiple.as_slice()[1] > 0.0,
        "Zero revenue trial should price at +inf"
    );
}

/// Test that survival probability compounds per year
#[test]
fn test_survival_probability_compounds() {
    let four = compose::survival_probability(0.005, 4);
    assert!((four - 0.995_f64.powi(4)).abs() < 1e-12);

    assert!((compose::survival_probability(0.2, 1) - 0.8).abs() < 1e-12);
    assert!((compose::survival_probability(0.05, 0) - 1.0).abs() < 1e-12);
}

/// Test that the disaster haircut is exactly a division by survival
#[test]
fn test_disaster_adjustment_divides_by_survival() {
    let revenue = Variates::from_vec(vec![80.0, 120.0, 410.0]);
    let survival = compose::survival_probability(0.02, 4);

    let base = compose::price_multiple(2600.0, &revenue);
    let adjusted = compose::disaster_adjusted_multiple(2600.0, survival, &revenue);

    for (b, a) in base.iter().zip(adjusted.iter()) {
        assert!(
            (a - b / survival).abs() < 1e-9,
            "Adjusted multiple should be base / survival: {a} vs {b} / {survival}"
        );
    }

    // Known point: 0.5% annual disaster over 4 years haircuts a 26x
    // multiple on $100mn ARR up to roughly 26.53x.
    let flat = Variates::splat(100.0, 3);
    let survival = compose::survival_probability(0.005, 4);
    let adjusted = compose::disaster_adjusted_multiple(2600.0, survival, &flat);
    for a in adjusted.iter() {
        assert!((a - 26.53).abs() < 0.01, "Expected ~26.53x, got {a}");
    }
}

/// Test payoff arithmetic and its zero-margin degeneracy
#[test]
fn test_payoff_years_ratio_and_zero_margin() {
    let fleet_cost = Variates::splat(100.0, 8);
    let revenue = Variates::splat(50.0, 8);

    let payoff = compose::payoff_years(&fleet_cost, &revenue, 0.5).unwrap();
    for v in payoff.iter() {
        assert!((v - 4.0).abs() < 1e-9, "Expected 4 years, got {v}");
    }

    let stalled = compose::payoff_years(&fleet_cost, &revenue, 0.0).unwrap();
    for v in stalled.iter() {
        assert!(v.is_infinite(), "Zero margin should never pay off, got {v}");
    }
}
