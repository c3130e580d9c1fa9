use tailboard_core::pipeline;
use tailboard_core::scenario::{
    BurnYearParams, EconomicsParams, FleetYearParams, ValuationParams,
};

use super::screen_state::{
    BurnState, ChartData, ChartQueue, EconomicsState, OpportunityState, ValuationState,
};
use super::tabs::TabId;

/// Ramp year whose revenue the valuation dashboard prices.
pub const VALUATION_TARGET_YEAR: u16 = 2028;

/// Everything the app mutates: the active tab, the per-dashboard
/// assumptions, and the charts from the last recompute.
pub struct AppState {
    pub active_tab: TabId,
    /// Trials drawn per distribution on every recompute.
    pub variates: usize,
    pub error_message: Option<String>,
    pub exit: bool,
    pub opportunity: OpportunityState,
    pub burn: BurnState,
    pub valuation: ValuationState,
    pub economics: EconomicsState,
}

impl AppState {
    /// Build the initial state and run every pipeline once so the
    /// first frame has charts to show.
    pub fn new(variates: usize) -> Self {
        let mut state = Self {
            active_tab: TabId::Opportunity,
            variates,
            error_message: None,
            exit: false,
            opportunity: OpportunityState::default(),
            burn: BurnState::default(),
            valuation: ValuationState::default(),
            economics: EconomicsState::default(),
        };
        state.recompute_all();
        state
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Recompute the dashboard behind `tab`, plus any dashboard that
    /// shares its assumptions. Valuation prices the target ramp year
    /// against that year's burn plan, so edits to either feed through.
    pub fn recompute_dependents(&mut self, tab: TabId) {
        match tab {
            TabId::Opportunity => {
                self.recompute_opportunity();
                self.recompute_valuation();
            }
            TabId::Burn => {
                self.recompute_burn();
                self.recompute_valuation();
            }
            TabId::Valuation => self.recompute_valuation(),
            TabId::Economics => self.recompute_economics(),
        }
    }

    /// Fresh draws for every dashboard.
    pub fn recompute_all(&mut self) {
        self.recompute_opportunity();
        self.recompute_burn();
        self.recompute_valuation();
        self.recompute_economics();
    }

    fn recompute_opportunity(&mut self) {
        match build_opportunity_charts(&self.opportunity.years, self.variates) {
            Ok(charts) => {
                tracing::debug!(charts = charts.len(), "Opportunity pipelines recomputed");
                self.opportunity.charts = charts;
            }
            Err(e) => {
                tracing::warn!("Opportunity recompute failed: {e}");
                self.set_error(e.to_string());
            }
        }
    }

    fn recompute_burn(&mut self) {
        match build_burn_charts(&self.burn.years, self.variates) {
            Ok(charts) => {
                tracing::debug!(charts = charts.len(), "Burn pipeline recomputed");
                self.burn.charts = charts;
            }
            Err(e) => {
                tracing::warn!("Burn recompute failed: {e}");
                self.set_error(e.to_string());
            }
        }
    }

    fn recompute_valuation(&mut self) {
        let Some(fleet) = self
            .opportunity
            .years
            .iter()
            .find(|y| y.year == VALUATION_TARGET_YEAR)
            .copied()
        else {
            self.set_error(format!("no ramp assumptions for {VALUATION_TARGET_YEAR}"));
            return;
        };
        let Some(burn) = self
            .burn
            .years
            .iter()
            .find(|y| y.year == VALUATION_TARGET_YEAR)
            .copied()
        else {
            self.set_error(format!("no burn assumptions for {VALUATION_TARGET_YEAR}"));
            return;
        };

        match build_valuation_charts(&fleet, &burn, &self.valuation.params, self.variates) {
            Ok((charts, survival)) => {
                tracing::debug!(charts = charts.len(), survival, "Valuation pipeline recomputed");
                self.valuation.charts = charts;
                self.valuation.survival = Some(survival);
            }
            Err(e) => {
                tracing::warn!("Valuation recompute failed: {e}");
                self.set_error(e.to_string());
            }
        }
    }

    fn recompute_economics(&mut self) {
        match build_economics_charts(&self.economics.params, self.variates) {
            Ok(charts) => {
                tracing::debug!(charts = charts.len(), "Economics pipeline recomputed");
                self.economics.charts = charts;
            }
            Err(e) => {
                tracing::warn!("Economics recompute failed: {e}");
                self.set_error(e.to_string());
            }
        }
    }
}

fn build_opportunity_charts(
    years: &[FleetYearParams],
    n: usize,
) -> tailboard_core::Result<Vec<ChartData>> {
    let mut rng = rand::rng();
    let mut queue = ChartQueue::default();
    for params in years {
        pipeline::fleet_year(params, &mut rng, n)?.present(&mut queue);
    }
    Ok(queue.charts)
}

fn build_burn_charts(
    years: &[BurnYearParams],
    n: usize,
) -> tailboard_core::Result<Vec<ChartData>> {
    let mut rng = rand::rng();
    let mut queue = ChartQueue::default();
    pipeline::total_burn(years, &mut rng, n)?.present(&mut queue);
    Ok(queue.charts)
}

fn build_valuation_charts(
    fleet: &FleetYearParams,
    burn: &BurnYearParams,
    params: &ValuationParams,
    n: usize,
) -> tailboard_core::Result<(Vec<ChartData>, f64)> {
    let mut rng = rand::rng();
    let mut queue = ChartQueue::default();
    let output = pipeline::valuation(fleet, burn, params, &mut rng, n)?;
    output.present(&mut queue);
    Ok((queue.charts, output.survival))
}

fn build_economics_charts(
    params: &EconomicsParams,
    n: usize,
) -> tailboard_core::Result<Vec<ChartData>> {
    let mut rng = rand::rng();
    let mut queue = ChartQueue::default();
    pipeline::economics(params, &mut rng, n)?.present(&mut queue);
    Ok(queue.charts)
}
