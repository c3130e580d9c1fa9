use tailboard_core::scenario::{
    BoundedParam, BurnYearParams, EconomicsParams, FleetYearParams, ValuationParams,
};
use tailboard_core::{DistributionSink, Variates};

/// Which half of a dashboard has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Parameters,
    Charts,
}

impl FocusedPanel {
    pub fn toggle(self) -> FocusedPanel {
        match self {
            FocusedPanel::Parameters => FocusedPanel::Charts,
            FocusedPanel::Charts => FocusedPanel::Parameters,
        }
    }
}

/// One finished chart as handed over by a pipeline.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub samples: Vec<f64>,
    pub secondary: Option<Vec<f64>>,
}

/// Sink that queues charts for the next render pass.
#[derive(Debug, Default)]
pub struct ChartQueue {
    pub charts: Vec<ChartData>,
}

impl DistributionSink for ChartQueue {
    fn visualize(&mut self, primary: &Variates, title: &str, secondary: Option<&Variates>) {
        self.charts.push(ChartData {
            title: title.to_string(),
            samples: primary.as_slice().to_vec(),
            secondary: secondary.map(|s| s.as_slice().to_vec()),
        });
    }
}

/// One editable row in a parameter panel, already formatted.
#[derive(Debug, Clone)]
pub struct ParamRow {
    pub label: String,
    pub value: String,
    pub hint: String,
}

impl ParamRow {
    fn new(label: impl Into<String>, param: &BoundedParam, precision: usize) -> Self {
        Self {
            label: label.into(),
            value: format!("{:.*}", precision, param.value),
            hint: format!("[{}..{}]", param.bounds.min, param.bounds.max),
        }
    }
}

const FLEET_SLIDERS_PER_YEAR: usize = 4;

/// Assumptions and charts for the fleet ramp dashboard.
#[derive(Debug)]
pub struct OpportunityState {
    pub years: [FleetYearParams; 3],
    pub selected_param: usize,
    pub selected_chart: usize,
    pub focused_panel: FocusedPanel,
    pub charts: Vec<ChartData>,
}

impl Default for OpportunityState {
    fn default() -> Self {
        Self {
            years: FleetYearParams::ramp_years(),
            selected_param: 0,
            selected_chart: 0,
            focused_panel: FocusedPanel::Parameters,
            charts: Vec::new(),
        }
    }
}

impl OpportunityState {
    pub fn param_count(&self) -> usize {
        self.years.len() * FLEET_SLIDERS_PER_YEAR
    }

    /// Rows in display order: four sliders per ramp year.
    pub fn rows(&self) -> Vec<ParamRow> {
        let mut rows = Vec::with_capacity(self.param_count());
        for year in &self.years {
            rows.push(ParamRow::new(
                format!("{} trucks (mean)", year.year),
                &year.truck_mean,
                0,
            ));
            rows.push(ParamRow::new(
                format!("{} util alpha", year.year),
                &year.utilization_alpha,
                1,
            ));
            rows.push(ParamRow::new(
                format!("{} util beta", year.year),
                &year.utilization_beta,
                1,
            ));
            rows.push(ParamRow::new(
                format!("{} util spread", year.year),
                &year.utilization_spread,
                2,
            ));
        }
        rows
    }

    /// Step the slider at `row` by one notch. `direction` is +1 or -1.
    pub fn adjust(&mut self, row: usize, direction: f64) {
        let Some(year) = self.years.get_mut(row / FLEET_SLIDERS_PER_YEAR) else {
            return;
        };
        match row % FLEET_SLIDERS_PER_YEAR {
            0 => year.truck_mean.step(10.0 * direction),
            1 => year.utilization_alpha.step(1.0 * direction),
            2 => year.utilization_beta.step(1.0 * direction),
            _ => year.utilization_spread.step(0.01 * direction),
        }
    }
}

const BURN_SLIDERS_PER_YEAR: usize = 2;

/// Assumptions and charts for the cash burn dashboard.
#[derive(Debug)]
pub struct BurnState {
    pub years: [BurnYearParams; 5],
    pub selected_param: usize,
    pub selected_chart: usize,
    pub focused_panel: FocusedPanel,
    pub charts: Vec<ChartData>,
}

impl Default for BurnState {
    fn default() -> Self {
        Self {
            years: BurnYearParams::burn_years(),
            selected_param: 0,
            selected_chart: 0,
            focused_panel: FocusedPanel::Parameters,
            charts: Vec::new(),
        }
    }
}

impl BurnState {
    pub fn param_count(&self) -> usize {
        self.years.len() * BURN_SLIDERS_PER_YEAR
    }

    pub fn rows(&self) -> Vec<ParamRow> {
        let mut rows = Vec::with_capacity(self.param_count());
        for year in &self.years {
            rows.push(ParamRow::new(
                format!("{} R&D ($mn)", year.year),
                &year.research_mean,
                0,
            ));
            rows.push(ParamRow::new(
                format!("{} SG&A ($mn)", year.year),
                &year.selling_mean,
                0,
            ));
        }
        rows
    }

    pub fn adjust(&mut self, row: usize, direction: f64) {
        let Some(year) = self.years.get_mut(row / BURN_SLIDERS_PER_YEAR) else {
            return;
        };
        match row % BURN_SLIDERS_PER_YEAR {
            0 => year.research_mean.step(10.0 * direction),
            _ => year.selling_mean.step(10.0 * direction),
        }
    }
}

/// Assumptions and charts for the valuation dashboard.
#[derive(Debug)]
pub struct ValuationState {
    pub params: ValuationParams,
    pub selected_param: usize,
    pub selected_chart: usize,
    pub focused_panel: FocusedPanel,
    pub charts: Vec<ChartData>,
    /// Survival probability from the last recompute, for the readout.
    pub survival: Option<f64>,
}

impl Default for ValuationState {
    fn default() -> Self {
        Self {
            params: ValuationParams::default(),
            selected_param: 0,
            selected_chart: 0,
            focused_panel: FocusedPanel::Parameters,
            charts: Vec::new(),
            survival: None,
        }
    }
}

impl ValuationState {
    pub fn param_count(&self) -> usize {
        3
    }

    pub fn rows(&self) -> Vec<ParamRow> {
        vec![
            ParamRow::new("Market cap ($mn)", &self.params.market_cap, 0),
            ParamRow::new("Disaster prob/year", &self.params.disaster_probability, 3),
            ParamRow::new("Years exposed", &self.params.years_exposed, 0),
        ]
    }

    pub fn adjust(&mut self, row: usize, direction: f64) {
        match row {
            0 => self.params.market_cap.step(100.0 * direction),
            1 => self.params.disaster_probability.step(0.001 * direction),
            2 => self.params.years_exposed.step(1.0 * direction),
            _ => {}
        }
    }
}

/// Assumptions and charts for the per-truck economics dashboard.
#[derive(Debug)]
pub struct EconomicsState {
    pub params: EconomicsParams,
    pub selected_param: usize,
    pub selected_chart: usize,
    pub focused_panel: FocusedPanel,
    pub charts: Vec<ChartData>,
}

impl Default for EconomicsState {
    fn default() -> Self {
        Self {
            params: EconomicsParams::default(),
            selected_param: 0,
            selected_chart: 0,
            focused_panel: FocusedPanel::Parameters,
            charts: Vec::new(),
        }
    }
}

impl EconomicsState {
    pub fn param_count(&self) -> usize {
        12
    }

    pub fn rows(&self) -> Vec<ParamRow> {
        let p = &self.params;
        vec![
            ParamRow::new("Trucks (mean)", &p.truck_mean, 0),
            ParamRow::new("Util alpha", &p.utilization_alpha, 1),
            ParamRow::new("Util beta", &p.utilization_beta, 1),
            ParamRow::new("Util spread", &p.utilization_spread, 2),
            ParamRow::new("Rate alpha", &p.rate_alpha, 1),
            ParamRow::new("Rate beta", &p.rate_beta, 1),
            ParamRow::new("Rate spread ($/mi)", &p.rate_spread, 2),
            ParamRow::new("Speed alpha", &p.speed_alpha, 1),
            ParamRow::new("Speed beta", &p.speed_beta, 1),
            ParamRow::new("Speed spread (mph)", &p.speed_spread, 1),
            ParamRow::new("Lease share", &p.lease_share, 2),
            ParamRow::new("Gross margin", &p.gross_margin, 2),
        ]
    }

    pub fn adjust(&mut self, row: usize, direction: f64) {
        let p = &mut self.params;
        match row {
            0 => p.truck_mean.step(10.0 * direction),
            1 => p.utilization_alpha.step(1.0 * direction),
            2 => p.utilization_beta.step(1.0 * direction),
            3 => p.utilization_spread.step(0.01 * direction),
            4 => p.rate_alpha.step(1.0 * direction),
            5 => p.rate_beta.step(1.0 * direction),
            6 => p.rate_spread.step(0.01 * direction),
            7 => p.speed_alpha.step(1.0 * direction),
            8 => p.speed_beta.step(1.0 * direction),
            9 => p.speed_spread.step(0.5 * direction),
            10 => p.lease_share.step(0.05 * direction),
            11 => p.gross_margin.step(0.05 * direction),
            _ => {}
        }
    }
}
