use crate::variates::Variates;

/// Rendering boundary for finished distributions.
///
/// Pipelines hand every chart to a sink as a fully computed package:
/// the primary array, a display title that already carries any summary
/// statistic, and an optional secondary array to overlay behind the
/// primary. Sinks draw; they never derive numbers.
pub trait DistributionSink {
    fn visualize(&mut self, primary: &Variates, title: &str, secondary: Option<&Variates>);
}

/// Sink that drops everything, for running pipelines where rendering
/// is irrelevant (benchmarks, tests of the numeric path).
#[derive(Debug, Default)]
pub struct NullSink;

impl DistributionSink for NullSink {
    fn visualize(&mut self, _primary: &Variates, _title: &str, _secondary: Option<&Variates>) {}
}
