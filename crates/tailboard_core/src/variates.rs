/// A fixed-length array of Monte Carlo draws.
///
/// Index `i` refers to the same trial in every array produced by one
/// pipeline run, so element-wise composition of two arrays yields the
/// joint distribution of the combined quantity. Elements may be `inf`
/// or `NaN` when a composition degenerates (a zero denominator, say);
/// that is valid data, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Variates(Vec<f64>);

impl Variates {
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// An array holding `n` copies of `value`, for pinning one input
    /// while the rest of a scenario stays stochastic.
    #[must_use]
    pub fn splat(value: f64, n: usize) -> Self {
        Self(vec![value; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// A new array with every element multiplied by `factor`. Unit
    /// conversions (raw dollars to $mn, say) stay explicit at call
    /// sites instead of hiding inside formulas.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|v| v * factor).collect())
    }
}
