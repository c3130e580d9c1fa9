pub mod burn;
pub mod economics;
pub mod opportunity;
pub mod valuation;
