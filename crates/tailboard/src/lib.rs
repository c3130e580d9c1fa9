//! Terminal dashboards for Monte Carlo scenario analysis of an
//! autonomous trucking carrier.
//!
//! The sampling and composition logic lives in `tailboard_core`; this
//! crate owns the ratatui shell: tabs, screens, parameter panels, the
//! histogram widget, and file logging.

pub mod app;
pub mod components;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
