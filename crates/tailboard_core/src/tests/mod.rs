//! Integration tests for the tailboard_core scenario engine
//!
//! Tests are organized by topic:
//! - `sampling`: distribution parameters, validation, and draw statistics
//! - `compose`: element-wise formula arithmetic and shape checks
//! - `scenario`: parameter sets, slider bounds, and built-in presets
//! - `pipeline`: end-to-end dashboard stages and sink presentation

mod compose;
mod pipeline;
