//! Form rendering module
//!
//! This module contains UI components for rendering the wizard steps:
//! - `field_renderer`: Field rendering utilities
//! - `step_frame`: Step card and navigation buttons
//! - `basic_info`, `case_info`, `confirm`: one module per step

mod basic_info;
mod case_info;
mod confirm;
mod field_renderer;
mod step_frame;

pub use basic_info::draw_basic_info;
pub use case_info::draw_case_info;
pub use confirm::draw_confirm;
