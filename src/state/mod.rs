//! Application state module

mod forms;
mod lead;

pub use forms::*;
pub use lead::*;
