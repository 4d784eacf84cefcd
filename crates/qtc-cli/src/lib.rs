//! CLI library components for the QTc calculator.

pub mod logging;
pub mod outcome;
pub mod render;
pub mod summary;
