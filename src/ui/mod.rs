//! Headless demo features built on shared state.

pub mod dashboard;
pub mod mvi;
pub mod producer;
pub mod runtime;
pub mod thermometer;
