//! Utility functions and helpers.

pub mod display;
