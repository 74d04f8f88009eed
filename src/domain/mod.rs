//! Core domain types and logic.

pub mod calculator;
pub mod error;
pub mod form;
pub mod format;
pub mod trade;
