//! Three-way financial model generator for Transurban Group (ASX: TCL).
//!
//! Builds a five-sheet .xlsx workbook: an Assumptions sheet of forecast
//! drivers, an Income Statement, Balance Sheet and Cash Flow Statement
//! with five years of hardcoded historicals (FY21-FY25) and five years of
//! formula-driven forecasts (FY26F-FY30F), plus Notes to the financial
//! statements. Forecast cells are written as live Excel formulas, so the
//! saved workbook stays flexible when a driver is changed.
//!
//! The crate is organised around a declarative pipeline:
//!
//! - [`layout`] fixes the shared column grid (labels, units, ten fiscal
//!   year columns).
//! - [`model`] computes every sheet's row layout first, then builds the
//!   cell contents, so cross-sheet formulas can only target rows that
//!   exist.
//! - [`formula`] renders tagged expression trees to Excel A1 syntax.
//! - [`order`] topologically sorts the statement dependency chain.
//! - [`excel`] writes the styled workbook with `rust_xlsxwriter`.

pub mod cli;
pub mod error;
pub mod excel;
pub mod formula;
pub mod layout;
pub mod model;
pub mod order;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use excel::ModelWriter;
pub use model::build_sheets;
