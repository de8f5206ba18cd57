//! Excel output: formats and the workbook writer.

pub mod styles;
pub mod writer;

pub use writer::ModelWriter;
