//! Command implementation for the `threeway` binary.

use crate::error::ModelResult;
use crate::excel::ModelWriter;
use crate::model::{build_sheets, COMPANY, TICKER};
use colored::Colorize;
use std::path::PathBuf;

/// Default workbook filename, written to the current directory.
pub const DEFAULT_OUTPUT: &str = "Transurban_Group_3Way_Financial_Model.xlsx";

/// Build the model and write the workbook.
pub fn generate(output: PathBuf, verbose: bool) -> ModelResult<()> {
    println!(
        "{}",
        format!("📊 Building {} ({}) three-way model", COMPANY, TICKER)
            .bold()
            .green()
    );
    println!();

    let sheets = build_sheets()?;

    if verbose {
        for sheet in &sheets {
            println!(
                "   {} {} line items, {} populated cells",
                format!("{}:", sheet.statement.sheet_name()).cyan(),
                sheet.rows.len(),
                sheet.cells.len()
            );
        }
        println!();
    }

    let mut writer = ModelWriter::new()?;
    writer.write_sheets(&sheets)?;
    writer.save(&output)?;

    println!("{} {}", "✅ Model saved to:".bold().green(), output.display());
    let names: Vec<&str> = crate::types::Statement::ALL
        .iter()
        .map(|s| s.sheet_name())
        .collect();
    println!("   Sheets: {}", names.join(", "));

    Ok(())
}
