//! The Transurban three-way model: sheet layouts, historical data and
//! forecast formula construction for every statement.

pub mod assumptions;
pub mod balance;
pub mod cashflow;
pub mod income;
pub mod notes;

use crate::error::{ModelError, ModelResult};
use crate::formula::{cell, num, sheet_cell, Expr};
use crate::layout::{Period, MAX_COL};
use crate::order::statement_order;
use crate::types::{SheetSpec, Statement};

pub const COMPANY: &str = "Transurban Group";
pub const TICKER: &str = "ASX: TCL";

/// Reference to a driver row on the Assumptions sheet, same period.
pub fn assum(row: u32, p: Period) -> Expr {
    sheet_cell(Statement::Assumptions, p.col, row)
}

/// Reference to a row on another statement, same period.
pub fn on(statement: Statement, row: u32, p: Period) -> Expr {
    sheet_cell(statement, p.col, row)
}

/// Reference to a row on another statement, prior period (opening balance).
pub fn on_prev(statement: Statement, row: u32, p: Period) -> Expr {
    sheet_cell(statement, p.prev_col(), row)
}

/// Same-sheet reference to the prior period of a row.
pub fn prior(row: u32, p: Period) -> Expr {
    cell(p.prev_col(), row)
}

/// Prior period grown at a driver rate: `prev*(1+Assumptions!rate)`.
pub fn growth(row: u32, driver: u32, p: Period) -> Expr {
    prior(row, p) * (num(1.0) + assum(driver, p))
}

/// Reject any cell placed outside the fixed column grid.
fn validate(sheet: &SheetSpec) -> ModelResult<()> {
    for cell in &sheet.cells {
        if cell.col > MAX_COL || cell.row < 1 {
            return Err(ModelError::Layout(format!(
                "{}: cell at row {} col {} is outside the grid",
                sheet.statement.sheet_name(),
                cell.row,
                cell.col
            )));
        }
    }
    Ok(())
}

/// Build every sheet, ordered so each statement is generated after the
/// statements its formulas reference for closing values.
pub fn build_sheets() -> ModelResult<Vec<SheetSpec>> {
    let (assum_rows, d) = assumptions::layout();
    let (income_rows, ir) = income::layout();
    let (balance_rows, br) = balance::layout();
    let (cashflow_rows, cfr) = cashflow::layout();
    let (notes_rows, nr) = notes::layout();

    let order = statement_order()?;

    let mut assum_rows = Some(assum_rows);
    let mut income_rows = Some(income_rows);
    let mut balance_rows = Some(balance_rows);
    let mut cashflow_rows = Some(cashflow_rows);
    let mut notes_rows = Some(notes_rows);

    let mut sheets = Vec::with_capacity(order.len());
    for statement in order {
        let sheet = match statement {
            Statement::Assumptions => assumptions::sheet(assum_rows.take().unwrap_or_default(), &d),
            Statement::IncomeStatement => {
                income::sheet(income_rows.take().unwrap_or_default(), &ir, &d, &br)
            }
            Statement::BalanceSheet => {
                balance::sheet(balance_rows.take().unwrap_or_default(), &br, &d, &ir, &cfr)
            }
            Statement::CashFlow => {
                cashflow::sheet(cashflow_rows.take().unwrap_or_default(), &cfr, &d, &ir, &br)
            }
            Statement::Notes => {
                notes::sheet(notes_rows.take().unwrap_or_default(), &nr, &d, &ir, &br, &cfr)
            }
        };
        validate(&sheet)?;
        sheets.push(sheet);
    }

    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FC_END, MAX_COL};

    #[test]
    fn test_build_sheets_covers_every_statement() {
        let sheets = build_sheets().unwrap();
        assert_eq!(sheets.len(), Statement::ALL.len());
        for statement in Statement::ALL {
            assert!(sheets.iter().any(|s| s.statement == statement));
        }
    }

    #[test]
    fn test_no_cell_escapes_the_column_grid() {
        let sheets = build_sheets().unwrap();
        for sheet in &sheets {
            for cell in &sheet.cells {
                assert!(
                    cell.col <= MAX_COL,
                    "{}: cell at row {} col {} is past the last forecast column",
                    sheet.statement.sheet_name(),
                    cell.row,
                    cell.col
                );
                assert!(cell.row >= 1);
            }
        }
        assert_eq!(MAX_COL, FC_END);
    }

    #[test]
    fn test_cross_sheet_references_respect_generation_order() {
        // A formula may reference another sheet's same-period column only
        // if that sheet was generated earlier; prior-period references are
        // always fine because every column left of it is complete.
        let sheets = build_sheets().unwrap();
        let positions: std::collections::HashMap<_, _> = sheets
            .iter()
            .enumerate()
            .map(|(i, s)| (s.statement, i))
            .collect();

        for (i, sheet) in sheets.iter().enumerate() {
            for cell in &sheet.cells {
                if let crate::types::CellContent::Formula(expr) = &cell.content {
                    for reference in expr.references() {
                        if let Some(target) = reference.sheet {
                            if target != sheet.statement {
                                let same_period = reference.col == cell.col;
                                if same_period && target != Statement::Assumptions {
                                    // The cash loop (BS cash <- CF close,
                                    // CF wc <- BS movement) is acyclic at
                                    // cell level; Excel resolves per cell,
                                    // not per sheet.
                                    let cash_loop = (sheet.statement
                                        == Statement::BalanceSheet
                                        && target == Statement::CashFlow)
                                        || (sheet.statement == Statement::CashFlow
                                            && target == Statement::BalanceSheet);
                                    assert!(
                                        positions[&target] < i || cash_loop,
                                        "{} references {} same-period",
                                        sheet.statement.sheet_name(),
                                        target.sheet_name()
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
