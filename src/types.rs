//! Core entity types for the workbook model.
//!
//! Everything here is declarative and write-once: sheet layouts are built
//! as immutable tables, handed to the Excel writer, and never mutated
//! afterwards.

use crate::formula::Expr;

//==============================================================================
// Statements
//==============================================================================

/// The five worksheets of the model, in workbook display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statement {
    Assumptions,
    IncomeStatement,
    BalanceSheet,
    CashFlow,
    Notes,
}

impl Statement {
    /// Workbook display order (tab order in the saved file).
    pub const ALL: [Statement; 5] = [
        Statement::Assumptions,
        Statement::IncomeStatement,
        Statement::BalanceSheet,
        Statement::CashFlow,
        Statement::Notes,
    ];

    pub fn sheet_name(self) -> &'static str {
        match self {
            Statement::Assumptions => "Assumptions",
            Statement::IncomeStatement => "Income Statement",
            Statement::BalanceSheet => "Balance Sheet",
            Statement::CashFlow => "Cash Flow Statement",
            Statement::Notes => "Notes",
        }
    }

    pub fn tab_color(self) -> u32 {
        match self {
            Statement::Assumptions => 0x2E75B6,
            Statement::IncomeStatement => 0x4472C4,
            Statement::BalanceSheet => 0x548235,
            Statement::CashFlow => 0xBF8F00,
            Statement::Notes => 0x7030A0,
        }
    }

    /// Same-period statements this statement draws closing values from.
    ///
    /// This is the accounting dependency chain: forecast Income Statement
    /// lines are driven from Assumptions, the Cash Flow Statement starts
    /// from NPAT and D&A, and Balance Sheet cash is the Cash Flow closing
    /// balance. Opening-balance references (prior column) are not ordering
    /// constraints and are deliberately excluded.
    pub fn deps(self) -> &'static [Statement] {
        match self {
            Statement::Assumptions => &[],
            Statement::IncomeStatement => &[Statement::Assumptions],
            Statement::CashFlow => &[Statement::Assumptions, Statement::IncomeStatement],
            Statement::BalanceSheet => &[
                Statement::Assumptions,
                Statement::IncomeStatement,
                Statement::CashFlow,
            ],
            Statement::Notes => &[
                Statement::Assumptions,
                Statement::IncomeStatement,
                Statement::CashFlow,
                Statement::BalanceSheet,
            ],
        }
    }
}

//==============================================================================
// Rows
//==============================================================================

/// Visual/structural category of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Section header (light-blue banner across the row).
    Section,
    /// Ordinary line item.
    Detail,
    /// Bold subtotal with a medium bottom border.
    Subtotal,
    /// Bold check row with a double bottom border (should evaluate to zero
    /// or tie out to another sheet).
    Check,
    /// Blank separator row.
    Blank,
}

/// One labelled row of a statement.
#[derive(Debug, Clone)]
pub struct RowSpec {
    /// 1-indexed Excel row.
    pub row: u32,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub kind: RowKind,
}

/// Assigns consecutive Excel rows to an ordered list of line items.
///
/// Layouts are computed for every sheet before any formula is generated,
/// so cross-sheet references can only target rows that already exist.
pub struct RowBuilder {
    next: u32,
    rows: Vec<RowSpec>,
}

impl RowBuilder {
    pub fn new(first_row: u32) -> Self {
        Self {
            next: first_row,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, label: &'static str, unit: Option<&'static str>, kind: RowKind) -> u32 {
        let row = self.next;
        self.rows.push(RowSpec {
            row,
            label,
            unit,
            kind,
        });
        self.next += 1;
        row
    }

    pub fn section(&mut self, label: &'static str) -> u32 {
        self.push(label, None, RowKind::Section)
    }

    pub fn detail(&mut self, label: &'static str, unit: Option<&'static str>) -> u32 {
        self.push(label, unit, RowKind::Detail)
    }

    pub fn subtotal(&mut self, label: &'static str, unit: Option<&'static str>) -> u32 {
        self.push(label, unit, RowKind::Subtotal)
    }

    pub fn check(&mut self, label: &'static str, unit: Option<&'static str>) -> u32 {
        self.push(label, unit, RowKind::Check)
    }

    pub fn blank(&mut self) {
        self.push("", None, RowKind::Blank);
    }

    /// Advance past rows written outside the line-item table (titles,
    /// header rows).
    pub fn skip(&mut self, n: u32) {
        self.next += n;
    }

    pub fn finish(self) -> Vec<RowSpec> {
        self.rows
    }
}

//==============================================================================
// Cells
//==============================================================================

/// Number format applied to a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumFmt {
    /// `#,##0;(#,##0);"-"` - thousands separators, parenthesized negatives.
    Accounting,
    /// `0.0%`
    Percent,
    /// `#,##0`
    Number,
    /// `#,##0.0`
    Number1dp,
}

/// Extra styling tag beyond what (row kind, period) implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Style derived from the row kind and column alone.
    Auto,
    /// Blue input font (editable assumption cells).
    Input,
    /// Green scenario-toggle cell.
    Toggle,
}

#[derive(Debug, Clone)]
pub enum CellContent {
    Number(f64),
    Formula(Expr),
    Text(&'static str),
}

/// The content of one (row, column) intersection.
#[derive(Debug, Clone)]
pub struct CellSpec {
    /// 1-indexed Excel row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u16,
    pub content: CellContent,
    pub fmt: NumFmt,
    pub style: CellStyle,
}

impl CellSpec {
    pub fn number(row: u32, col: u16, value: f64, fmt: NumFmt) -> Self {
        Self {
            row,
            col,
            content: CellContent::Number(value),
            fmt,
            style: CellStyle::Auto,
        }
    }

    pub fn formula(row: u32, col: u16, expr: Expr, fmt: NumFmt) -> Self {
        Self {
            row,
            col,
            content: CellContent::Formula(expr),
            fmt,
            style: CellStyle::Auto,
        }
    }

    pub fn text(row: u32, col: u16, value: &'static str) -> Self {
        Self {
            row,
            col,
            content: CellContent::Text(value),
            fmt: NumFmt::Number,
            style: CellStyle::Auto,
        }
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

//==============================================================================
// Sheets
//==============================================================================

/// A complete worksheet definition, ready to be written.
#[derive(Debug)]
pub struct SheetSpec {
    pub statement: Statement,
    pub title: String,
    pub subtitle: &'static str,
    /// 1-indexed row carrying the FY column headers.
    pub header_row: u32,
    /// Label written in column A of the header row.
    pub header_label: &'static str,
    /// Optional label written in column B of the header row.
    pub unit_header: Option<&'static str>,
    pub rows: Vec<RowSpec>,
    pub cells: Vec<CellSpec>,
    /// Top-left cell of the scrolled pane, 0-indexed (row, col).
    pub freeze: (u32, u16),
    pub label_width: f64,
    pub data_width: f64,
}

impl SheetSpec {
    /// Last populated line-item row (1-indexed), used to bound styling
    /// passes.
    pub fn last_row(&self) -> u32 {
        self.rows.iter().map(|r| r.row).max().unwrap_or(self.header_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_is_fixed() {
        let names: Vec<&str> = Statement::ALL.iter().map(|s| s.sheet_name()).collect();
        assert_eq!(
            names,
            vec![
                "Assumptions",
                "Income Statement",
                "Balance Sheet",
                "Cash Flow Statement",
                "Notes"
            ]
        );
    }

    #[test]
    fn test_row_builder_assigns_consecutive_rows() {
        let mut rows = RowBuilder::new(5);
        let first = rows.section("REVENUE");
        let second = rows.detail("Toll revenue", Some("A$m"));
        rows.blank();
        let fourth = rows.subtotal("Total Revenue", Some("A$m"));
        assert_eq!(first, 5);
        assert_eq!(second, 6);
        assert_eq!(fourth, 8);
        assert_eq!(rows.finish().len(), 4);
    }

    #[test]
    fn test_row_builder_skip_leaves_gap() {
        let mut rows = RowBuilder::new(4);
        rows.section("TOGGLES");
        rows.skip(2);
        let after = rows.detail("Capex", Some("A$m"));
        assert_eq!(after, 7);
    }

    #[test]
    fn test_deps_follow_accounting_chain() {
        assert!(Statement::Assumptions.deps().is_empty());
        assert_eq!(
            Statement::CashFlow.deps(),
            &[Statement::Assumptions, Statement::IncomeStatement]
        );
        assert!(Statement::BalanceSheet
            .deps()
            .contains(&Statement::CashFlow));
    }
}
