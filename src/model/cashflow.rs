//! Cash Flow Statement sheet.
//!
//! Indirect method: NPAT plus non-cash add-backs and working capital
//! movements. The closing cash balance feeds the Balance Sheet cash line,
//! and the opening balance comes off the prior-year Balance Sheet column,
//! which keeps the loop acyclic at cell level.

use crate::formula::{cell, num};
use crate::layout::{Period, HIST_YEARS};
use crate::model::assumptions::DriverRows;
use crate::model::balance::BalanceRows;
use crate::model::income::{self, IncomeRows};
use crate::model::{assum, growth, on, on_prev, prior, COMPANY};
use crate::types::{CellSpec, NumFmt, RowBuilder, RowSpec, SheetSpec, Statement};

#[derive(Debug, Clone)]
pub struct CashflowRows {
    pub npat: u32,
    pub da: u32,
    pub wc: u32,
    pub other_ops: u32,
    pub net_cfo: u32,
    pub capex: u32,
    pub other_inv: u32,
    pub net_cfi: u32,
    pub debt_proc: u32,
    pub div_paid: u32,
    pub equity_iss: u32,
    pub net_cff: u32,
    pub net_change: u32,
    pub fx: u32,
    pub open_cash: u32,
    pub close_cash: u32,
}

// Historical cash flows FY21-FY25, A$ millions. Outflows are negative.
pub const HIST_WC_CHANGE: [f64; HIST_YEARS] = [-45.0, 30.0, -60.0, 25.0, -15.0];
pub const HIST_OTHER_OPS: [f64; HIST_YEARS] = [120.0, 135.0, 150.0, 160.0, 170.0];
pub const HIST_CAPEX: [f64; HIST_YEARS] = [-628.0, -1_092.0, -1_805.0, -1_420.0, -1_200.0];
pub const HIST_OTHER_INV: [f64; HIST_YEARS] = [-150.0, -80.0, -120.0, -100.0, -90.0];
pub const HIST_DEBT_PROC: [f64; HIST_YEARS] = [1_200.0, 2_050.0, 2_800.0, 600.0, 300.0];
pub const HIST_DIV_PAID: [f64; HIST_YEARS] = [-792.0, -1_032.0, -1_218.0, -1_276.0, -1_313.0];
pub const HIST_EQUITY_ISS: [f64; HIST_YEARS] = [405.0, 450.0, 430.0, 340.0, 290.0];

/// Opening cash: FY21 opens on the pre-history balance, later years open
/// on the prior year's closing Balance Sheet cash.
pub fn hist_open_cash(i: usize) -> f64 {
    if i == 0 {
        2_285.0
    } else {
        crate::model::balance::HIST_CASH[i - 1]
    }
}

pub fn hist_close_cash(i: usize) -> f64 {
    crate::model::balance::HIST_CASH[i]
}

pub fn hist_net_cfo(i: usize) -> f64 {
    income::hist_npat(i) - income::HIST_DA[i] + HIST_WC_CHANGE[i] + HIST_OTHER_OPS[i]
}

pub fn hist_net_cfi(i: usize) -> f64 {
    HIST_CAPEX[i] + HIST_OTHER_INV[i]
}

pub fn hist_net_cff(i: usize) -> f64 {
    HIST_DEBT_PROC[i] + HIST_DIV_PAID[i] + HIST_EQUITY_ISS[i]
}

pub fn hist_net_change(i: usize) -> f64 {
    hist_net_cfo(i) + hist_net_cfi(i) + hist_net_cff(i)
}

/// FX / other is the residual that reconciles opening to closing cash.
pub fn hist_fx(i: usize) -> f64 {
    hist_close_cash(i) - hist_open_cash(i) - hist_net_change(i)
}

pub fn layout() -> (Vec<RowSpec>, CashflowRows) {
    let mut rows = RowBuilder::new(5);

    rows.section("OPERATING ACTIVITIES");
    let npat = rows.detail("Net profit / (loss) after tax", Some("A$m"));
    let da = rows.detail("Add back: depreciation & amortisation", Some("A$m"));
    let wc = rows.detail("Changes in working capital", Some("A$m"));
    let other_ops = rows.detail("Other operating adjustments", Some("A$m"));
    let net_cfo = rows.subtotal("Net Cash from Operating Activities", Some("A$m"));
    rows.blank();

    rows.section("INVESTING ACTIVITIES");
    let capex = rows.detail("Purchases of PP&E and intangibles (capex)", Some("A$m"));
    let other_inv = rows.detail("Other investing activities", Some("A$m"));
    let net_cfi = rows.subtotal("Net Cash used in Investing Activities", Some("A$m"));
    rows.blank();

    rows.section("FINANCING ACTIVITIES");
    let debt_proc = rows.detail("Net proceeds from / (repayment of) borrowings", Some("A$m"));
    let div_paid = rows.detail("Distributions paid to security holders", Some("A$m"));
    let equity_iss = rows.detail("Proceeds from equity issuance (DRP)", Some("A$m"));
    let net_cff = rows.subtotal("Net Cash from Financing Activities", Some("A$m"));
    rows.blank();

    let net_change = rows.subtotal("Net Increase / (Decrease) in Cash", Some("A$m"));
    let fx = rows.detail("Effects of FX / other", Some("A$m"));
    let open_cash = rows.detail("Opening cash balance", Some("A$m"));
    let close_cash = rows.check("Closing Cash Balance", Some("A$m"));

    let cashflow_rows = CashflowRows {
        npat,
        da,
        wc,
        other_ops,
        net_cfo,
        capex,
        other_inv,
        net_cfi,
        debt_proc,
        div_paid,
        equity_iss,
        net_cff,
        net_change,
        fx,
        open_cash,
        close_cash,
    };

    (rows.finish(), cashflow_rows)
}

fn hist_row(cells: &mut Vec<CellSpec>, row: u32, values: &[f64; HIST_YEARS]) {
    for p in Period::historical() {
        cells.push(CellSpec::number(
            row,
            p.col,
            values[p.index()],
            NumFmt::Accounting,
        ));
    }
}

fn hist_derived(cells: &mut Vec<CellSpec>, row: u32, f: impl Fn(usize) -> f64) {
    for p in Period::historical() {
        cells.push(CellSpec::number(row, p.col, f(p.index()), NumFmt::Accounting));
    }
}

pub fn sheet(
    rows: Vec<RowSpec>,
    cf: &CashflowRows,
    d: &DriverRows,
    ir: &IncomeRows,
    br: &BalanceRows,
) -> SheetSpec {
    let mut cells = Vec::new();

    hist_derived(&mut cells, cf.npat, income::hist_npat);
    hist_derived(&mut cells, cf.da, |i| -income::HIST_DA[i]);
    hist_row(&mut cells, cf.wc, &HIST_WC_CHANGE);
    hist_row(&mut cells, cf.other_ops, &HIST_OTHER_OPS);
    hist_derived(&mut cells, cf.net_cfo, hist_net_cfo);
    hist_row(&mut cells, cf.capex, &HIST_CAPEX);
    hist_row(&mut cells, cf.other_inv, &HIST_OTHER_INV);
    hist_derived(&mut cells, cf.net_cfi, hist_net_cfi);
    hist_row(&mut cells, cf.debt_proc, &HIST_DEBT_PROC);
    hist_row(&mut cells, cf.div_paid, &HIST_DIV_PAID);
    hist_row(&mut cells, cf.equity_iss, &HIST_EQUITY_ISS);
    hist_derived(&mut cells, cf.net_cff, hist_net_cff);
    hist_derived(&mut cells, cf.net_change, hist_net_change);
    hist_derived(&mut cells, cf.fx, hist_fx);
    hist_derived(&mut cells, cf.open_cash, hist_open_cash);
    hist_derived(&mut cells, cf.close_cash, hist_close_cash);

    for p in Period::forecast() {
        let mut push = |row: u32, expr| {
            cells.push(CellSpec::formula(row, p.col, expr, NumFmt::Accounting));
        };

        push(cf.npat, on(Statement::IncomeStatement, ir.npat, p));
        push(cf.da, -on(Statement::IncomeStatement, ir.da, p));
        // Receivables build absorbs cash, payables build releases it
        push(
            cf.wc,
            -(on(Statement::BalanceSheet, br.recv, p)
                - on_prev(Statement::BalanceSheet, br.recv, p))
                + (on(Statement::BalanceSheet, br.pay, p)
                    - on_prev(Statement::BalanceSheet, br.pay, p)),
        );
        push(cf.other_ops, growth(cf.other_ops, d.other_ops_growth, p));
        push(
            cf.net_cfo,
            cell(p.col, cf.npat)
                + cell(p.col, cf.da)
                + cell(p.col, cf.wc)
                + cell(p.col, cf.other_ops),
        );

        push(cf.capex, -assum(d.capex, p));
        push(cf.other_inv, prior(cf.other_inv, p));
        push(
            cf.net_cfi,
            cell(p.col, cf.capex) + cell(p.col, cf.other_inv),
        );

        push(cf.debt_proc, assum(d.net_debt, p));
        // DPS is in cents per security, shares in millions
        push(
            cf.div_paid,
            -(assum(d.dps, p) * assum(d.shares, p)) / num(100.0),
        );
        push(
            cf.equity_iss,
            on_prev(Statement::BalanceSheet, br.share_cap, p) * assum(d.equity_iss, p),
        );
        push(
            cf.net_cff,
            cell(p.col, cf.debt_proc) + cell(p.col, cf.div_paid) + cell(p.col, cf.equity_iss),
        );

        push(
            cf.net_change,
            cell(p.col, cf.net_cfo) + cell(p.col, cf.net_cfi) + cell(p.col, cf.net_cff),
        );
        push(cf.open_cash, on_prev(Statement::BalanceSheet, br.cash, p));
        push(
            cf.close_cash,
            cell(p.col, cf.open_cash) + cell(p.col, cf.net_change) + cell(p.col, cf.fx),
        );
        cells.push(CellSpec::number(cf.fx, p.col, 0.0, NumFmt::Accounting));
    }

    SheetSpec {
        statement: Statement::CashFlow,
        title: format!("{} \u{2013} Cash Flow Statement", COMPANY),
        subtitle: "A$ millions  |  Fiscal year ends 30 June",
        header_row: 4,
        header_label: "Cash Flow Statement",
        unit_header: None,
        rows,
        cells,
        freeze: (4, 2),
        label_width: 42.0,
        data_width: 15.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FC_START;
    use crate::model::{assumptions, balance};
    use crate::types::CellContent;
    use pretty_assertions::assert_eq;

    fn build() -> (SheetSpec, CashflowRows) {
        let (_, d) = assumptions::layout();
        let (_, ir) = income::layout();
        let (_, br) = balance::layout();
        let (rows, cf) = layout();
        let spec = sheet(rows, &cf, &d, &ir, &br);
        (spec, cf)
    }

    fn formula_at(spec: &SheetSpec, row: u32, col: u16) -> String {
        match &spec
            .cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .unwrap()
            .content
        {
            CellContent::Formula(expr) => expr.render(),
            other => panic!("expected formula at ({}, {}), got {:?}", row, col, other),
        }
    }

    #[test]
    fn test_historical_cash_reconciles_to_balance_sheet() {
        for i in 0..HIST_YEARS {
            assert_eq!(
                hist_open_cash(i) + hist_net_change(i) + hist_fx(i),
                hist_close_cash(i)
            );
        }
    }

    #[test]
    fn test_forecast_npat_mirrors_income_statement() {
        let (spec, cf) = build();
        let (_, ir) = income::layout();
        let formula = formula_at(&spec, cf.npat, FC_START);
        assert_eq!(formula, format!("'Income Statement'!H{}", ir.npat));
    }

    #[test]
    fn test_working_capital_movement_uses_balance_sheet_deltas() {
        let (spec, cf) = build();
        let (_, br) = balance::layout();
        let formula = formula_at(&spec, cf.wc, FC_START);
        assert_eq!(
            formula,
            format!(
                "-('Balance Sheet'!H{r}-'Balance Sheet'!G{r})+'Balance Sheet'!H{p}-'Balance Sheet'!G{p}",
                r = br.recv,
                p = br.pay
            )
        );
    }

    #[test]
    fn test_closing_cash_rolls_forward_from_opening() {
        let (spec, cf) = build();
        let formula = formula_at(&spec, cf.close_cash, FC_START);
        assert_eq!(
            formula,
            format!("H{}+H{}+H{}", cf.open_cash, cf.net_change, cf.fx)
        );
    }

    #[test]
    fn test_distributions_convert_cents_to_millions() {
        let (spec, cf) = build();
        let (_, d) = assumptions::layout();
        let formula = formula_at(&spec, cf.div_paid, FC_START);
        assert_eq!(
            formula,
            format!("-Assumptions!H{}*Assumptions!H{}/100", d.dps, d.shares)
        );
    }
}
